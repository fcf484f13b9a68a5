mod support;

use snow_core::{ActivationBridge, ActivationSink, ChorusWindows, LoopState, PlaybackEvent};
use support::*;

#[derive(Default)]
struct RecordingSink {
    targets: Vec<bool>,
}

impl ActivationSink for RecordingSink {
    fn set_active(&mut self, on: bool) {
        self.targets.push(on);
    }
}

fn chorus_at_90() -> ActivationBridge {
    ActivationBridge::new(ChorusWindows::from_starts(&[90.0], 22.0).unwrap())
}

#[test]
fn time_updates_follow_the_windows() {
    let bridge = chorus_at_90();
    let mut sink = RecordingSink::default();
    for t in [89.9, 90.0, 100.0, 112.0, 112.1] {
        bridge.handle(PlaybackEvent::TimeAdvanced(t), &mut sink);
    }
    assert_eq!(sink.targets, vec![false, true, true, true, false]);
}

#[test]
fn no_windows_always_switches_off() {
    let bridge = ActivationBridge::new(ChorusWindows::empty());
    for t in [0.0, 90.0, 100.0, 5_000.0, f64::NAN] {
        assert_eq!(
            bridge.target_for(PlaybackEvent::TimeAdvanced(t)),
            Some(false)
        );
    }
}

#[test]
fn pause_and_end_switch_off_immediately() {
    let bridge = chorus_at_90();
    let mut sink = RecordingSink::default();
    bridge.handle(PlaybackEvent::TimeAdvanced(100.0), &mut sink);
    assert_eq!(bridge.handle(PlaybackEvent::Paused, &mut sink), Some(false));
    bridge.handle(PlaybackEvent::TimeAdvanced(100.0), &mut sink);
    assert_eq!(bridge.handle(PlaybackEvent::Ended, &mut sink), Some(false));
    assert_eq!(sink.targets, vec![true, false, true, false]);
}

#[test]
fn start_leaves_the_target_alone() {
    let bridge = chorus_at_90();
    let mut sink = RecordingSink::default();
    assert_eq!(bridge.handle(PlaybackEvent::Started, &mut sink), None);
    assert!(sink.targets.is_empty());
}

#[test]
fn drives_the_engine_through_a_chorus() {
    let bridge = chorus_at_90();
    let mut engine = make_engine();

    bridge.handle(PlaybackEvent::TimeAdvanced(80.0), &mut engine);
    assert_eq!(engine.state(), LoopState::Idle);
    assert_eq!(engine.surface().draw_ops(), 0);

    bridge.handle(PlaybackEvent::TimeAdvanced(100.0), &mut engine);
    assert!(engine.is_active());
    assert!(engine.is_running());
    let now = run_frames(&mut engine, 0.0, 120);
    assert!(engine.intensity() > 0.5);

    bridge.handle(PlaybackEvent::Paused, &mut engine);
    assert!(!engine.is_active());
    assert_eq!(engine.target(), 0.0);
    // still fading
    assert!(engine.is_running());

    run_frames(&mut engine, now, 10_000);
    assert_eq!(engine.state(), LoopState::Idle);
    assert_eq!(engine.particle_count(), 0);
}
