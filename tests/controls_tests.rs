// Host-side tests for the player control helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod controls {
    include!("../src/controls.rs");
}

use constants::*;
use controls::*;

#[test]
fn clock_formats_minutes_and_padded_seconds() {
    assert_eq!(format_clock(0.0), "0:00");
    assert_eq!(format_clock(5.4), "0:05");
    assert_eq!(format_clock(59.99), "0:59");
    assert_eq!(format_clock(60.0), "1:00");
    assert_eq!(format_clock(136.0), "2:16");
    assert_eq!(format_clock(3725.0), "62:05");
}

#[test]
fn clock_treats_unknown_times_as_zero() {
    assert_eq!(format_clock(f64::NAN), "0:00");
    assert_eq!(format_clock(f64::INFINITY), "0:00");
    assert_eq!(format_clock(-3.0), "0:00");
}

#[test]
fn seek_percent_tracks_position() {
    assert_eq!(seek_percent(0.0, 200.0, SEEK_MAX), 0.0);
    assert!((seek_percent(50.0, 200.0, SEEK_MAX) - 25.0).abs() < 1e-9);
    assert_eq!(seek_percent(200.0, 200.0, SEEK_MAX), SEEK_MAX);
    // overshoot past the end stays pinned
    assert_eq!(seek_percent(250.0, 200.0, SEEK_MAX), SEEK_MAX);
}

#[test]
fn seek_percent_is_zero_without_duration() {
    assert_eq!(seek_percent(10.0, f64::NAN, SEEK_MAX), 0.0);
    assert_eq!(seek_percent(10.0, 0.0, SEEK_MAX), 0.0);
    assert_eq!(seek_percent(10.0, f64::INFINITY, SEEK_MAX), 0.0);
    assert_eq!(seek_percent(f64::NAN, 100.0, SEEK_MAX), 0.0);
}

#[test]
fn seek_target_maps_slider_to_time() {
    assert_eq!(seek_target(0.0, 240.0, SEEK_MAX), Some(0.0));
    assert_eq!(seek_target(50.0, 240.0, SEEK_MAX), Some(120.0));
    assert_eq!(seek_target(100.0, 240.0, SEEK_MAX), Some(240.0));
    assert_eq!(seek_target(130.0, 240.0, SEEK_MAX), Some(240.0));
    assert_eq!(seek_target(-5.0, 240.0, SEEK_MAX), Some(0.0));
}

#[test]
fn seek_target_ignored_until_duration_known() {
    assert_eq!(seek_target(50.0, f64::NAN, SEEK_MAX), None);
    assert_eq!(seek_target(50.0, 0.0, SEEK_MAX), None);
    assert_eq!(seek_target(f64::NAN, 240.0, SEEK_MAX), None);
    assert_eq!(seek_target(50.0, 240.0, 0.0), None);
}

#[test]
fn volume_is_clamped_to_unit_range() {
    assert_eq!(clamp_volume(0.4), 0.4);
    assert_eq!(clamp_volume(-0.2), 0.0);
    assert_eq!(clamp_volume(1.7), 1.0);
    assert_eq!(clamp_volume(f64::NAN), 1.0);
}

#[test]
fn slider_strings_parse_or_become_nan() {
    assert_eq!(parse_slider("0.25"), 0.25);
    assert_eq!(parse_slider(" 42 "), 42.0);
    assert!(parse_slider("").is_nan());
    assert!(parse_slider("loud").is_nan());
    // garbage volume lands on full volume
    assert_eq!(clamp_volume(parse_slider("loud")), 1.0);
}

#[test]
fn play_button_shows_the_next_action() {
    let playing = play_button_state(true);
    assert_eq!(playing.state, STATE_PLAYING);
    assert_eq!(playing.label, LABEL_PAUSE);

    let paused = play_button_state(false);
    assert_eq!(paused.state, STATE_PAUSED);
    assert_eq!(paused.label, LABEL_PLAY);
    assert_ne!(playing, paused);
}
