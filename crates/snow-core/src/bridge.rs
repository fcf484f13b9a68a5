use crate::window::ChorusWindows;

/// Notifications coming from the media element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlaybackEvent {
    /// Playback position advanced, in seconds.
    TimeAdvanced(f64),
    Started,
    Paused,
    Ended,
}

/// Anything that can be switched on and off by playback.
pub trait ActivationSink {
    fn set_active(&mut self, on: bool);
}

/// Maps playback notifications onto the engine's activation target.
#[derive(Clone, Debug)]
pub struct ActivationBridge {
    windows: ChorusWindows,
}

impl ActivationBridge {
    pub fn new(windows: ChorusWindows) -> Self {
        Self { windows }
    }

    pub fn windows(&self) -> &ChorusWindows {
        &self.windows
    }

    /// Target implied by `event`, or `None` when the event leaves it alone.
    pub fn target_for(&self, event: PlaybackEvent) -> Option<bool> {
        match event {
            PlaybackEvent::TimeAdvanced(_) if self.windows.is_empty() => Some(false),
            PlaybackEvent::TimeAdvanced(t) => Some(self.windows.is_active(t)),
            PlaybackEvent::Paused | PlaybackEvent::Ended => Some(false),
            // the next position update decides
            PlaybackEvent::Started => None,
        }
    }

    /// Apply `event` to `sink`. Returns the target that was set, if any.
    pub fn handle<A: ActivationSink + ?Sized>(
        &self,
        event: PlaybackEvent,
        sink: &mut A,
    ) -> Option<bool> {
        let target = self.target_for(event)?;
        sink.set_active(target);
        Some(target)
    }
}
