// Pure helpers behind the player controls. No web-sys here so the host-side
// tests can include this file directly.

use crate::constants::{LABEL_PAUSE, LABEL_PLAY, STATE_PAUSED, STATE_PLAYING};

/// `m:ss` for a playback position. Unknown or negative times read `0:00`.
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let minutes = (seconds / 60.0).floor() as u64;
    let rest = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, rest)
}

#[inline]
pub fn is_known_duration(duration: f64) -> bool {
    duration.is_finite() && duration > 0.0
}

/// Seek bar position in `0..=max` for the current time.
pub fn seek_percent(current: f64, duration: f64, max: f64) -> f64 {
    if !is_known_duration(duration) || !current.is_finite() {
        return 0.0;
    }
    (current / duration * max).clamp(0.0, max)
}

/// Playback time for a seek bar value, or `None` while the duration is
/// still unknown.
pub fn seek_target(value: f64, duration: f64, max: f64) -> Option<f64> {
    if !is_known_duration(duration) || !value.is_finite() || max <= 0.0 {
        return None;
    }
    Some((value / max * duration).clamp(0.0, duration))
}

/// Media volume from a slider value. Garbage input means full volume.
pub fn clamp_volume(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Slider strings come straight from `input.value`.
pub fn parse_slider(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayButtonState {
    pub state: &'static str,
    pub label: &'static str,
}

/// What the play button shows. The label doubles as its aria-label.
pub fn play_button_state(playing: bool) -> PlayButtonState {
    if playing {
        PlayButtonState {
            state: STATE_PLAYING,
            label: LABEL_PAUSE,
        }
    } else {
        PlayButtonState {
            state: STATE_PAUSED,
            label: LABEL_PLAY,
        }
    }
}
