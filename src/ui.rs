use web_sys as web;

use crate::constants::*;
use crate::controls::{clamp_volume, format_clock, parse_slider, play_button_state, seek_percent};
use crate::dom;

/// The player's control surface. Everything here is a direct reflection of
/// media element state.
#[derive(Clone)]
pub struct PlayerUi {
    pub audio: web::HtmlMediaElement,
    pub play_button: web::Element,
    pub play_text: Option<web::Element>,
    pub seek: web::HtmlInputElement,
    pub current: web::Element,
    pub duration: web::Element,
    pub volume: web::HtmlInputElement,
}

impl PlayerUi {
    /// `None` unless every required control is present.
    pub fn find(root: &web::Element) -> Option<Self> {
        Some(Self {
            audio: dom::query(root, AUDIO)?,
            play_button: dom::query(root, PLAY_BUTTON)?,
            play_text: dom::query(root, PLAY_TEXT),
            seek: dom::query(root, SEEK)?,
            current: dom::query(root, CURRENT_TIME)?,
            duration: dom::query(root, DURATION)?,
            volume: dom::query(root, VOLUME)?,
        })
    }

    pub fn set_playing(&self, playing: bool) {
        let view = play_button_state(playing);
        _ = self.play_button.set_attribute(ATTR_STATE, view.state);
        _ = self.play_button.set_attribute(ATTR_ARIA_LABEL, view.label);
        if let Some(text) = &self.play_text {
            dom::set_text(text, view.label);
        }
    }

    pub fn sync_time(&self) {
        let now = self.audio.current_time();
        let total = self.audio.duration();
        dom::set_text(&self.current, &format_clock(now));
        dom::set_text(&self.duration, &format_clock(total));
        let pct = seek_percent(now, total, SEEK_MAX);
        self.seek.set_value(&format!("{}", pct));
    }

    pub fn apply_volume(&self) {
        let v = clamp_volume(parse_slider(&self.volume.value()));
        self.audio.set_volume(v);
    }
}
