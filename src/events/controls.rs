use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::constants::SEEK_MAX;
use crate::controls::{parse_slider, seek_target};
use crate::dom;
use crate::ui::PlayerUi;

pub fn wire_controls(ui: &PlayerUi) {
    wire_play_button(ui);
    wire_seek(ui);
    wire_volume(ui);
}

fn wire_play_button(ui: &PlayerUi) {
    let u = ui.clone();
    dom::add_listener(&ui.play_button, "click", move || {
        if !u.audio.paused() {
            _ = u.audio.pause();
            return;
        }
        match u.audio.play() {
            Ok(promise) => spawn_local(async move {
                // autoplay policy or missing user gesture; nothing to do
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("[player] play() rejected: {:?}", e);
                }
            }),
            Err(e) => log::debug!("[player] play() threw: {:?}", e),
        }
    });
}

fn wire_seek(ui: &PlayerUi) {
    let u = ui.clone();
    dom::add_listener(&ui.seek, "input", move || {
        let value = parse_slider(&u.seek.value());
        if let Some(t) = seek_target(value, u.audio.duration(), SEEK_MAX) {
            u.audio.set_current_time(t);
            u.sync_time();
        }
    });
}

fn wire_volume(ui: &PlayerUi) {
    let u = ui.clone();
    dom::add_listener(&ui.volume, "input", move || u.apply_volume());
}
