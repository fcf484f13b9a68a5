use snow_core::PlaybackEvent;

use crate::dom;
use crate::frame::SnowHandle;
use crate::ui::PlayerUi;

/// Media element notifications: keep the controls in sync and feed the
/// snow bridge. Snow is optional; without it only the controls update.
pub fn wire_playback(ui: &PlayerUi, snow: Option<SnowHandle>) {
    let target = ui.audio.clone();

    let u = ui.clone();
    dom::add_listener(&target, "loadedmetadata", move || u.sync_time());

    let u = ui.clone();
    let s = snow.clone();
    dom::add_listener(&target, "timeupdate", move || {
        u.sync_time();
        if let Some(s) = &s {
            s.notify(PlaybackEvent::TimeAdvanced(u.audio.current_time()));
        }
    });

    let u = ui.clone();
    let s = snow.clone();
    dom::add_listener(&target, "ended", move || {
        u.set_playing(false);
        if let Some(s) = &s {
            s.notify(PlaybackEvent::Ended);
        }
        u.sync_time();
    });

    let u = ui.clone();
    let s = snow.clone();
    dom::add_listener(&target, "play", move || {
        u.set_playing(true);
        if let Some(s) = &s {
            s.notify(PlaybackEvent::Started);
        }
    });

    let u = ui.clone();
    dom::add_listener(&target, "pause", move || {
        u.set_playing(false);
        if let Some(s) = &snow {
            s.notify(PlaybackEvent::Paused);
        }
    });
}
