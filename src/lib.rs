#![cfg(target_arch = "wasm32")]
use snow_core::constants::{CHORUS_DURATION_SEC, CHORUS_STARTS_SEC};
use snow_core::{ChorusWindows, EngineConfig};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod chorus;
mod constants;
mod controls;
mod dom;
mod events;
mod frame;
mod render;
mod ui;

use crate::constants::{PLAYER_ROOT, SNOW_CANVAS};
use crate::frame::SnowHandle;
use crate::ui::PlayerUi;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("snow-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        dom::add_listener(&document, "DOMContentLoaded", run_init);
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(root) = dom::query_document::<web::Element>(&document, PLAYER_ROOT) else {
        log::info!("no {} on this page; nothing to do", PLAYER_ROOT);
        return Ok(());
    };
    let ui = PlayerUi::find(&root).ok_or_else(|| anyhow::anyhow!("player markup incomplete"))?;

    // Snow is decoration: any failure here leaves the player working.
    let snow = dom::query_document::<web::HtmlCanvasElement>(&document, SNOW_CANVAS)
        .and_then(|canvas| {
            let windows = chorus_windows(&canvas);
            let config = EngineConfig::default().with_seed(rand::random());
            match frame::build_snow(canvas, windows, config) {
                Ok(handle) => Some(handle),
                Err(e) => {
                    log::warn!("[snow] disabled: {:?}", e);
                    None
                }
            }
        });
    if snow.is_none() {
        log::info!("[snow] running without the effect");
    }

    wire(&ui, snow);
    Ok(())
}

fn wire(ui: &PlayerUi, snow: Option<SnowHandle>) {
    events::wire_playback(ui, snow);
    events::wire_controls(ui);
    ui.apply_volume();
    ui.set_playing(false);
    ui.sync_time();
}

/// Chorus windows from the canvas attributes, falling back to the bundled
/// track's layout when they are absent or malformed.
fn chorus_windows(canvas: &web::HtmlCanvasElement) -> ChorusWindows {
    let starts = match canvas.get_attribute(chorus::ATTR_CHORUS_STARTS) {
        None => CHORUS_STARTS_SEC.to_vec(),
        Some(raw) => chorus::parse_starts(&raw).unwrap_or_else(|| {
            log::warn!("[snow] bad {}='{}'; using defaults", chorus::ATTR_CHORUS_STARTS, raw);
            CHORUS_STARTS_SEC.to_vec()
        }),
    };
    let duration = match canvas.get_attribute(chorus::ATTR_CHORUS_DURATION) {
        None => CHORUS_DURATION_SEC,
        Some(raw) => chorus::parse_duration(&raw).unwrap_or_else(|| {
            log::warn!("[snow] bad {}='{}'; using defaults", chorus::ATTR_CHORUS_DURATION, raw);
            CHORUS_DURATION_SEC
        }),
    };
    ChorusWindows::from_starts(&starts, duration).unwrap_or_else(|e| {
        log::warn!("[snow] {e}; using the default chorus layout");
        ChorusWindows::default_chorus()
    })
}
