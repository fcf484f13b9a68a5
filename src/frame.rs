use std::cell::RefCell;
use std::rc::Rc;

use snow_core::{
    ActivationBridge, ChorusWindows, EngineConfig, FrameHandle, FrameScheduler, PlaybackEvent,
    SnowEngine,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render::CanvasSurface;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` behind the engine's scheduling seam.
///
/// The callback slot is filled after the engine exists, since the callback
/// itself has to reach the engine.
pub struct RafScheduler {
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let window = web::window()?;
        let slot = self.callback.borrow();
        let callback = slot.as_ref()?;
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id as u32 as u64)),
            Err(e) => {
                log::warn!("[snow] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(handle.0 as u32 as i32);
        }
    }
}

pub type WebEngine = SnowEngine<CanvasSurface, RafScheduler>;

/// Engine plus the bridge that feeds it, shared with the media listeners.
#[derive(Clone)]
pub struct SnowHandle {
    engine: Rc<RefCell<WebEngine>>,
    bridge: Rc<ActivationBridge>,
}

impl SnowHandle {
    pub fn notify(&self, event: PlaybackEvent) {
        match self.engine.try_borrow_mut() {
            Ok(mut engine) => {
                self.bridge.handle(event, &mut *engine);
            }
            Err(_) => log::warn!("[snow] engine busy; dropped {:?}", event),
        }
    }
}

pub fn build_snow(
    canvas: web::HtmlCanvasElement,
    windows: ChorusWindows,
    config: EngineConfig,
) -> anyhow::Result<SnowHandle> {
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let scheduler = RafScheduler {
        callback: slot.clone(),
    };
    let engine = Rc::new(RefCell::new(SnowEngine::new(
        config,
        CanvasSurface::new(canvas),
        scheduler,
    )?));

    let engine_tick = engine.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        if let Ok(mut engine) = engine_tick.try_borrow_mut() {
            engine.tick(timestamp_ms);
        }
    }) as Box<dyn FnMut(f64)>));

    log::info!(
        "[snow] ready: {} chorus window(s), capacity {}",
        windows.len(),
        engine.borrow().config().capacity
    );
    Ok(SnowHandle {
        engine,
        bridge: Rc::new(ActivationBridge::new(windows)),
    })
}
