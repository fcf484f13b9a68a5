// Shared fakes for the engine tests.

#![allow(dead_code)]

use snow_core::{DrawSurface, EngineConfig, ManualScheduler, SnowEngine};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
}

/// Surface that remembers what was drawn on the latest frame.
#[derive(Debug)]
pub struct RecordingSurface {
    pub css: (f64, f64),
    pub dpr: f64,
    pub backing: (u32, u32),
    pub resizes: u32,
    pub clears: u32,
    pub total_circles: u64,
    pub frame: Vec<Circle>,
    pub active_flag: Option<bool>,
}

impl RecordingSurface {
    pub fn new(css_w: f64, css_h: f64, dpr: f64) -> Self {
        Self {
            css: (css_w, css_h),
            dpr,
            backing: (0, 0),
            resizes: 0,
            clears: 0,
            total_circles: 0,
            frame: Vec::new(),
            active_flag: None,
        }
    }

    /// Number of surface operations so far; stays flat when nothing draws.
    pub fn draw_ops(&self) -> u64 {
        self.clears as u64 + self.total_circles
    }
}

impl DrawSurface for RecordingSurface {
    fn css_size(&self) -> (f64, f64) {
        self.css
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.dpr
    }

    fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
        self.resizes += 1;
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.frame.clear();
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, alpha: f32) {
        self.total_circles += 1;
        self.frame.push(Circle {
            x,
            y,
            radius,
            alpha,
        });
    }

    fn mark_active(&mut self, active: bool) {
        self.active_flag = Some(active);
    }
}

pub type TestEngine = SnowEngine<RecordingSurface, ManualScheduler>;

pub const FRAME_MS: f64 = 1000.0 / 60.0;

pub fn make_engine() -> TestEngine {
    make_engine_with(EngineConfig::default().with_seed(7))
}

pub fn make_engine_with(config: EngineConfig) -> TestEngine {
    SnowEngine::new(
        config,
        RecordingSurface::new(400.0, 300.0, 2.0),
        ManualScheduler::new(),
    )
    .expect("valid config")
}

/// Fire pending frames at 60 fps until the loop stops or `max_frames`
/// frames have run. Returns the timestamp after the last frame.
pub fn run_frames(engine: &mut TestEngine, start_ms: f64, max_frames: usize) -> f64 {
    let mut now = start_ms;
    for _ in 0..max_frames {
        if engine.scheduler_mut().take_pending().is_none() {
            break;
        }
        engine.tick(now);
        now += FRAME_MS;
    }
    now
}
