//! Self-scheduling render loop for the snow effect.
//!
//! The loop is IDLE until the activation target is set, then ticks once per
//! frame until intensity has decayed and every flake has fallen out, at
//! which point it stops asking for frames. Setting the target again
//! restarts it.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bridge::ActivationSink;
use crate::config::{ConfigError, EngineConfig};
use crate::intensity::IntensityController;
use crate::particle::Particle;
use crate::pool::ParticlePool;
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::surface::{sanitize_dpr, sync_backing_size, DrawSurface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

/// What a single tick did. Mostly for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    /// False when the frame fired while the loop was idle.
    pub ran: bool,
    pub dt_sec: f32,
    pub intensity: f32,
    pub resized: bool,
    pub spawned: usize,
    pub culled: usize,
    pub drawn: usize,
    pub rescheduled: bool,
}

pub struct SnowEngine<S: DrawSurface, F: FrameScheduler> {
    config: EngineConfig,
    surface: S,
    scheduler: F,
    intensity: IntensityController,
    pool: ParticlePool,
    rng: StdRng,
    state: LoopState,
    last_tick_ms: Option<f64>,
    pending: Option<FrameHandle>,
    active: bool,
}

impl<S: DrawSurface, F: FrameScheduler> SnowEngine<S, F> {
    pub fn new(config: EngineConfig, surface: S, scheduler: F) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            log::warn!("[snow] rejected engine config: {e}");
            return Err(e);
        }
        Ok(Self {
            intensity: IntensityController::from_config(&config),
            pool: ParticlePool::new(config.capacity),
            rng: StdRng::seed_from_u64(config.seed),
            config,
            surface,
            scheduler,
            state: LoopState::Idle,
            last_tick_ms: None,
            pending: None,
            active: false,
        })
    }

    /// Status flag for styling. Mirrors the target, not the eased level, so
    /// it reads false while flakes are still draining after a switch-off.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    #[inline]
    pub fn intensity(&self) -> f32 {
        self.intensity.current()
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.intensity.target()
    }

    #[inline]
    pub fn particle_count(&self) -> usize {
        self.pool.len()
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.pool.iter()
    }

    pub fn pool_mut(&mut self) -> &mut ParticlePool {
        &mut self.pool
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    /// Set the activation target. Starts the loop if it is idle; switching
    /// off while already faded out stops it again right away.
    pub fn set_active(&mut self, on: bool) {
        self.intensity.set_target(on);
        if self.active != on {
            self.active = on;
            self.surface.mark_active(on);
        }

        if self.state == LoopState::Idle {
            self.state = LoopState::Running;
            self.last_tick_ms = None;
            log::debug!("[snow] loop started (target={})", on as u8);
            self.schedule();
        }

        if !on {
            self.stop_if_idle();
        }
    }

    /// One frame. `timestamp_ms` is the host's frame clock in milliseconds.
    pub fn tick(&mut self, timestamp_ms: f64) -> TickReport {
        self.pending = None;
        if self.state == LoopState::Idle {
            log::trace!("[snow] stray frame while idle");
            return TickReport::default();
        }

        let mut report = TickReport {
            ran: true,
            ..TickReport::default()
        };
        report.resized = sync_backing_size(&mut self.surface);
        let (w_px, h_px) = self.surface.backing_size();
        let dpr = sanitize_dpr(self.surface.device_pixel_ratio()) as f32;

        let dt = self.frame_dt(timestamp_ms);
        let time_sec = self.last_tick_ms.unwrap_or(0.0) / 1000.0;
        report.dt_sec = dt;
        report.intensity = self.intensity.advance(dt);

        let (width, height) = (w_px as f32, h_px as f32);
        let margin = self.config.edge_margin_px;
        let visible = w_px > 0 && h_px > 0;
        if visible {
            report.spawned = self.pool.spawn(
                &mut self.rng,
                report.intensity,
                self.config.spawn_per_sec,
                dt,
                width,
            );
        }
        // flakes still fall and cull on a collapsed surface
        report.culled = self.pool.advance(time_sec, dt, dpr, width, height, margin);

        if visible {
            self.surface.clear();
            for p in self.pool.iter() {
                let alpha = p.alpha(time_sec, report.intensity);
                self.surface.fill_circle(p.pos.x, p.pos.y, p.radius * dpr, alpha);
            }
            report.drawn = self.pool.len();
        }

        if self.is_settled() {
            self.go_idle();
        } else {
            self.schedule();
            report.rescheduled = self.pending.is_some();
        }
        report
    }

    /// Switched off, faded out and drained.
    fn is_settled(&self) -> bool {
        self.intensity.target() == 0.0 && self.intensity.is_idle() && self.pool.is_empty()
    }

    fn frame_dt(&mut self, timestamp_ms: f64) -> f32 {
        if !timestamp_ms.is_finite() {
            return self.intensity.clamp_dt(0.0);
        }
        let prev = self.last_tick_ms.unwrap_or(timestamp_ms);
        self.last_tick_ms = Some(timestamp_ms);
        self.intensity.clamp_dt(((timestamp_ms - prev) / 1000.0) as f32)
    }

    fn schedule(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[snow] host refused a frame; loop stays idle");
            self.state = LoopState::Idle;
        }
    }

    fn stop_if_idle(&mut self) {
        if self.state == LoopState::Running && self.is_settled() {
            if let Some(handle) = self.pending.take() {
                self.scheduler.cancel_frame(handle);
            }
            self.go_idle();
        }
    }

    fn go_idle(&mut self) {
        self.state = LoopState::Idle;
        self.pending = None;
        self.surface.mark_active(false);
        log::debug!("[snow] loop idle");
    }
}

impl<S: DrawSurface, F: FrameScheduler> ActivationSink for SnowEngine<S, F> {
    fn set_active(&mut self, on: bool) {
        SnowEngine::set_active(self, on);
    }
}
