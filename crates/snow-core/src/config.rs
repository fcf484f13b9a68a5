use thiserror::Error;

use crate::constants::*;

/// Initialization-time knobs for [`SnowEngine`](crate::SnowEngine).
///
/// The defaults are the tuned values from `constants.rs`; none of these are
/// meant to change while the engine runs.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub capacity: usize,
    pub spawn_per_sec: f32,
    pub smoothing_rate: f32,
    pub idle_epsilon: f32,
    pub dt_min_sec: f32,
    pub dt_max_sec: f32,
    pub edge_margin_px: f32,
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_PARTICLES,
            spawn_per_sec: SPAWN_PER_SEC,
            smoothing_rate: INTENSITY_RATE_PER_SEC,
            idle_epsilon: IDLE_EPSILON,
            dt_min_sec: DT_MIN_SEC,
            dt_max_sec: DT_MAX_SEC,
            edge_margin_px: EDGE_MARGIN_PX,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("particle capacity must be at least 1")]
    ZeroCapacity,

    #[error("{name} must be finite and non-negative (got {value})")]
    InvalidValue { name: &'static str, value: f32 },

    #[error("smoothing rate must be finite and positive (got {0})")]
    InvalidSmoothingRate(f32),

    #[error("idle epsilon must be in [0, 1) (got {0})")]
    InvalidIdleEpsilon(f32),

    #[error("dt clamp range is invalid: min {min} max {max}")]
    InvalidDtRange { min: f32, max: f32 },
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { name, value })
    }
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        non_negative("spawn rate", self.spawn_per_sec)?;
        non_negative("edge margin", self.edge_margin_px)?;
        if !(self.smoothing_rate.is_finite() && self.smoothing_rate > 0.0) {
            return Err(ConfigError::InvalidSmoothingRate(self.smoothing_rate));
        }
        if !(0.0..1.0).contains(&self.idle_epsilon) {
            return Err(ConfigError::InvalidIdleEpsilon(self.idle_epsilon));
        }
        let (min, max) = (self.dt_min_sec, self.dt_max_sec);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::InvalidDtRange { min, max });
        }
        Ok(())
    }
}
