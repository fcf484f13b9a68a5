use crate::config::EngineConfig;

/// Eased activation level.
///
/// `target` is either 0 or 1; `current` chases it with exponential
/// smoothing so switching the effect on or off ramps instead of snapping.
#[derive(Clone, Debug)]
pub struct IntensityController {
    target: f32,
    current: f32,
    rate: f32,
    dt_min: f32,
    dt_max: f32,
    idle_epsilon: f32,
}

impl IntensityController {
    pub fn new(rate: f32, dt_min: f32, dt_max: f32, idle_epsilon: f32) -> Self {
        Self {
            target: 0.0,
            current: 0.0,
            rate,
            dt_min,
            dt_max,
            idle_epsilon,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.smoothing_rate,
            config.dt_min_sec,
            config.dt_max_sec,
            config.idle_epsilon,
        )
    }

    pub fn set_target(&mut self, on: bool) {
        self.target = if on { 1.0 } else { 0.0 };
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Clamp a raw frame delta into the usable range. Non-finite and
    /// negative deltas collapse to the minimum.
    pub fn clamp_dt(&self, dt_sec: f32) -> f32 {
        if !dt_sec.is_finite() {
            return self.dt_min;
        }
        dt_sec.clamp(self.dt_min, self.dt_max)
    }

    /// Move `current` toward `target` by one frame of `dt_sec` and return it.
    pub fn advance(&mut self, dt_sec: f32) -> f32 {
        let dt = self.clamp_dt(dt_sec);
        let ease = 1.0 - (-dt * self.rate).exp();
        self.current += (self.target - self.current) * ease;
        self.current = self.current.clamp(0.0, 1.0);
        self.current
    }

    /// Close enough to zero for the loop to stop once particles drain.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.current <= self.idle_epsilon
    }
}
