// Tuning constants for the snow effect.
// Lengths are backing-store pixels, times are seconds unless noted.

// Loop and intensity
pub const MAX_PARTICLES: usize = 160;
pub const SPAWN_PER_SEC: f32 = 34.0;
pub const INTENSITY_RATE_PER_SEC: f32 = 4.2; // k in 1 - e^(-dt * k)
pub const IDLE_EPSILON: f32 = 0.02;
pub const DT_MIN_SEC: f32 = 0.001;
pub const DT_MAX_SEC: f32 = 0.05; // absorbs tab backgrounding and first frames
pub const EDGE_MARGIN_PX: f32 = 30.0; // wrap and cull margin around the surface

// Spawn ranges (half-open, uniform)
pub const SPAWN_Y_RANGE: (f32, f32) = (-20.0, -2.0);
pub const RADIUS_RANGE: (f32, f32) = (0.8, 2.2);
pub const FALL_SPEED_RANGE: (f32, f32) = (26.0, 62.0);
pub const FALL_SPEED_BIAS: f32 = 1.2; // speed *= BIAS - radius / DIVISOR
pub const FALL_SPEED_RADIUS_DIVISOR: f32 = 2.4;
pub const DRIFT_RANGE: (f32, f32) = (-10.0, 10.0);
pub const WOBBLE_FREQ_RANGE: (f32, f32) = (0.8, 2.2);
pub const OPACITY_RANGE: (f32, f32) = (0.35, 0.95);
pub const TWINKLE_RATE_RANGE: (f32, f32) = (0.6, 1.4);

// Motion and shading
pub const WOBBLE_AMPLITUDE: f32 = 0.8;
pub const FADE_FLOOR: f32 = 0.15; // fade = FLOOR + (1 - FLOOR) * intensity
pub const TWINKLE_BASE: f32 = 0.75;
pub const TWINKLE_DEPTH: f32 = 0.25;

// Default chorus layout of the bundled track
pub const CHORUS_STARTS_SEC: [f64; 3] = [90.0, 136.0, 180.0];
pub const CHORUS_DURATION_SEC: f64 = 22.0;

pub const DEFAULT_SEED: u64 = 0x5EED_C0DE;
