use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use crate::constants::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub radius: f32,
    /// x: lateral drift, y: fall speed. Pixels per second at dpr 1.
    pub velocity: Vec2,
    pub wobble_freq: f32,
    pub phase: f32,
    pub opacity: f32,
    pub twinkle_rate: f32,
}

#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    rng.gen_range(lo..hi)
}

impl Particle {
    /// New flake somewhere across `width`, just above the top edge.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f32) -> Self {
        let x = if width > 0.0 {
            rng.gen_range(0.0..width)
        } else {
            0.0
        };
        let y = uniform(rng, SPAWN_Y_RANGE);
        let radius = uniform(rng, RADIUS_RANGE);
        // smaller flakes fall faster
        let fall = uniform(rng, FALL_SPEED_RANGE)
            * (FALL_SPEED_BIAS - radius / FALL_SPEED_RADIUS_DIVISOR);
        let drift = uniform(rng, DRIFT_RANGE);
        Self {
            pos: Vec2::new(x, y),
            radius,
            velocity: Vec2::new(drift, fall),
            wobble_freq: uniform(rng, WOBBLE_FREQ_RANGE),
            phase: rng.gen_range(0.0..TAU),
            opacity: uniform(rng, OPACITY_RANGE),
            twinkle_rate: uniform(rng, TWINKLE_RATE_RANGE),
        }
    }

    #[inline]
    fn oscillation(&self, time_sec: f64, rate: f32) -> f32 {
        (time_sec * rate as f64 + self.phase as f64).sin() as f32
    }

    /// Integrate one frame and wrap horizontally past `margin`.
    pub fn step(&mut self, time_sec: f64, dt: f32, dpr: f32, width: f32, margin: f32) {
        let wobble = self.oscillation(time_sec, self.wobble_freq) * WOBBLE_AMPLITUDE;
        self.pos.x += (self.velocity.x + wobble) * dt * dpr;
        self.pos.y += self.velocity.y * dt * dpr;

        if self.pos.x < -margin {
            self.pos.x = width + margin;
        } else if self.pos.x > width + margin {
            self.pos.x = -margin;
        }
    }

    #[inline]
    pub fn is_below(&self, height: f32, margin: f32) -> bool {
        self.pos.y > height + margin
    }

    /// Draw opacity: base opacity, global fade and per-flake twinkle.
    pub fn alpha(&self, time_sec: f64, intensity: f32) -> f32 {
        let fade = FADE_FLOOR + (1.0 - FADE_FLOOR) * intensity;
        let twinkle = TWINKLE_BASE + TWINKLE_DEPTH * self.oscillation(time_sec, self.twinkle_rate);
        (self.opacity * fade * twinkle).clamp(0.0, 1.0)
    }
}
