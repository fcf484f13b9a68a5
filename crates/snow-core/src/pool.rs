use rand::Rng;

use crate::particle::Particle;

/// Live flakes plus the fractional spawn credit carried between frames.
#[derive(Clone, Debug)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    capacity: usize,
    spawn_credit: f32,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
            spawn_credit: 0.0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn spawn_credit(&self) -> f32 {
        self.spawn_credit
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Insert a prebuilt particle. Returns false when the pool is full.
    pub fn insert(&mut self, particle: Particle) -> bool {
        if self.particles.len() >= self.capacity {
            return false;
        }
        self.particles.push(particle);
        true
    }

    /// Earn `intensity * rate * dt` credit and spend whole units on new
    /// flakes. Returns how many were spawned.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        intensity: f32,
        rate_per_sec: f32,
        dt: f32,
        width: f32,
    ) -> usize {
        self.spawn_credit += (intensity * rate_per_sec * dt).max(0.0);
        let mut spawned = 0;
        while self.spawn_credit >= 1.0 && self.particles.len() < self.capacity {
            self.particles.push(Particle::spawn(rng, width));
            self.spawn_credit -= 1.0;
            spawned += 1;
        }
        // credit earned while full must not turn into a burst later
        if self.particles.len() >= self.capacity {
            self.spawn_credit = self.spawn_credit.min(1.0);
        }
        spawned
    }

    /// Step every flake and drop the ones that fell past the bottom margin.
    /// Returns how many were culled.
    pub fn advance(
        &mut self,
        time_sec: f64,
        dt: f32,
        dpr: f32,
        width: f32,
        height: f32,
        margin: f32,
    ) -> usize {
        let before = self.particles.len();
        self.particles.retain_mut(|p| {
            p.step(time_sec, dt, dpr, width, margin);
            !p.is_below(height, margin)
        });
        before - self.particles.len()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.spawn_credit = 0.0;
    }
}
