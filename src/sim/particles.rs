//! Cosmetic particle pool
//!
//! Purely visual: particles consume simulation events (puck strikes, rush
//! starts) and never feed anything back into the simulation. The pool is
//! fixed-size; a burst that does not fit is truncated with a warning.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_PARTICLE_COUNT;

use super::body::Team;

/// Particles spawned per puck strike
const HIT_BURST_COUNT: usize = 12;
/// Particles spawned per rush start
const TRAIL_BURST_COUNT: usize = 6;

/// One short-lived visual particle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub accel: Vec2,
    /// Tint source
    pub team: Team,
    /// Seconds remaining
    pub lifetime: f32,
}

impl Particle {
    fn update(&mut self, dt: f32) {
        self.vel += dt * self.accel;
        self.pos += dt * self.vel;
        self.lifetime = (self.lifetime - dt).max(0.0);
    }

    pub fn alive(&self) -> bool {
        self.lifetime > 0.0
    }
}

/// Fixed-capacity particle generator and updater
#[derive(Debug, Clone)]
pub struct Particulator {
    particles: Vec<Particle>,
}

impl Default for Particulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Particulator {
    pub fn new() -> Self {
        Self {
            particles: Vec::with_capacity(MAX_PARTICLE_COUNT),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Radial burst at a puck strike
    pub fn gen_hit(&mut self, pos: Vec2, vel: Vec2, size: f32, team: Team, rng: &mut Pcg32) {
        let speed = vel.length().max(0.1);
        let count = self.reserve(HIT_BURST_COUNT, "hit burst");
        for _ in 0..count {
            let theta = rng.random_range(0.0..TAU);
            let dir = Vec2::new(theta.cos(), theta.sin());
            let burst_speed = speed * rng.random_range(0.4..1.2);
            self.particles.push(Particle {
                pos: pos + dir * size * rng.random_range(0.2..1.0),
                vel: dir * burst_speed,
                accel: -dir * burst_speed,
                team,
                lifetime: rng.random_range(0.3..0.6),
            });
        }
    }

    /// Backwash streak behind a rush start
    pub fn gen_trail(&mut self, pos: Vec2, vel: Vec2, size: f32, team: Team, rng: &mut Pcg32) {
        let back = -vel.normalize_or_zero();
        if back == Vec2::ZERO {
            return;
        }
        let count = self.reserve(TRAIL_BURST_COUNT, "rush trail");
        for _ in 0..count {
            let jitter = rng.random_range(-0.4..0.4);
            let dir = Vec2::new(
                back.x - jitter * back.y,
                back.y + jitter * back.x,
            )
            .normalize_or_zero();
            self.particles.push(Particle {
                pos: pos + dir * size * rng.random_range(0.0..0.5),
                vel: dir * vel.length() * rng.random_range(0.1..0.3),
                accel: Vec2::ZERO,
                team,
                lifetime: rng.random_range(0.2..0.4),
            });
        }
    }

    /// Advance all particles and drop the expired ones
    pub fn update(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.update(dt);
        }
        self.particles.retain(Particle::alive);
    }

    /// How many of `want` fit in the pool; logs when the batch is truncated.
    fn reserve(&self, want: usize, what: &str) -> usize {
        let avail = MAX_PARTICLE_COUNT - self.particles.len();
        if avail < want {
            log::warn!(
                "particle pool full, truncating {what} from {want} to {avail}"
            );
        }
        want.min(avail)
    }
}
