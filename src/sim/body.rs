//! Shared physics body and team affiliation
//!
//! Paddles and the puck are all circles driven by the same
//! velocity/acceleration integration; per-entity behavior (containment,
//! wrapping, rushing) layers on top of [`PhysicsBody`] instead of an
//! inheritance chain.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Box2, Circle};

/// Claiming side. `Neutral` marks an ownerless puck or a tied round; it
/// never legitimately claims playfield area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Left,
    Right,
    Neutral,
}

impl Team {
    pub const COUNT: usize = 3;

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Team::Left => 0,
            Team::Right => 1,
            Team::Neutral => 2,
        }
    }

    /// Render tint (r, g, b, a)
    pub fn tint(self) -> [u8; 4] {
        match self {
            Team::Left => [0x9a, 0x86, 0x00, 0xff],
            Team::Right => [0x00, 0x9d, 0xa3, 0xff],
            Team::Neutral => [0x80, 0x7e, 0x76, 0xff],
        }
    }
}

/// Position/velocity/acceleration state shared by all simulated entities.
///
/// The bounding shapes are derived accessors, so they are always consistent
/// with the current position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsBody {
    pub pos: Vec2,
    /// world / second
    pub vel: Vec2,
    /// world / second^2
    pub accel: Vec2,
    pub radius: f32,
}

impl PhysicsBody {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            radius,
        }
    }

    /// Semi-implicit Euler step. Caller contract: `dt >= 0`.
    pub fn update(&mut self, dt: f32) {
        self.vel += dt * self.accel;
        self.pos += dt * self.vel;
    }

    /// Cap speed without changing direction
    pub fn clamp_speed(&mut self, max: f32) {
        let speed_sq = self.vel.length_squared();
        if speed_sq > max * max {
            self.vel = self.vel * (max / speed_sq.sqrt());
        }
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    #[inline]
    pub fn bbox(&self) -> Box2 {
        self.circle().bbox()
    }
}

/// A physics body with a team affiliation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamEntity {
    pub body: PhysicsBody,
    pub team: Team,
}

impl TeamEntity {
    pub fn new(pos: Vec2, radius: f32, team: Team) -> Self {
        Self {
            body: PhysicsBody::new(pos, radius),
            team,
        }
    }

    /// Reassign the owning team (and with it the render tint)
    pub fn change(&mut self, team: Team) {
        self.team = team;
    }
}
