//! Box and circle primitives for the rectangular playfield
//!
//! Every simulated entity is a circle; its axis-aligned bounding box is
//! derived from center and radius whenever it is needed, so the two can
//! never drift apart.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Box2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Box2 {
    /// Build from a corner position and positive dimensions
    pub fn new(pos: Vec2, dims: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + dims,
        }
    }

    /// Build from a center point and half-extents
    pub fn from_center(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        0.5 * (self.min + self.max)
    }

    #[inline]
    pub fn dims(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// True if `other` lies entirely inside this box
    pub fn contains_box(&self, other: &Box2) -> bool {
        other.min.x >= self.min.x
            && other.max.x <= self.max.x
            && other.min.y >= self.min.y
            && other.max.y <= self.max.y
    }

    pub fn overlaps(&self, other: &Box2) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Map a normalized point in the unit square into this box
    pub fn interp(&self, t: Vec2) -> Vec2 {
        self.min + t * self.dims()
    }
}

/// A circle with center and radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Bounding box derived from center and radius
    #[inline]
    pub fn bbox(&self) -> Box2 {
        Box2::from_center(self.center, Vec2::splat(self.radius))
    }

    pub fn contains(&self, p: Vec2) -> bool {
        (p - self.center).length_squared() <= self.radius * self.radius
    }

    pub fn overlaps(&self, other: &Circle) -> bool {
        let reach = self.radius + other.radius;
        (other.center - self.center).length_squared() < reach * reach
    }

    /// Push this circle out of `other` along the line between centers until
    /// the two are exactly touching. Returns the applied delta; zero when the
    /// circles are already separated or the centers coincide (no well-defined
    /// push direction).
    pub fn exbed(&mut self, other: &Circle) -> Vec2 {
        let sep = self.center - other.center;
        let reach = self.radius + other.radius;
        let dist_sq = sep.length_squared();
        if dist_sq >= reach * reach {
            return Vec2::ZERO;
        }

        let dist = dist_sq.sqrt();
        if dist <= f32::EPSILON {
            return Vec2::ZERO;
        }

        let delta = (sep / dist) * (reach - dist);
        self.center += delta;
        delta
    }
}
