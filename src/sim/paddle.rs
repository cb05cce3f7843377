//! Player paddle: acceleration-based movement, a timed rush burst, and
//! containment against the playfield rectangle.

use glam::{IVec2, Vec2};

use super::body::{Team, TeamEntity};
use super::geom::Box2;

/// A player-controlled paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub ent: TeamEntity,
    /// Raw movement input, components in {-1, 0, 1}
    move_dir: IVec2,
    rushing: bool,
    rush_dir: Vec2,
    rush_time: f32,
    cooldown: f32,
}

impl Paddle {
    /// units: world / second^2
    pub const MOVE_ACCEL: f32 = 2.0e-1;
    /// units: world / second
    pub const MOVE_MAX_VEL: f32 = 1.0e0;
    /// units: world / second
    pub const RUSH_VEL: f32 = 2.0e0;
    /// units: second
    pub const RUSH_DURATION: f32 = 0.15;
    /// units: second
    pub const RUSH_COOLDOWN: f32 = 1.0;

    pub fn new(pos: Vec2, radius: f32, team: Team) -> Self {
        Self {
            ent: TeamEntity::new(pos, radius, team),
            move_dir: IVec2::ZERO,
            rushing: false,
            rush_dir: Vec2::ZERO,
            rush_time: 0.0,
            cooldown: 0.0,
        }
    }

    /// Apply one tick of movement input. Components are clamped to
    /// {-1, 0, 1} and the acceleration is normalized so diagonals are not
    /// faster than cardinals.
    pub fn set_move(&mut self, dx: i32, dy: i32) {
        self.move_dir = IVec2::new(dx.clamp(-1, 1), dy.clamp(-1, 1));
        let dir = Vec2::new(self.move_dir.x as f32, self.move_dir.y as f32).normalize_or_zero();
        self.ent.body.accel = Self::MOVE_ACCEL * dir;
    }

    pub fn move_dir(&self) -> IVec2 {
        self.move_dir
    }

    /// Start a rush burst along the current travel direction. Ignored while
    /// rushing or cooling down; a paddle with neither velocity nor input has
    /// no direction to dash along and the request is dropped.
    pub fn rush(&mut self) {
        if self.rushing || self.cooldown > 0.0 {
            return;
        }

        let body = &self.ent.body;
        let dir = if body.vel.length_squared() > f32::EPSILON {
            body.vel.normalize()
        } else {
            body.accel.normalize_or_zero()
        };
        if dir == Vec2::ZERO {
            return;
        }

        self.rushing = true;
        self.rush_time = 0.0;
        self.cooldown = Self::RUSH_COOLDOWN;
        self.rush_dir = dir;
    }

    pub fn is_rushing(&self) -> bool {
        self.rushing
    }

    pub fn rush_cooldown(&self) -> f32 {
        self.cooldown
    }

    /// Advance one tick and keep the paddle inside `container`.
    pub fn update(&mut self, dt: f32, container: &Box2) {
        if self.rushing {
            // The burst overrides steering entirely
            self.ent.body.accel = Vec2::ZERO;
            self.ent.body.vel = Self::RUSH_VEL * self.rush_dir;
            self.rush_time = (self.rush_time + dt).min(Self::RUSH_DURATION);
            if self.rush_time >= Self::RUSH_DURATION {
                self.rushing = false;
            }
        }

        self.ent.body.update(dt);

        if !self.rushing {
            self.ent.body.clamp_speed(Self::MOVE_MAX_VEL);
            self.cooldown = (self.cooldown - dt).max(0.0);
        }

        self.embed(container);
    }

    /// Snap the paddle back inside the container, killing motion along any
    /// violated axis.
    fn embed(&mut self, container: &Box2) {
        let body = &mut self.ent.body;
        let r = body.radius;

        if body.pos.x - r < container.min.x {
            body.pos.x = container.min.x + r;
            body.vel.x = 0.0;
            body.accel.x = 0.0;
        } else if body.pos.x + r > container.max.x {
            body.pos.x = container.max.x - r;
            body.vel.x = 0.0;
            body.accel.x = 0.0;
        }

        if body.pos.y - r < container.min.y {
            body.pos.y = container.min.y + r;
            body.vel.y = 0.0;
            body.accel.y = 0.0;
        } else if body.pos.y + r > container.max.y {
            body.pos.y = container.max.y - r;
            body.vel.y = 0.0;
            body.accel.y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Box2 {
        Box2::new(Vec2::ZERO, Vec2::ONE)
    }

    fn paddle() -> Paddle {
        Paddle::new(Vec2::splat(0.5), 0.05, Team::Left)
    }

    #[test]
    fn test_move_sets_normalized_accel() {
        let mut p = paddle();
        p.set_move(1, 1);
        let accel = p.ent.body.accel;
        assert!((accel.length() - Paddle::MOVE_ACCEL).abs() < 1e-6);

        p.set_move(0, 0);
        assert_eq!(p.ent.body.accel, Vec2::ZERO);

        // Out-of-range input is clamped
        p.set_move(5, -7);
        assert_eq!(p.move_dir(), IVec2::new(1, -1));
    }

    #[test]
    fn test_rush_forces_velocity() {
        let mut p = paddle();
        p.ent.body.vel = Vec2::new(0.3, 0.0);
        p.rush();
        assert!(p.is_rushing());

        p.update(0.01, &unit_box());
        assert!((p.ent.body.vel.length() - Paddle::RUSH_VEL).abs() < 1e-5);
        assert_eq!(p.ent.body.accel, Vec2::ZERO);
    }

    #[test]
    fn test_rush_ends_after_duration() {
        let mut p = paddle();
        p.ent.body.vel = Vec2::new(0.0, 0.2);
        p.rush();

        let dt = 0.05;
        let mut elapsed = 0.0;
        while elapsed < Paddle::RUSH_DURATION {
            p.update(dt, &unit_box());
            elapsed += dt;
        }
        assert!(!p.is_rushing());
        // Normal speed limit reapplies once the rush is over
        assert!(p.ent.body.vel.length() <= Paddle::MOVE_MAX_VEL + 1e-5);
    }

    #[test]
    fn test_rush_respects_cooldown() {
        let mut p = paddle();
        p.ent.body.vel = Vec2::new(0.3, 0.0);
        p.rush();
        while p.is_rushing() {
            p.update(0.01, &unit_box());
        }

        assert!(p.rush_cooldown() > 0.0);
        p.rush();
        assert!(!p.is_rushing());

        // Drain the cooldown, then the rush arms again
        for _ in 0..200 {
            p.update(0.01, &unit_box());
        }
        assert_eq!(p.rush_cooldown(), 0.0);
        p.ent.body.vel = Vec2::new(0.3, 0.0);
        p.rush();
        assert!(p.is_rushing());
    }

    #[test]
    fn test_stationary_rush_is_dropped() {
        let mut p = paddle();
        p.rush();
        assert!(!p.is_rushing());
        // A dropped rush must not start the cooldown
        assert_eq!(p.rush_cooldown(), 0.0);

        // With steering input but no velocity the rush follows the input
        p.set_move(0, 1);
        p.rush();
        assert!(p.is_rushing());
    }

    #[test]
    fn test_containment_zeroes_violated_axis() {
        let mut p = paddle();
        p.ent.body.pos = Vec2::new(0.98, 0.5);
        p.ent.body.vel = Vec2::new(1.0, 0.4);
        p.set_move(1, 1);

        p.update(0.1, &unit_box());

        let body = p.ent.body;
        assert!((body.pos.x + body.radius) <= 1.0 + 1e-6);
        assert_eq!(body.vel.x, 0.0);
        assert_eq!(body.accel.x, 0.0);
        // Unviolated axis keeps its motion
        assert!(body.vel.y != 0.0);
    }
}
