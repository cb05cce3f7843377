//! The toroidally-wrapping puck
//!
//! The puck lives on a torus: leaving one edge of the playfield re-enters
//! the opposite edge. While it straddles an edge it exists in up to four
//! places at once (the real copy plus wrapped reflections), so collision
//! queries run against ghost copies. Net signed edge crossings accumulate in
//! a wrap counter that gates which team may currently strike the puck.

use glam::{IVec2, Vec2};

use super::body::{Team, TeamEntity};
use super::geom::{Box2, Circle};

/// Slot order for ghost copies; collisions resolve against the first
/// qualifying slot in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostSlot {
    Base = 0,
    XWrap = 1,
    YWrap = 2,
    XYWrap = 3,
}

pub const GHOST_SLOT_COUNT: usize = 4;

/// One copy of the puck: the real circle or a toroidal reflection of it,
/// with the wrap-count vector that copy represents.
#[derive(Debug, Clone, Copy)]
pub struct Ghost {
    pub circle: Circle,
    pub wrap: IVec2,
}

/// Puck state: team affiliation, wrap bookkeeping, and ghost copies.
#[derive(Debug, Clone)]
pub struct Puck {
    pub ent: TeamEntity,
    wrap_count: IVec2,
    /// Per-axis "box is not fully contained" state from the previous wrap
    straddle: [bool; 2],
    ghosts: [Option<Ghost>; GHOST_SLOT_COUNT],
}

impl Puck {
    /// Speed gain per hit
    pub const VEL_MULTIPLIER: f32 = 1.1;
    /// Post-hit speed floor (units: world / second)
    pub const MIN_VEL: f32 = 2.5e-1;
    /// Post-hit speed ceiling (units: world / second)
    pub const MAX_VEL: f32 = 2.0e0;

    pub fn new(pos: Vec2, radius: f32, team: Team, container: &Box2) -> Self {
        let mut puck = Self {
            ent: TeamEntity::new(pos, radius, team),
            wrap_count: IVec2::ZERO,
            straddle: [false; 2],
            ghosts: [None; GHOST_SLOT_COUNT],
        };
        puck.straddle = puck.containment_violations(container);
        puck.refresh_ghosts(container);
        puck
    }

    pub fn wrap_count(&self) -> IVec2 {
        self.wrap_count
    }

    pub fn ghosts(&self) -> &[Option<Ghost>; GHOST_SLOT_COUNT] {
        &self.ghosts
    }

    /// Advance one tick: integrate, wrap into the container, refresh ghosts.
    pub fn update(&mut self, dt: f32, container: &Box2) {
        self.ent.body.update(dt);
        self.wrap(container);
        self.refresh_ghosts(container);
    }

    /// Normalize the puck position into the container interval on each axis,
    /// recording a signed wrap event when the box leaves full containment.
    ///
    /// A box fully outside by `d` beyond the far edge re-enters overhanging
    /// the near edge by the same `d`; calling this on a box already inside
    /// (or already straddling) changes nothing, so repeated calls with a
    /// stationary puck are idempotent.
    pub fn wrap(&mut self, container: &Box2) {
        let r = self.ent.body.radius;

        for axis in 0..2 {
            let cmin = container.min[axis];
            let cmax = container.max[axis];
            let span = cmax - cmin;
            let pos = self.ent.body.pos[axis];

            let out_max = pos + r > cmax;
            let out_min = pos - r < cmin;
            let contained = !out_max && !out_min;

            // One signed event per excursion, counted when containment is
            // first lost; the center teleport below never re-counts it.
            if !self.straddle[axis] && !contained {
                self.wrap_count[axis] += if out_max { 1 } else { -1 };
            }

            let wrapped = cmin + (pos - cmin).rem_euclid(span);
            self.ent.body.pos[axis] = wrapped;

            let now_out_max = wrapped + r > cmax;
            let now_out_min = wrapped - r < cmin;
            self.straddle[axis] = now_out_max || now_out_min;
        }
    }

    /// Rebuild the ghost copies from the current (wrapped) position.
    ///
    /// The base copy is always present. A wrapped copy exists only while the
    /// box straddles that axis, mirrored to the opposite side and carrying
    /// the wrap count of a puck that has completed that crossing.
    fn refresh_ghosts(&mut self, container: &Box2) {
        let body = &self.ent.body;
        let r = body.radius;
        let span = container.dims();

        let mirror_axis = |axis: usize| -> Option<(f32, i32)> {
            let pos = body.pos[axis];
            if pos + r > container.max[axis] {
                Some((-span[axis], 1))
            } else if pos - r < container.min[axis] {
                Some((span[axis], -1))
            } else {
                None
            }
        };

        let x = mirror_axis(0);
        let y = mirror_axis(1);

        self.ghosts[GhostSlot::Base as usize] = Some(Ghost {
            circle: body.circle(),
            wrap: self.wrap_count,
        });
        self.ghosts[GhostSlot::XWrap as usize] = x.map(|(dx, wx)| Ghost {
            circle: Circle::new(body.pos + Vec2::new(dx, 0.0), r),
            wrap: self.wrap_count + IVec2::new(wx, 0),
        });
        self.ghosts[GhostSlot::YWrap as usize] = y.map(|(dy, wy)| Ghost {
            circle: Circle::new(body.pos + Vec2::new(0.0, dy), r),
            wrap: self.wrap_count + IVec2::new(0, wy),
        });
        self.ghosts[GhostSlot::XYWrap as usize] = match (x, y) {
            (Some((dx, wx)), Some((dy, wy))) => Some(Ghost {
                circle: Circle::new(body.pos + Vec2::new(dx, dy), r),
                wrap: self.wrap_count + IVec2::new(wx, wy),
            }),
            _ => None,
        };
    }

    /// Whether `team` may currently strike a puck copy carrying `ghost_wrap`.
    ///
    /// An ownerless puck is fair game for everyone. Otherwise the copy must
    /// have crossed at least one edge since the last hit, and the team that
    /// scored that hit must wait for a second crossing before striking its
    /// own puck again.
    pub fn tangible(&self, ghost_wrap: IVec2, team: Team) -> bool {
        if self.ent.team == Team::Neutral {
            return true;
        }
        let n = ghost_wrap.x.abs().max(ghost_wrap.y.abs());
        let need = 1 + i32::from(team == self.ent.team);
        n >= need
    }

    /// Attempt a strike from `source`. The first ghost copy (base first,
    /// then X/Y/XY reflections) that is tangible to the source's team and
    /// overlaps the source circle resolves the hit: the puck is pushed out
    /// to touching, redirected away from the striker with its speed scaled
    /// and clamped, its wrap counter cleared, and its team reassigned.
    ///
    /// Returns false (leaving all state untouched) when no copy qualifies.
    pub fn hit(&mut self, source: &TeamEntity) -> bool {
        let src = source.body.circle();

        let mut resolved: Option<(Vec2, Vec2)> = None;
        for ghost in self.ghosts.iter().flatten() {
            if !self.tangible(ghost.wrap, source.team) {
                continue;
            }
            if !ghost.circle.overlaps(&src) {
                continue;
            }

            let mut copy = ghost.circle;
            let delta = copy.exbed(&src);
            let dir = (copy.center - src.center).normalize_or_zero();
            if dir == Vec2::ZERO {
                // Coincident centers leave no direction to resolve along
                continue;
            }

            resolved = Some((delta, dir));
            break;
        }

        let Some((delta, dir)) = resolved else {
            return false;
        };

        let body = &mut self.ent.body;
        body.pos += delta;
        let speed =
            (Self::VEL_MULTIPLIER * body.vel.length()).clamp(Self::MIN_VEL, Self::MAX_VEL);
        body.vel = dir * speed;

        self.wrap_count = IVec2::ZERO;
        self.ent.change(source.team);
        true
    }

    fn containment_violations(&self, container: &Box2) -> [bool; 2] {
        let r = self.ent.body.radius;
        let mut out = [false; 2];
        for axis in 0..2 {
            let pos = self.ent.body.pos[axis];
            out[axis] =
                pos + r > container.max[axis] || pos - r < container.min[axis];
        }
        out
    }
}
