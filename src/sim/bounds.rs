//! Playfield bounds and the area-claim ledger
//!
//! Every paddle strike on the puck deposits the paddle's center as a corner;
//! three consecutive same-team corners complete a triangle that is claimed
//! for that team. Triangles are independent and may overlap or degenerate;
//! which team owns a contested point is decided later by sampling order in
//! the score tally.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{AREA_CORNER_COUNT, AREA_MAX_COUNT};

use super::CapacityExceeded;
use super::body::{Team, TeamEntity};
use super::geom::Box2;

/// A triangular region claimed for one team
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClaimedArea {
    pub corners: [Vec2; AREA_CORNER_COUNT],
    pub team: Team,
}

/// Append-only, fixed-capacity list of claimed areas.
///
/// Storage is pre-allocated; `try_push` reports capacity exhaustion instead
/// of growing, and the caller decides whether to log or escalate.
#[derive(Debug, Clone)]
pub struct ClaimLedger {
    areas: Vec<ClaimedArea>,
}

impl ClaimLedger {
    pub fn new() -> Self {
        Self {
            areas: Vec::with_capacity(AREA_MAX_COUNT),
        }
    }

    pub fn try_push(&mut self, area: ClaimedArea) -> Result<(), CapacityExceeded> {
        if self.areas.len() >= AREA_MAX_COUNT {
            return Err(CapacityExceeded {
                capacity: AREA_MAX_COUNT,
            });
        }
        self.areas.push(area);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Areas in insertion order; reverse for latest-claim-wins queries
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ClaimedArea> {
        self.areas.iter()
    }

    pub fn clear(&mut self) {
        self.areas.clear();
    }
}

impl Default for ClaimLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// In-progress claim: corners deposited so far and the team they belong to.
///
/// A corner from a different team discards the pending corners and restarts
/// the accumulator for that team; a completed triangle resets it to neutral.
#[derive(Debug, Clone, Copy)]
pub struct PartialClaim {
    team: Team,
    corners: [Vec2; AREA_CORNER_COUNT - 1],
    count: usize,
}

impl PartialClaim {
    fn new() -> Self {
        Self {
            team: Team::Neutral,
            corners: [Vec2::ZERO; AREA_CORNER_COUNT - 1],
            count: 0,
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Pending corners for render
    pub fn corners(&self) -> &[Vec2] {
        &self.corners[..self.count]
    }

    fn reset(&mut self, team: Team) {
        self.team = team;
        self.count = 0;
    }
}

/// The playfield rectangle plus everything claimed inside it this round
#[derive(Debug, Clone)]
pub struct Bounds {
    pub rect: Box2,
    ledger: ClaimLedger,
    pending: PartialClaim,
}

impl Bounds {
    pub fn new(rect: Box2) -> Self {
        Self {
            rect,
            ledger: ClaimLedger::new(),
            pending: PartialClaim::new(),
        }
    }

    pub fn ledger(&self) -> &ClaimLedger {
        &self.ledger
    }

    pub fn pending(&self) -> &PartialClaim {
        &self.pending
    }

    /// Deposit the source entity's center as the next claim corner.
    ///
    /// The third same-team corner flushes a triangle into the ledger. A full
    /// ledger drops the triangle and keeps the round running.
    pub fn claim(&mut self, source: &TeamEntity) {
        if source.team == Team::Neutral {
            return;
        }
        if source.team != self.pending.team {
            self.pending.reset(source.team);
        }

        let corner = source.body.pos;
        if self.pending.count < AREA_CORNER_COUNT - 1 {
            self.pending.corners[self.pending.count] = corner;
            self.pending.count += 1;
            return;
        }

        let area = ClaimedArea {
            corners: [self.pending.corners[0], self.pending.corners[1], corner],
            team: self.pending.team,
        };
        if let Err(err) = self.ledger.try_push(area) {
            log::warn!("claim ledger full, dropping triangle: {err}");
        }
        self.pending.reset(Team::Neutral);
    }

    /// Forget all claims (new round)
    pub fn reset_round(&mut self) {
        self.ledger.clear();
        self.pending = PartialClaim::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity_at(x: f32, y: f32, team: Team) -> TeamEntity {
        TeamEntity::new(Vec2::new(x, y), 0.05, team)
    }

    fn unit_bounds() -> Bounds {
        Bounds::new(Box2::new(Vec2::ZERO, Vec2::ONE))
    }

    #[test]
    fn test_three_same_team_corners_complete_a_triangle() {
        let mut bounds = unit_bounds();
        bounds.claim(&entity_at(0.0, 0.0, Team::Left));
        bounds.claim(&entity_at(1.0, 0.0, Team::Left));
        assert_eq!(bounds.ledger().len(), 0);
        assert_eq!(bounds.pending().count(), 2);

        bounds.claim(&entity_at(1.0, 1.0, Team::Left));
        assert_eq!(bounds.ledger().len(), 1);

        let area = bounds.ledger().iter().next().unwrap();
        assert_eq!(area.team, Team::Left);
        assert_eq!(area.corners[2], Vec2::new(1.0, 1.0));

        // Accumulator returns to neutral after the flush
        assert_eq!(bounds.pending().team(), Team::Neutral);
        assert_eq!(bounds.pending().count(), 0);
    }

    #[test]
    fn test_opposing_corner_restarts_accumulator() {
        let mut bounds = unit_bounds();
        bounds.claim(&entity_at(0.0, 0.0, Team::Left));
        bounds.claim(&entity_at(1.0, 0.0, Team::Left));
        bounds.claim(&entity_at(0.5, 0.5, Team::Right));

        assert_eq!(bounds.ledger().len(), 0);
        assert_eq!(bounds.pending().team(), Team::Right);
        assert_eq!(bounds.pending().count(), 1);
    }

    #[test]
    fn test_neutral_source_never_claims() {
        let mut bounds = unit_bounds();
        bounds.claim(&entity_at(0.5, 0.5, Team::Neutral));
        assert_eq!(bounds.pending().count(), 0);
        assert_eq!(bounds.pending().team(), Team::Neutral);
    }

    #[test]
    fn test_ledger_overflow_is_nonfatal() {
        let mut bounds = unit_bounds();
        for i in 0..(AREA_MAX_COUNT + 5) {
            let x = i as f32 * 1e-3;
            bounds.claim(&entity_at(x, 0.0, Team::Left));
            bounds.claim(&entity_at(x, 1.0, Team::Left));
            bounds.claim(&entity_at(x + 1e-3, 0.5, Team::Left));
        }
        assert_eq!(bounds.ledger().len(), AREA_MAX_COUNT);
        // Accumulator still resets after a dropped triangle
        assert_eq!(bounds.pending().count(), 0);
    }

    #[test]
    fn test_round_reset_clears_everything() {
        let mut bounds = unit_bounds();
        bounds.claim(&entity_at(0.0, 0.0, Team::Left));
        bounds.claim(&entity_at(1.0, 0.0, Team::Left));
        bounds.claim(&entity_at(1.0, 1.0, Team::Left));
        bounds.claim(&entity_at(0.3, 0.3, Team::Right));

        bounds.reset_round();
        assert!(bounds.ledger().is_empty());
        assert_eq!(bounds.pending().count(), 0);
        assert_eq!(bounds.pending().team(), Team::Neutral);
    }
}
