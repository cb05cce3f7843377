//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed external tick only; no internal threads or blocking
//! - Seeded RNG only, threaded through by reference
//! - Fixed-capacity buffers; overflow logs and truncates
//! - No rendering or platform dependencies

use std::error::Error;
use std::fmt;

pub mod body;
pub mod bounds;
pub mod geom;
pub mod paddle;
pub mod particles;
pub mod puck;
pub mod score;
pub mod state;

pub use body::{PhysicsBody, Team, TeamEntity};
pub use bounds::{Bounds, ClaimLedger, ClaimedArea};
pub use geom::{Box2, Circle};
pub use paddle::Paddle;
pub use particles::{Particle, Particulator};
pub use puck::{Ghost, GhostSlot, Puck};
pub use score::{ScoreTally, point_in_area};
pub use state::{GameState, ModeId};

/// A fixed-capacity buffer refused an insert.
///
/// Non-fatal by policy: callers log the drop and the simulation continues
/// with the entries already accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded {
    pub capacity: usize,
}

impl fmt::Display for CapacityExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buffer at capacity ({} entries)", self.capacity)
    }
}

impl Error for CapacityExceeded {}
