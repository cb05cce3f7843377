//! Top-level game state
//!
//! Everything the simulation mutates lives in one [`GameState`] owned by the
//! host; the core never spawns threads or hides state in globals, so a fixed
//! dt sequence, input sequence, and seed replay a round exactly.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

use super::body::Team;
use super::bounds::Bounds;
use super::geom::Box2;
use super::paddle::Paddle;
use super::particles::Particulator;
use super::puck::Puck;
use super::score::ScoreTally;

/// Mode identifiers. `Boot` and `Exit` are sentinels: neither is ever
/// dispatched, and a pending `Exit` stops the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeId {
    Boot,
    Exit,
    Game,
    Select,
    Title,
    Bind,
    Score,
    Reset,
}

impl ModeId {
    /// Every mode the controller can actually run
    pub const DISPATCHABLE: [ModeId; 6] = [
        ModeId::Game,
        ModeId::Select,
        ModeId::Title,
        ModeId::Bind,
        ModeId::Score,
        ModeId::Reset,
    ];

    pub fn is_sentinel(self) -> bool {
        matches!(self, ModeId::Boot | ModeId::Exit)
    }
}

/// Complete simulation state for one process run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Active mode
    pub mid: ModeId,
    /// Requested mode; takes effect at the top of the next update
    pub pmid: ModeId,

    /// Last tick length (seconds)
    pub dt: f32,
    /// Total elapsed time across all modes (seconds)
    pub tt: f32,
    /// Time in the active mode, reset on every mode entry (seconds)
    pub st: f32,
    /// Round timer; only advances while play is live (seconds)
    pub rt: f32,
    /// Hit-freeze timer; nonzero while a strike pause is running (seconds)
    pub ht: f32,

    /// Seed the RNG was built from
    pub seed: u64,
    /// Explicit simulation RNG; never a global
    pub rng: Pcg32,
    /// Data-driven gameplay knobs
    pub tuning: Tuning,

    pub bounds: Bounds,
    pub puck: Puck,
    /// Indexed by [`Team::index`]: Left, Right
    pub paddles: [Paddle; 2],
    pub particulator: Particulator,
    pub tally: ScoreTally,

    /// Active menu cursor (shared by the menu modes; each resets it on entry)
    pub menu_idx: u32,
    /// Round winner computed on Reset entry; Neutral means a tie
    pub winner: Team,
}

impl GameState {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let rect = Box2::new(
            Vec2::new(BOUNDS_POS.0, BOUNDS_POS.1),
            Vec2::new(BOUNDS_DIMS.0, BOUNDS_DIMS.1),
        );

        Self {
            mid: ModeId::Boot,
            pmid: ModeId::Title,
            dt: 0.0,
            tt: 0.0,
            st: 0.0,
            rt: 0.0,
            ht: 0.0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            bounds: Bounds::new(rect),
            puck: Puck::new(
                Vec2::new(PUCK_START_POS.0, PUCK_START_POS.1),
                PUCK_RADIUS,
                Team::Neutral,
                &rect,
            ),
            paddles: [
                Paddle::new(
                    Vec2::new(PADDLE_LEFT_START_POS.0, PADDLE_LEFT_START_POS.1),
                    PADDLE_RADIUS,
                    Team::Left,
                ),
                Paddle::new(
                    Vec2::new(PADDLE_RIGHT_START_POS.0, PADDLE_RIGHT_START_POS.1),
                    PADDLE_RADIUS,
                    Team::Right,
                ),
            ],
            particulator: Particulator::new(),
            tally: ScoreTally::new(),
            menu_idx: 0,
            winner: Team::Neutral,
        }
    }

    /// Playfield rectangle for this round
    pub fn field(&self) -> Box2 {
        self.bounds.rect
    }
}
