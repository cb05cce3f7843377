//! Turfpuck - a toroidal area-claiming puck duel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, toroidal wrap, claim ledger, scoring)
//! - `modes`: Game modes and the mode state machine
//! - `api`: Host-facing entry points (boot / init / update / render)
//! - `input`: Logical action surface consumed by the core
//! - `tuning`: Data-driven game balance

pub mod api;
pub mod input;
pub mod modes;
pub mod sim;
pub mod tuning;

pub use api::{Output, boot, init, render, update};
pub use input::{Action, Input};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Default RNG seed for reproducible rounds
    pub const RNG_SEED: u64 = 12345678;

    /// Playfield rectangle (a unit square at the origin)
    pub const BOUNDS_POS: (f32, f32) = (0.0, 0.0);
    pub const BOUNDS_DIMS: (f32, f32) = (1.0, 1.0);

    /// Paddle defaults
    pub const PADDLE_RADIUS: f32 = 5.0e-2;
    /// Puck is slightly smaller than a paddle
    pub const PUCK_RADIUS: f32 = 0.6 * PADDLE_RADIUS;

    /// Round-start entity placement (puck mid-field, paddles at the quarter lines)
    pub const PUCK_START_POS: (f32, f32) = (0.5, 0.5);
    pub const PADDLE_LEFT_START_POS: (f32, f32) = (0.25, 0.5);
    pub const PADDLE_RIGHT_START_POS: (f32, f32) = (0.75, 0.5);

    /// Hit-freeze window after a puck strike (seconds)
    pub const HIT_DURATION: f32 = 0.3;
    /// Default round length (seconds)
    pub const ROUND_DURATION: f32 = 30.0;

    /// Claim ledger capacity (triangles per round)
    pub const AREA_MAX_COUNT: usize = 256;
    /// Corners per claimed area
    pub const AREA_CORNER_COUNT: usize = 3;

    /// Score sample grid resolution
    pub const SCORE_SAMPLE_RES: (usize, usize) = (512, 512);
    /// Bits per sample cell (team ownership bitmask)
    pub const SCORE_SAMPLE_BITS: usize = 2;
    /// Sample cells packed per byte
    pub const SCORE_SAMPLES_PER_BYTE: usize = 8 / SCORE_SAMPLE_BITS;

    /// Score presentation phase defaults (seconds)
    pub const SCORE_INTRO_DURATION: f32 = 1.0;
    pub const SCORE_TALLY_DURATION: f32 = 2.0;
    pub const SCORE_OUTRO_DURATION: f32 = 1.0;

    /// Cosmetic particle pool size
    pub const MAX_PARTICLE_COUNT: usize = 32;
}
