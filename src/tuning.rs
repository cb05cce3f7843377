//! Data-driven game balance
//!
//! Round-level knobs the host may override from a JSON blob; every missing
//! field falls back to the compile-time default, so a minimal config can
//! adjust just the value it cares about. Entity physics constants stay
//! attached to their types.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Runtime-tunable round and presentation timings (seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Length of a round of play
    pub round_duration: f32,
    /// Freeze window after a puck strike
    pub hit_duration: f32,
    /// Score presentation: hold before the tally starts
    pub score_intro: f32,
    /// Score presentation: sweep duration
    pub score_tally: f32,
    /// Score presentation: hold on the final totals
    pub score_outro: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            round_duration: ROUND_DURATION,
            hit_duration: HIT_DURATION,
            score_intro: SCORE_INTRO_DURATION,
            score_tally: SCORE_TALLY_DURATION,
            score_outro: SCORE_OUTRO_DURATION,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Total length of the score presentation
    pub fn score_duration(&self) -> f32 {
        self.score_intro + self.score_tally + self.score_outro
    }
}
