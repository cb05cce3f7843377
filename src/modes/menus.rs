//! Menu-driven modes: title, select, bind, reset
//!
//! Thin navigation shells around a shared cursor: either side's up/down
//! steps the highlighted item, either side's rush confirms it. Widget
//! layout and text rendering belong to the host.

use crate::input::{Action, Input};
use crate::sim::body::Team;
use crate::sim::state::{GameState, ModeId};

pub const TITLE_ITEMS: [&str; 3] = ["PLAY", "BIND", "EXIT"];
pub const SELECT_ITEMS: [&str; 4] = ["SHORT", "STANDARD", "MARATHON", "BACK"];
pub const BIND_ITEMS: [&str; 1] = ["DONE"];
pub const RESET_ITEMS: [&str; 2] = ["REMATCH", "TITLE"];

/// Cursor delta and confirm flag for this tick, merged across both sides
fn nav(input: &Input) -> (i32, bool) {
    let mut dy = 0;
    if input.is_pressed(Action::LUp) || input.is_pressed(Action::RUp) {
        dy -= 1;
    }
    if input.is_pressed(Action::LDown) || input.is_pressed(Action::RDown) {
        dy += 1;
    }
    let select = input.is_pressed(Action::LRush) || input.is_pressed(Action::RRush);
    (dy, select)
}

/// Step the cursor with wraparound
fn step(idx: u32, count: usize, dy: i32) -> u32 {
    (idx as i32 + dy).rem_euclid(count as i32) as u32
}

pub mod title {
    use super::*;

    pub fn init(state: &mut GameState) -> bool {
        state.menu_idx = 0;
        true
    }

    pub fn update(state: &mut GameState, input: &Input, _dt: f32) -> bool {
        let (dy, select) = nav(input);
        if select {
            state.pmid = match state.menu_idx {
                0 => ModeId::Select,
                1 => ModeId::Bind,
                _ => ModeId::Exit,
            };
        } else {
            state.menu_idx = step(state.menu_idx, TITLE_ITEMS.len(), dy);
        }
        true
    }
}

pub mod select {
    use super::*;

    /// Round lengths offered by the selection menu (seconds)
    pub const ROUND_CHOICES: [f32; 3] = [15.0, 30.0, 60.0];

    pub fn init(state: &mut GameState) -> bool {
        // Default the cursor to the standard round
        state.menu_idx = 1;
        true
    }

    pub fn update(state: &mut GameState, input: &Input, _dt: f32) -> bool {
        let (dy, select) = nav(input);
        if select {
            match state.menu_idx {
                idx if (idx as usize) < ROUND_CHOICES.len() => {
                    state.tuning.round_duration = ROUND_CHOICES[idx as usize];
                    state.pmid = ModeId::Game;
                }
                _ => state.pmid = ModeId::Title,
            }
        } else {
            state.menu_idx = step(state.menu_idx, SELECT_ITEMS.len(), dy);
        }
        true
    }
}

pub mod bind {
    use super::*;

    pub fn init(state: &mut GameState) -> bool {
        state.menu_idx = 0;
        true
    }

    /// The binding editor itself lives with the host's device layer; this
    /// mode only surfaces the logical action list (see [`Action::label`])
    /// and hands control back.
    pub fn update(state: &mut GameState, input: &Input, _dt: f32) -> bool {
        let (dy, select) = nav(input);
        if select {
            state.pmid = ModeId::Title;
        } else {
            state.menu_idx = step(state.menu_idx, BIND_ITEMS.len(), dy);
        }
        true
    }
}

pub mod reset {
    use super::*;

    /// Pick the winner for display: strictly larger share takes the round,
    /// equal shares mean nobody does.
    pub fn init(state: &mut GameState) -> bool {
        state.menu_idx = 0;

        let [left, right] = state.tally.totals();
        state.winner = if left > right {
            Team::Left
        } else if right > left {
            Team::Right
        } else {
            Team::Neutral
        };
        if state.tally.sampled() {
            log::info!(
                "round over: left {:.1}% right {:.1}% winner {:?}",
                left * 100.0,
                right * 100.0,
                state.winner,
            );
        }
        true
    }

    pub fn update(state: &mut GameState, input: &Input, _dt: f32) -> bool {
        let (dy, select) = nav(input);
        if select {
            state.pmid = match state.menu_idx {
                0 => ModeId::Select,
                _ => ModeId::Title,
            };
        } else {
            state.menu_idx = step(state.menu_idx, RESET_ITEMS.len(), dy);
        }
        true
    }
}
