//! Game modes and the mode state machine
//!
//! Modes are a closed set keyed by [`ModeId`] and dispatched through
//! exhaustive matches, so adding a mode without wiring its init/update is a
//! compile error. A mode requests a transition by writing `state.pmid`; the
//! controller applies it at the top of the next tick, never mid-update.

use crate::input::Input;
use crate::sim::state::{GameState, ModeId};

pub mod game;
pub mod menus;
pub mod score;

/// Run a mode's entry hook. Sentinels have no body and report failure.
pub fn init_mode(state: &mut GameState, mode: ModeId) -> bool {
    match mode {
        ModeId::Game => game::init(state),
        ModeId::Select => menus::select::init(state),
        ModeId::Title => menus::title::init(state),
        ModeId::Bind => menus::bind::init(state),
        ModeId::Score => score::init(state),
        ModeId::Reset => menus::reset::init(state),
        ModeId::Boot | ModeId::Exit => false,
    }
}

/// Advance the active mode by one tick
pub fn update_mode(state: &mut GameState, input: &Input, dt: f32) -> bool {
    match state.mid {
        ModeId::Game => game::update(state, input, dt),
        ModeId::Select => menus::select::update(state, input, dt),
        ModeId::Title => menus::title::update(state, input, dt),
        ModeId::Bind => menus::bind::update(state, input, dt),
        ModeId::Score => score::update(state, input, dt),
        ModeId::Reset => menus::reset::update(state, input, dt),
        ModeId::Boot | ModeId::Exit => false,
    }
}
