//! Turfpuck entry point
//!
//! Headless demo loop: boots a session, walks the menus with scripted
//! taps, lets two scripted players contest one round, and logs the outcome.
//! A drawing host would run the same four entry points and pull geometry
//! from the state accessors inside its render callback.

use std::collections::VecDeque;

use turfpuck::consts::{RNG_SEED, SIM_DT};
use turfpuck::sim::{GameState, ModeId};
use turfpuck::{Action, Input, Output, Tuning, boot, init, render, update};

/// Scripted menu taps: `Some` holds an action for one tick, `None` releases
/// everything for a tick so the next tap registers as a fresh edge.
fn menu_script(mode: ModeId, rounds_played: u32) -> VecDeque<Option<Action>> {
    let taps: &[Option<Action>] = match mode {
        // PLAY the first time through, EXIT once a round has been shown
        ModeId::Title if rounds_played == 0 => &[Some(Action::LRush)],
        ModeId::Title => &[
            Some(Action::LDown),
            None,
            Some(Action::LDown),
            None,
            Some(Action::LRush),
        ],
        // SHORT round keeps the demo brisk
        ModeId::Select => &[Some(Action::LUp), None, Some(Action::LRush)],
        // Reset: TITLE
        ModeId::Reset => &[Some(Action::LDown), None, Some(Action::LRush)],
        _ => &[],
    };
    taps.iter().copied().collect()
}

/// Chase controller: steer a paddle toward the puck, rushing when lined up.
fn drive_side(state: &GameState, input: &mut Input, side: usize, frame: u64) {
    let actions = if side == 0 {
        [
            Action::LUp,
            Action::LDown,
            Action::LLeft,
            Action::LRight,
            Action::LRush,
        ]
    } else {
        [
            Action::RUp,
            Action::RDown,
            Action::RLeft,
            Action::RRight,
            Action::RRush,
        ]
    };

    let paddle = state.paddles[side].ent.body.pos;
    let target = state.puck.ent.body.pos;
    let delta = target - paddle;
    let deadzone = 0.02;

    input.set_down(actions[0], delta.y > deadzone);
    input.set_down(actions[1], delta.y < -deadzone);
    input.set_down(actions[2], delta.x < -deadzone);
    input.set_down(actions[3], delta.x > deadzone);
    // Occasional rush attempts; the cooldown gates the rest
    input.set_down(actions[4], delta.length() < 0.2 && frame % 90 == 0);
}

fn main() {
    env_logger::init();

    let mut state = GameState::new(RNG_SEED, Tuning::default());
    let mut input = Input::default();
    let mut output = Output::default();

    if !boot(&mut output) || !init(&mut state, &mut input) {
        log::error!("session failed to initialize");
        return;
    }

    let mut script: VecDeque<Option<Action>> = VecDeque::new();
    let mut last_mode = state.mid;
    let mut rounds_played = 0u32;
    let mut frame = 0u64;

    loop {
        if state.mid != last_mode {
            log::info!("mode {:?} -> {:?}", last_mode, state.mid);
            if state.mid == ModeId::Reset {
                rounds_played += 1;
            }
            script = menu_script(state.mid, rounds_played);
            last_mode = state.mid;
        }

        input.begin_tick();
        for action in Action::ALL {
            input.release(action);
        }
        if state.mid == ModeId::Game {
            drive_side(&state, &mut input, 0, frame);
            drive_side(&state, &mut input, 1, frame + 45);
        } else if let Some(Some(action)) = script.pop_front() {
            input.press(action);
        }

        if !update(&mut state, &input, &output, SIM_DT) {
            break;
        }
        render(&state, &input, &mut output);
        frame += 1;
    }

    let [left, right] = state.tally.totals();
    log::info!(
        "demo finished after {:.1}s simulated: left {:.1}% right {:.1}% winner {:?}",
        state.tt,
        left * 100.0,
        right * 100.0,
        state.winner,
    );
}
