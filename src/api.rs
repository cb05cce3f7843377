//! Host-facing entry points
//!
//! Four calls mirror the embedding contract: `boot` prepares output
//! buffers, `init` seeds a fresh session, `update` advances one tick, and
//! `render` is the host's cue to draw from the read-only state accessors.
//! `update` returns `false` only when a mode requested the exit sentinel;
//! the host stops its loop on that.

use glam::UVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::input::Input;
use crate::modes;
use crate::sim::state::{GameState, ModeId};

/// Render-target geometry owned by the host. The simulation never reads it;
/// it exists so a drawing host and the core agree on one boot handshake.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub gfx_res: UVec2,
}

/// Allocate output-side resources. No simulation effect.
pub fn boot(output: &mut Output) -> bool {
    output.gfx_res = UVec2::new(1024, 1024);
    true
}

/// Start a session: zero the clocks, reseed the RNG, point the controller at
/// the title screen, and give every mode one entry pass so all per-mode
/// state exists before the first tick.
pub fn init(state: &mut GameState, input: &mut Input) -> bool {
    state.dt = 0.0;
    state.tt = 0.0;
    state.st = 0.0;
    state.rt = 0.0;
    state.ht = 0.0;

    state.rng = Pcg32::seed_from_u64(state.seed);
    state.mid = ModeId::Boot;
    state.pmid = ModeId::Title;

    *input = Input::default();

    let mut ok = true;
    for mode in ModeId::DISPATCHABLE {
        ok &= modes::init_mode(state, mode);
    }
    ok
}

/// Advance the simulation by one tick.
///
/// A pending mode change is applied first: its init runs exactly once, at
/// the tick where the mismatch is first observed, and the mode clock
/// restarts. The active mode's update then runs to completion with a
/// consistent state; transitions it requests wait for the next tick.
pub fn update(state: &mut GameState, input: &Input, _output: &Output, dt: f32) -> bool {
    if state.pmid != state.mid {
        if state.pmid.is_sentinel() {
            return false;
        }
        if !modes::init_mode(state, state.pmid) {
            return false;
        }
        state.mid = state.pmid;
        state.st = 0.0;
    }

    state.dt = dt;
    state.tt += dt;
    state.st += dt;

    modes::update_mode(state, input, dt)
}

/// Drawing is external; everything a renderer needs is reachable through
/// `GameState`'s read-only accessors (bounds, entities, claim ledger, score
/// grid and totals). Sentinel modes have nothing to draw.
pub fn render(state: &GameState, _input: &Input, _output: &mut Output) -> bool {
    !state.mid.is_sentinel()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{RNG_SEED, SIM_DT};
    use crate::input::Action;
    use crate::sim::body::Team;
    use crate::tuning::Tuning;

    fn session() -> (GameState, Input, Output) {
        let mut state = GameState::new(RNG_SEED, Tuning::default());
        let mut input = Input::default();
        let mut output = Output::default();
        assert!(boot(&mut output));
        assert!(init(&mut state, &mut input));
        (state, input, output)
    }

    #[test]
    fn test_boot_allocates_output_only() {
        let (state, _input, output) = session();
        assert_eq!(output.gfx_res, UVec2::new(1024, 1024));
        // Simulation state is untouched by boot
        assert_eq!(state.tt, 0.0);
    }

    #[test]
    fn test_first_update_enters_title() {
        let (mut state, input, output) = session();
        assert_eq!(state.mid, ModeId::Boot);

        assert!(update(&mut state, &input, &output, SIM_DT));
        assert_eq!(state.mid, ModeId::Title);
        assert!((state.st - SIM_DT).abs() < 1e-6);
    }

    #[test]
    fn test_mode_init_runs_exactly_once() {
        let (mut state, input, output) = session();
        assert!(update(&mut state, &input, &output, SIM_DT));
        assert_eq!(state.mid, ModeId::Title);

        // A repeated init would reset the cursor to 0
        state.menu_idx = 2;
        for _ in 0..10 {
            assert!(update(&mut state, &input, &output, SIM_DT));
        }
        assert_eq!(state.menu_idx, 2);
        assert!((state.st - 11.0 * SIM_DT).abs() < 1e-4);
    }

    #[test]
    fn test_exit_sentinel_stops_the_loop() {
        let (mut state, input, output) = session();
        assert!(update(&mut state, &input, &output, SIM_DT));

        state.pmid = ModeId::Exit;
        assert!(!update(&mut state, &input, &output, SIM_DT));
        // The failed tick changes nothing observable
        assert_eq!(state.mid, ModeId::Title);
    }

    #[test]
    fn test_transitions_take_effect_next_tick() {
        let (mut state, mut input, output) = session();
        assert!(update(&mut state, &input, &output, SIM_DT));

        // Confirm PLAY on the title screen
        input.begin_tick();
        input.press(Action::LRush);
        assert!(update(&mut state, &input, &output, SIM_DT));
        // Request registered, switch not yet applied
        assert_eq!(state.mid, ModeId::Title);
        assert_eq!(state.pmid, ModeId::Select);

        input.begin_tick();
        input.release(Action::LRush);
        assert!(update(&mut state, &input, &output, SIM_DT));
        assert_eq!(state.mid, ModeId::Select);
        assert!((state.st - SIM_DT).abs() < 1e-6);
    }

    #[test]
    fn test_menus_route_into_a_round() {
        let (mut state, mut input, output) = session();
        assert!(update(&mut state, &input, &output, SIM_DT));

        // Title: PLAY
        input.begin_tick();
        input.press(Action::LRush);
        assert!(update(&mut state, &input, &output, SIM_DT));
        input.begin_tick();
        input.release(Action::LRush);
        assert!(update(&mut state, &input, &output, SIM_DT));
        assert_eq!(state.mid, ModeId::Select);

        // Select: confirm the highlighted standard round
        input.begin_tick();
        input.press(Action::RRush);
        assert!(update(&mut state, &input, &output, SIM_DT));
        input.begin_tick();
        input.release(Action::RRush);
        assert!(update(&mut state, &input, &output, SIM_DT));
        assert_eq!(state.mid, ModeId::Game);
        assert_eq!(state.rt, SIM_DT);
        assert_eq!(state.puck.ent.team, Team::Neutral);
    }

    #[test]
    fn test_round_flows_through_score_into_reset() {
        let mut state = GameState::new(
            RNG_SEED,
            Tuning {
                round_duration: 4.0 * SIM_DT,
                score_intro: 2.0 * SIM_DT,
                score_tally: 4.0 * SIM_DT,
                score_outro: 2.0 * SIM_DT,
                ..Tuning::default()
            },
        );
        let mut input = Input::default();
        let mut output = Output::default();
        assert!(boot(&mut output));
        assert!(init(&mut state, &mut input));

        // Straight to a round
        state.pmid = ModeId::Game;
        let mut seen_score = false;
        for _ in 0..64 {
            assert!(update(&mut state, &input, &output, SIM_DT));
            seen_score |= state.mid == ModeId::Score;
            if state.mid == ModeId::Reset {
                break;
            }
        }

        assert!(seen_score);
        assert_eq!(state.mid, ModeId::Reset);
        // Nothing was claimed, so nobody won
        assert_eq!(state.winner, Team::Neutral);
        assert!(render(&state, &input, &mut output));
    }

    #[test]
    fn test_identical_sessions_stay_identical() {
        let (mut a, input_a, output) = session();
        let (mut b, input_b, _) = session();

        for _ in 0..120 {
            assert!(update(&mut a, &input_a, &output, SIM_DT));
            assert!(update(&mut b, &input_b, &output, SIM_DT));
        }

        assert_eq!(a.mid, b.mid);
        assert_eq!(a.tt, b.tt);
        assert_eq!(a.puck.ent.body.pos, b.puck.ent.body.pos);
        assert_eq!(a.paddles[0].ent.body.pos, b.paddles[0].ent.body.pos);
    }
}
