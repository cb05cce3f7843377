//! The score-presentation mode
//!
//! Sequencing shell over [`crate::sim::score::ScoreTally`]: an intro hold,
//! the animated front sweep, and an outro hold with frozen totals, then a
//! handoff to the reset screen. Phase lengths come from [`crate::Tuning`].

use crate::input::Input;
use crate::sim::state::{GameState, ModeId};

pub fn init(state: &mut GameState) -> bool {
    state.tally.reset();
    true
}

pub fn update(state: &mut GameState, _input: &Input, _dt: f32) -> bool {
    // Sample once per entry, no matter how ticks land in the intro
    if !state.tally.sampled() {
        state.tally.rasterize(&state.bounds);
    }

    let intro_end = state.tuning.score_intro;
    let tally_end = intro_end + state.tuning.score_tally;
    let outro_end = tally_end + state.tuning.score_outro;

    if state.st <= intro_end {
        // Intro hold: the claimed field is on display, nothing counts yet
    } else if state.st < tally_end {
        let progress = if state.tuning.score_tally > 0.0 {
            (state.st - intro_end) / state.tuning.score_tally
        } else {
            1.0
        };
        state.tally.advance_fronts(progress);
    } else {
        // Outro: force the sweep complete, then hand off to the reset screen
        state.tally.advance_fronts(1.0);
        if state.st >= outro_end {
            state.pmid = ModeId::Reset;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::RNG_SEED;
    use crate::sim::body::{Team, TeamEntity};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn scored_state() -> GameState {
        let mut state = GameState::new(RNG_SEED, Tuning::default());

        // One left-team triangle covering the lower-left half
        let mut ent = TeamEntity::new(Vec2::ZERO, 0.05, Team::Left);
        for corner in [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        ] {
            ent.body.pos = corner;
            state.bounds.claim(&ent);
        }

        init(&mut state);
        state.mid = ModeId::Score;
        state.pmid = ModeId::Score;
        state
    }

    fn run_to(state: &mut GameState, st: f32) {
        state.st = st;
        let input = Input::default();
        update(state, &input, 0.0);
    }

    #[test]
    fn test_intro_samples_but_does_not_count() {
        let mut state = scored_state();
        run_to(&mut state, 0.1);

        assert!(state.tally.sampled());
        assert_eq!(state.tally.totals(), [0.0, 0.0]);
        assert_eq!(state.tally.fronts(), [0.0, 1.0]);
    }

    #[test]
    fn test_tally_accumulates_with_progress() {
        let mut state = scored_state();
        let half_sweep = state.tuning.score_intro + state.tuning.score_tally / 2.0;
        run_to(&mut state, half_sweep);

        let totals = state.tally.totals();
        assert!(totals[0] > 0.0);
        // Halfway in, only half the columns have been folded
        assert!(totals[0] < 0.5);
    }

    #[test]
    fn test_outro_freezes_and_requests_reset() {
        let mut state = scored_state();
        let outro_start =
            state.tuning.score_intro + state.tuning.score_tally + 1e-3;
        run_to(&mut state, outro_start);

        let totals = state.tally.totals();
        // The claimed triangle covers half the field
        assert!((totals[0] - 0.5).abs() < 0.01);
        assert_eq!(state.pmid, ModeId::Score);

        let deadline = state.tuning.score_duration() + 1e-3;
        run_to(&mut state, deadline);
        assert_eq!(state.tally.totals(), totals);
        assert_eq!(state.pmid, ModeId::Reset);
    }

    #[test]
    fn test_oversized_tick_still_samples_once() {
        let mut state = scored_state();
        // First observed tick lands straight in the outro
        let deadline = state.tuning.score_duration() + 1.0;
        run_to(&mut state, deadline);

        assert!(state.tally.sampled());
        let totals = state.tally.totals();
        assert!((totals[0] - 0.5).abs() < 0.01);
        assert_eq!(state.pmid, ModeId::Reset);
    }
}
