//! The round-of-play mode
//!
//! Each tick: steer and rush both paddles, advance the puck (with toroidal
//! wrap), resolve strikes, and deposit claim corners. A successful strike
//! opens a short freeze window during which nothing moves and the round
//! clock holds.

use glam::Vec2;

use crate::consts::*;
use crate::input::{Action, Input};
use crate::sim::body::Team;
use crate::sim::paddle::Paddle;
use crate::sim::puck::Puck;
use crate::sim::state::{GameState, ModeId};

/// Per-side steering actions: up, down, left, right, rush
const SIDE_ACTIONS: [(Action, Action, Action, Action, Action); 2] = [
    (
        Action::LUp,
        Action::LDown,
        Action::LLeft,
        Action::LRight,
        Action::LRush,
    ),
    (
        Action::RUp,
        Action::RDown,
        Action::RLeft,
        Action::RRight,
        Action::RRush,
    ),
];

/// Build a fresh round: cleared ledger, centered neutral puck, paddles at
/// their quarter lines.
pub fn init(state: &mut GameState) -> bool {
    state.rt = 0.0;
    state.ht = 0.0;

    let rect = state.field();
    state.bounds.reset_round();
    state.puck = Puck::new(
        Vec2::new(PUCK_START_POS.0, PUCK_START_POS.1),
        PUCK_RADIUS,
        Team::Neutral,
        &rect,
    );
    state.paddles = [
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
    ];
    state.particulator.clear();

    true
}

pub fn update(state: &mut GameState, input: &Input, dt: f32) -> bool {
    if state.ht > 0.0 {
        // Strike freeze: hold the world until the window elapses
        state.ht = if state.ht < state.tuning.hit_duration {
            state.ht + dt
        } else {
            0.0
        };
    } else {
        let rect = state.field();
        let was_rushing = [state.paddles[0].is_rushing(), state.paddles[1].is_rushing()];

        for (idx, &(up, down, left, right, rush)) in SIDE_ACTIONS.iter().enumerate() {
            let dx = i32::from(input.is_down(right)) - i32::from(input.is_down(left));
            let dy = i32::from(input.is_down(up)) - i32::from(input.is_down(down));

            let paddle = &mut state.paddles[idx];
            paddle.set_move(dx, dy);
            if input.is_down(rush) {
                paddle.rush();
            }
        }

        state.puck.update(dt, &rect);
        for paddle in &mut state.paddles {
            paddle.update(dt, &rect);
        }

        for idx in 0..state.paddles.len() {
            let striker = state.paddles[idx].ent;
            if state.puck.hit(&striker) {
                state.bounds.claim(&striker);

                let puck_body = state.puck.ent.body;
                state.particulator.gen_hit(
                    puck_body.pos,
                    puck_body.vel,
                    2.25 * puck_body.radius,
                    striker.team,
                    &mut state.rng,
                );
                state.ht += dt;
                break;
            }
        }

        for (idx, &was) in was_rushing.iter().enumerate() {
            let paddle = &state.paddles[idx];
            if !was && paddle.is_rushing() {
                let body = paddle.ent.body;
                state.particulator.gen_trail(
                    body.pos,
                    body.vel,
                    2.0 * body.radius,
                    paddle.ent.team,
                    &mut state.rng,
                );
            }
        }

        state.rt += dt;
        if state.rt >= state.tuning.round_duration {
            state.pmid = ModeId::Score;
        }
    }

    state.particulator.update(dt);
    true
}
