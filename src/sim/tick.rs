//! Per-frame simulation update
//!
//! Advances the game by one frame. Deterministic given the random source.

use super::collision::{ball_hits_paddle, ball_hits_wall, ball_out_of_bounds, flush_x};
use super::rng::RandomSource;
use super::state::{GameState, Side};

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Player paddle top edge from the latest pointer move (already clamped)
    pub player_y: Option<f32>,
}

/// What happened during a frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub wall_bounce: bool,
    pub paddle_hits: Vec<Side>,
    /// Side that let the ball through (ball was reset)
    pub conceded: Option<Side>,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl RandomSource) -> TickReport {
    let mut report = TickReport::default();
    state.frame += 1;

    if let Some(y) = input.player_y {
        state.player.set_y(y, &state.field);
    }

    // Move the ball
    state.ball.pos += state.ball.vel;

    // Top and bottom walls
    if ball_hits_wall(&state.ball, &state.field) {
        state.ball.vel.y = -state.ball.vel.y;
        report.wall_bounce = true;
        log::trace!("Wall bounce at y={:.1}", state.ball.pos.y);
    }

    // Paddles, player first
    for side in [Side::Player, Side::Ai] {
        let paddle = state.paddle(side);
        if ball_hits_paddle(&state.ball, paddle, side) {
            let x = flush_x(&state.ball, paddle, side);
            let ball = &mut state.ball;
            ball.vel.x = -ball.vel.x;
            ball.vel.y += rng.symmetric() * state.hit_jitter;
            // Prevent sticky ball
            ball.pos.x = x;
            report.paddle_hits.push(side);
            log::trace!("{:?} paddle hit, vel=({:.2}, {:.2})", side, ball.vel.x, ball.vel.y);
        }
    }

    // Ball missed a paddle
    if let Some(side) = ball_out_of_bounds(&state.ball, &state.field) {
        state.ball.reset(&state.field, rng);
        report.conceded = Some(side);
        log::debug!(
            "{:?} conceded on frame {}, relaunch vel=({:.2}, {:.2})",
            side,
            state.frame,
            state.ball.vel.x,
            state.ball.vel.y
        );
    }

    track_ball(state);

    report
}

/// Move the AI paddle toward the ball unless it is inside the dead-zone
pub fn track_ball(state: &mut GameState) {
    let center = state.ai.center_y();
    let ball_y = state.ball.pos.y;

    let y = if ball_y < center - state.ai_dead_zone {
        state.ai.y - state.paddle_speed
    } else if ball_y > center + state.ai_dead_zone {
        state.ai.y + state.paddle_speed
    } else {
        state.ai.y
    };
    state.ai.set_y(y, &state.field);
}
