//! Collision detection for the ball
//!
//! All checks look at the ball's leading edge only (no circle-rect
//! intersection), so a fast ball can clip past a paddle corner.

use super::state::{Ball, Paddle, Playfield, Side};

/// True if the ball's top or bottom edge is past the field's top or bottom
pub fn ball_hits_wall(ball: &Ball, field: &Playfield) -> bool {
    ball.top() < 0.0 || ball.bottom() > field.height
}

/// True if the ball's leading edge has crossed the paddle face while the
/// ball's center is inside the paddle's vertical span
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let crossed = match side {
        Side::Player => ball.left() < paddle.right(),
        Side::Ai => ball.right() > paddle.x,
    };
    crossed && paddle.spans(ball.pos.y)
}

/// X position that puts the ball flush against the paddle face
pub fn flush_x(ball: &Ball, paddle: &Paddle, side: Side) -> f32 {
    match side {
        Side::Player => paddle.right() + ball.radius,
        Side::Ai => paddle.x - ball.radius,
    }
}

/// Side whose edge the ball has crossed, if any (the side that conceded)
pub fn ball_out_of_bounds(ball: &Ball, field: &Playfield) -> Option<Side> {
    if ball.left() < 0.0 {
        Some(Side::Player)
    } else if ball.right() > field.width {
        Some(Side::Ai)
    } else {
        None
    }
}
