//! Collision predicates for the rectangular court
//!
//! All tests are overlap tests on the current position. None of them look at
//! the direction of travel, so a ball lingering inside a paddle's zone keeps
//! matching every tick.

use super::state::{Ball, Paddle};

/// Ball edge crosses the top or bottom of the surface
#[inline]
pub fn hits_horizontal_wall(ball: &Ball, surface_height: f32) -> bool {
    ball.bottom() > surface_height || ball.top() < 0.0
}

/// Ball edge crosses the right boundary
#[inline]
pub fn past_right_edge(ball: &Ball, surface_width: f32) -> bool {
    ball.right() > surface_width
}

/// Ball edge crosses the left boundary
#[inline]
pub fn past_left_edge(ball: &Ball) -> bool {
    ball.left() < 0.0
}

/// Ball overlaps the left-hand (player) paddle
#[inline]
pub fn hits_player_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.left() < paddle.right() && paddle.spans(ball.pos.y)
}

/// Ball overlaps the right-hand (opponent) paddle
#[inline]
pub fn hits_opponent_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.right() > paddle.x && paddle.spans(ball.pos.y)
}
