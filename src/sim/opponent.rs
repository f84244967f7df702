//! Reactive opponent controller

/// Velocity for the opponent paddle this tick
///
/// Moves down while the paddle center is above the ball, otherwise up
/// (ties included). Depends only on its inputs.
#[inline]
pub fn opponent_velocity(ball_y: f32, paddle_center_y: f32, speed: f32) -> f32 {
    if paddle_center_y < ball_y {
        speed
    } else {
        -speed
    }
}
