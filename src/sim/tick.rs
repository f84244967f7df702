//! Fixed-step simulation tick
//!
//! Advances paddles and ball by one frame's displacement.

use super::collision::{
    hits_horizontal_wall, hits_opponent_paddle, hits_player_paddle, past_left_edge,
    past_right_edge,
};
use super::opponent::opponent_velocity;
use super::state::{GameState, GameStatus};

/// Advance the game state by one tick
///
/// Order: player paddle, ball (walls, edges, paddles), opponent.
/// Does nothing once the game is over.
pub fn tick(state: &mut GameState) {
    if state.is_over() {
        return;
    }

    let height = state.config.height;
    let width = state.config.width;

    state.time_ticks += 1;

    state.player.advance(height);

    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // Sign flip only, the ball may overshoot for a tick
    if hits_horizontal_wall(ball, height) {
        ball.vel.y = -ball.vel.y;
        log::debug!("Wall bounce at y={:.1} (tick {})", ball.pos.y, state.time_ticks);
    }

    if past_right_edge(ball, width) {
        state.status = GameStatus::Over;
    }
    if past_left_edge(ball) {
        state.status = GameStatus::Over;
    }

    if hits_player_paddle(ball, &state.player) {
        ball.vel.x = -ball.vel.x;
        log::debug!("Player paddle bounce (tick {})", state.time_ticks);
    }
    if hits_opponent_paddle(ball, &state.opponent) {
        ball.vel.x = -ball.vel.x;
        log::debug!("Opponent paddle bounce (tick {})", state.time_ticks);
    }

    state.opponent.dy = opponent_velocity(
        state.ball.pos.y,
        state.opponent.center_y(),
        state.config.opponent_speed,
    );
    state.opponent.advance(height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use glam::Vec2;

    fn new_state() -> GameState {
        GameState::new(GameConfig::default())
    }

    #[test]
    fn test_tick_moves_ball_and_opponent() {
        let mut state = new_state();
        tick(&mut state);
        assert_eq!(state.ball.pos, Vec2::new(403.0, 203.0));
        // Opponent center (200) is above the ball (203): move down
        assert_eq!(state.opponent.dy, 2.0);
        assert_eq!(state.opponent.y, 152.0);
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.status, GameStatus::Active);
    }

    #[test]
    fn test_player_velocity_applied_and_clamped() {
        let mut state = new_state();
        state.player.dy = -4.0;
        tick(&mut state);
        assert_eq!(state.player.y, 146.0);

        state.player.y = 2.0;
        tick(&mut state);
        assert_eq!(state.player.y, 0.0);

        state.player.dy = 4.0;
        state.player.y = 298.0;
        tick(&mut state);
        assert_eq!(state.player.y, 300.0);
    }

    #[test]
    fn test_wall_bounce_flips_dy_without_clamping() {
        let mut state = new_state();
        let r = state.ball.radius;
        state.ball.pos = Vec2::new(400.0, state.config.height - r + 1.0);
        state.ball.vel = Vec2::new(3.0, 3.0);
        tick(&mut state);
        assert_eq!(state.ball.vel.y, -3.0);
        // Position is advanced but not corrected back inside
        assert_eq!(state.ball.pos.y, state.config.height - r + 4.0);
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(400.0, 12.0);
        state.ball.vel = Vec2::new(3.0, -3.0);
        tick(&mut state);
        assert_eq!(state.ball.vel.y, 3.0);
    }

    #[test]
    fn test_right_edge_ends_game() {
        let mut state = new_state();
        // Move the opponent out of the ball's row
        state.opponent.y = 0.0;
        let r = state.ball.radius;
        state.ball.pos = Vec2::new(state.config.width - r + 1.0, 350.0);
        state.ball.vel = Vec2::new(3.0, 0.0);
        tick(&mut state);
        assert_eq!(state.status, GameStatus::Over);
    }

    #[test]
    fn test_left_edge_ends_game() {
        let mut state = new_state();
        state.player.y = 300.0;
        state.ball.pos = Vec2::new(12.0, 50.0);
        state.ball.vel = Vec2::new(-3.0, 0.0);
        tick(&mut state);
        assert_eq!(state.status, GameStatus::Over);
    }

    #[test]
    fn test_player_paddle_bounce() {
        let mut state = new_state();
        let r = state.ball.radius;
        // After moving by dx=-3 the left edge sits just inside the paddle face
        let paddle_right = state.player.right();
        state.ball.pos = Vec2::new(paddle_right + r + 2.0, state.player.center_y());
        state.ball.vel = Vec2::new(-3.0, 0.0);
        tick(&mut state);
        assert_eq!(state.ball.vel.x, 3.0);
        assert_eq!(state.status, GameStatus::Active);
    }

    #[test]
    fn test_opponent_paddle_bounce() {
        let mut state = new_state();
        let r = state.ball.radius;
        state.ball.pos = Vec2::new(state.opponent.x - r - 2.0, state.opponent.center_y() + 5.0);
        state.ball.vel = Vec2::new(3.0, 0.0);
        tick(&mut state);
        assert_eq!(state.ball.vel.x, -3.0);
    }

    #[test]
    fn test_lingering_ball_bounces_every_tick() {
        let mut state = new_state();
        // Ball deep inside the player's zone, moving slowly
        state.ball.pos = Vec2::new(15.0, state.player.center_y());
        state.ball.vel = Vec2::new(1.0, 0.0);
        tick(&mut state);
        assert_eq!(state.ball.vel.x, -1.0);
        tick(&mut state);
        assert_eq!(state.ball.vel.x, 1.0);
    }

    #[test]
    fn test_opponent_tie_moves_up() {
        let mut state = new_state();
        state.ball.vel = Vec2::ZERO;
        state.ball.pos = Vec2::new(400.0, state.opponent.center_y());
        let before = state.opponent.y;
        tick(&mut state);
        assert_eq!(state.opponent.dy, -state.config.opponent_speed);
        assert_eq!(state.opponent.y, before - state.config.opponent_speed);
    }

    #[test]
    fn test_tick_after_game_over_is_noop() {
        let mut state = new_state();
        state.status = GameStatus::Over;
        let snapshot = state.clone();
        tick(&mut state);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = new_state();
        let mut state2 = new_state();
        for _ in 0..500 {
            tick(&mut state1);
            tick(&mut state2);
        }
        assert_eq!(state1, state2);
    }
}
