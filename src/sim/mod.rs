//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick displacement only
//! - No rendering or platform dependencies

pub mod collision;
pub mod opponent;
pub mod state;
pub mod tick;

pub use collision::{
    hits_horizontal_wall, hits_opponent_paddle, hits_player_paddle, past_left_edge,
    past_right_edge,
};
pub use opponent::opponent_velocity;
pub use state::{Ball, GameState, GameStatus, Paddle};
pub use tick::tick;
