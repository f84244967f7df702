//! Canvas Pong - a two-paddle ball game on a 2D drawing surface
//!
//! Core modules:
//! - `sim`: Per-tick simulation (paddles, ball, collisions, opponent)
//! - `input`: Key/pointer/touch intents applied to the player paddle
//! - `renderer`: Drawing surface abstraction and scene rendering
//! - `session`: Frame loop state machine, scheduling and reset
//! - `platform`: Browser scheduler and restart button bindings
//! - `config`: Surface and entity dimensions

pub mod config;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use session::{RenderPhase, Session};

/// Game configuration constants
///
/// All speeds are per-tick displacements, not per-second.
pub mod consts {
    /// Default surface dimensions
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Player paddle speed while a direction key is held
    pub const PLAYER_SPEED: f32 = 4.0;
    /// Opponent paddle tracking speed
    pub const OPPONENT_SPEED: f32 = 2.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Initial speed on both axes
    pub const INITIAL_BALL_SPEED: f32 = 3.0;

    /// Game over overlay
    pub const GAME_OVER_TEXT: &str = "Game Over";
    pub const GAME_OVER_FONT: &str = "50px Arial";
    /// Horizontal offset of the overlay text from the surface center
    pub const GAME_OVER_OFFSET_X: f32 = 150.0;
}
