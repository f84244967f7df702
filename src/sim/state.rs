//! Game state and core simulation types
//!
//! Entities are constructed once per session and mutated in place by the
//! tick, input and reset operations.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Whether the current point is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Active,
    /// Ball left the surface on the left or right edge
    Over,
}

/// A vertical paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge (fixed for the lifetime of the session)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity per tick (positive = down)
    pub dy: f32,
}

impl Paddle {
    /// Paddle at `x`, vertically centered on the configured surface
    pub fn centered(x: f32, config: &GameConfig, dy: f32) -> Self {
        Self {
            x,
            y: config.max_paddle_y() / 2.0,
            width: config.paddle_width,
            height: config.paddle_height,
            dy,
        }
    }

    /// Vertical center
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// True if `y` lies strictly inside the paddle's vertical band
    #[inline]
    pub fn spans(&self, y: f32) -> bool {
        y > self.y && y < self.y + self.height
    }

    /// Set the top edge, clamped to `[0, surface_height - height]`
    pub fn set_y(&mut self, y: f32, surface_height: f32) {
        self.y = y.clamp(0.0, (surface_height - self.height).max(0.0));
    }

    /// Advance by the current velocity, then clamp
    pub fn advance(&mut self, surface_height: f32) {
        self.set_y(self.y + self.dy, surface_height);
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub radius: f32,
    /// Velocity per tick
    pub vel: Vec2,
}

impl Ball {
    /// Ball at the surface center with the configured initial speed
    pub fn centered(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.width / 2.0, config.height / 2.0),
            radius: config.ball_radius,
            vel: Vec2::splat(config.initial_ball_speed),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Complete mutable state of one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    /// Human paddle (left edge)
    pub player: Paddle,
    /// Scripted paddle (right edge)
    pub opponent: Paddle,
    pub ball: Ball,
    pub status: GameStatus,
    /// Simulation tick counter since the last reset
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with every entity at its initial value
    pub fn new(config: GameConfig) -> Self {
        Self {
            player: Paddle::centered(0.0, &config, 0.0),
            opponent: Paddle::centered(
                config.width - config.paddle_width,
                &config,
                config.opponent_speed,
            ),
            ball: Ball::centered(&config),
            status: GameStatus::Active,
            time_ticks: 0,
            config,
        }
    }

    /// Restore every field to its initial value, in place
    pub fn reset(&mut self) {
        let config = self.config;
        self.player = Paddle::centered(0.0, &config, 0.0);
        self.opponent = Paddle::centered(
            config.width - config.paddle_width,
            &config,
            config.opponent_speed,
        );
        self.ball = Ball::centered(&config);
        self.status = GameStatus::Active;
        self.time_ticks = 0;
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }
}
