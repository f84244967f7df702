//! Game configuration
//!
//! Surface size and entity dimensions. Loaded from JSON overrides on top of
//! the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors produced while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be a positive finite number, got {value}")]
    InvalidDimension { field: &'static str, value: f32 },

    #[error("paddle height {paddle_height} does not fit surface height {height}")]
    PaddleTooTall { paddle_height: f32, height: f32 },

    #[error("ball radius {radius} does not fit a {width}x{height} surface")]
    BallTooLarge { radius: f32, width: f32, height: f32 },
}

/// Dimensions and per-tick speeds for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Surface width in pixels
    pub width: f32,
    /// Surface height in pixels
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    /// Initial ball speed on each axis
    pub initial_ball_speed: f32,
    /// Player paddle speed while a direction is held
    pub player_speed: f32,
    /// Opponent paddle speed
    pub opponent_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            ball_radius: BALL_RADIUS,
            initial_ball_speed: INITIAL_BALL_SPEED,
            player_speed: PLAYER_SPEED,
            opponent_speed: OPPONENT_SPEED,
        }
    }
}

impl GameConfig {
    /// Default config sized to an actual surface
    pub fn with_surface(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse JSON overrides (missing fields keep their defaults) and validate
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse JSON overrides for a surface whose size is already fixed
    pub fn from_json_with_surface(json: &str, width: f32, height: f32) -> Result<Self, ConfigError> {
        let config = Self {
            width,
            height,
            ..serde_json::from_str::<Self>(json)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every dimension is usable and the paddle y-range is non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }

        // Speeds may be zero but not negative
        let speeds = [
            ("initial_ball_speed", self.initial_ball_speed),
            ("player_speed", self.player_speed),
            ("opponent_speed", self.opponent_speed),
        ];
        for (field, value) in speeds {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }

        if self.paddle_height > self.height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                height: self.height,
            });
        }

        if self.ball_radius * 2.0 > self.width.min(self.height) {
            return Err(ConfigError::BallTooLarge {
                radius: self.ball_radius,
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }

    /// Largest valid paddle top edge
    #[inline]
    pub fn max_paddle_y(&self) -> f32 {
        self.height - self.paddle_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
        assert_eq!(GameConfig::default().max_paddle_y(), 300.0);
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = GameConfig::from_json(r#"{ "width": 640, "opponent_speed": 3 }"#).unwrap();
        assert_eq!(config.width, 640.0);
        assert_eq!(config.opponent_speed, 3.0);
        // Untouched fields keep defaults
        assert_eq!(config.height, SURFACE_HEIGHT);
        assert_eq!(config.paddle_height, PADDLE_HEIGHT);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = GameConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_paddle_taller_than_surface() {
        let err = GameConfig::from_json(r#"{ "height": 50 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::PaddleTooTall { .. }));
    }

    #[test]
    fn test_invalid_dimension() {
        let config = GameConfig {
            ball_radius: 0.0,
            ..GameConfig::default()
        };
        match config.validate() {
            Err(ConfigError::InvalidDimension { field, .. }) => assert_eq!(field, "ball_radius"),
            other => panic!("unexpected result: {:?}", other),
        }

        let config = GameConfig {
            player_speed: -1.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ball_too_large() {
        let config = GameConfig {
            ball_radius: 300.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BallTooLarge { .. })
        ));
    }

    #[test]
    fn test_surface_size_wins_over_json() {
        let config =
            GameConfig::from_json_with_surface(r#"{ "width": 10, "paddle_height": 500 }"#, 640.0, 600.0)
                .unwrap();
        assert_eq!(config.width, 640.0);
        assert_eq!(config.height, 600.0);
        assert_eq!(config.paddle_height, 500.0);
    }

    #[test]
    fn test_with_surface() {
        let config = GameConfig::with_surface(1024.0, 768.0);
        assert_eq!(config.width, 1024.0);
        assert_eq!(config.height, 768.0);
        assert_eq!(config.ball_radius, BALL_RADIUS);
    }
}
