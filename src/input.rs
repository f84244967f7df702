//! Player input handling
//!
//! Hosts translate raw key/pointer/touch events into [`Intent`]s; the
//! session applies them to the player paddle through [`InputState`].

use crate::sim::GameState;

/// Vertical direction for key intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Map a DOM key name to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Up" | "ArrowUp" => Some(Direction::Up),
            "Down" | "ArrowDown" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Signed unit velocity (screen y grows downward)
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }
}

/// A normalized input event in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Direction key pressed
    Press(Direction),
    /// Direction key released
    Release(Direction),
    /// Pointer moved; paddle center follows `y`
    PointerMove { y: f32 },
    /// Touch began at `y`; anchors relative dragging
    TouchStart { y: f32 },
    /// Touch moved to `y`
    TouchMove { y: f32 },
}

impl Intent {
    /// Key-down intent for a DOM key name, if it is a direction key
    pub fn key_down(key: &str) -> Option<Self> {
        Direction::from_key(key).map(Intent::Press)
    }

    /// Key-up intent for a DOM key name, if it is a direction key
    pub fn key_up(key: &str) -> Option<Self> {
        Direction::from_key(key).map(Intent::Release)
    }
}

/// Convert a host-space coordinate to surface-local space
#[inline]
pub fn to_surface_y(client_y: f32, surface_top: f32) -> f32 {
    client_y - surface_top
}

/// Touch drag anchor for the player paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputState {
    /// Surface y where the current touch began
    pub touch_start_y: f32,
    /// Player paddle top edge when the current touch began
    pub touch_paddle_y: f32,
}

impl InputState {
    pub fn new(state: &GameState) -> Self {
        Self {
            touch_start_y: 0.0,
            touch_paddle_y: state.player.y,
        }
    }

    /// Restore the anchor to its initial value
    pub fn reset(&mut self, state: &GameState) {
        *self = Self::new(state);
    }

    /// Apply an intent to the player paddle
    ///
    /// Absolute-position intents clamp immediately.
    pub fn apply(&mut self, state: &mut GameState, intent: Intent) {
        let height = state.config.height;
        let speed = state.config.player_speed;
        let paddle = &mut state.player;

        match intent {
            Intent::Press(dir) => paddle.dy = dir.sign() * speed,
            Intent::Release(_) => paddle.dy = 0.0,
            Intent::PointerMove { y } => {
                if y.is_finite() {
                    paddle.set_y(y - paddle.height / 2.0, height);
                }
            }
            Intent::TouchStart { y } => {
                if y.is_finite() {
                    self.touch_start_y = y;
                    self.touch_paddle_y = paddle.y;
                }
            }
            Intent::TouchMove { y } => {
                if y.is_finite() {
                    let delta = y - self.touch_start_y;
                    paddle.set_y(self.touch_paddle_y + delta, height);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn setup() -> (GameState, InputState) {
        let state = GameState::new(GameConfig::default());
        let input = InputState::new(&state);
        (state, input)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Intent::key_down("ArrowUp"), Some(Intent::Press(Direction::Up)));
        assert_eq!(Intent::key_down("Up"), Some(Intent::Press(Direction::Up)));
        assert_eq!(Intent::key_up("Down"), Some(Intent::Release(Direction::Down)));
        assert_eq!(Intent::key_down("a"), None);
        assert_eq!(Intent::key_up(" "), None);
    }

    #[test]
    fn test_press_and_release() {
        let (mut state, mut input) = setup();
        input.apply(&mut state, Intent::Press(Direction::Up));
        assert_eq!(state.player.dy, -4.0);
        input.apply(&mut state, Intent::Press(Direction::Down));
        assert_eq!(state.player.dy, 4.0);
        // Releasing either direction stops the paddle
        input.apply(&mut state, Intent::Release(Direction::Up));
        assert_eq!(state.player.dy, 0.0);
    }

    #[test]
    fn test_pointer_centers_paddle() {
        let (mut state, mut input) = setup();
        input.apply(&mut state, Intent::PointerMove { y: 120.0 });
        assert_eq!(state.player.y, 70.0);

        input.apply(&mut state, Intent::PointerMove { y: 10.0 });
        assert_eq!(state.player.y, 0.0);

        input.apply(&mut state, Intent::PointerMove { y: 399.0 });
        assert_eq!(state.player.y, 300.0);
    }

    #[test]
    fn test_touch_drag_is_relative() {
        let (mut state, mut input) = setup();
        input.apply(&mut state, Intent::TouchStart { y: 300.0 });
        assert_eq!(input.touch_start_y, 300.0);
        assert_eq!(input.touch_paddle_y, 150.0);

        input.apply(&mut state, Intent::TouchMove { y: 260.0 });
        assert_eq!(state.player.y, 110.0);

        input.apply(&mut state, Intent::TouchMove { y: 500.0 });
        assert_eq!(state.player.y, 300.0);

        input.apply(&mut state, Intent::TouchMove { y: -500.0 });
        assert_eq!(state.player.y, 0.0);
    }

    #[test]
    fn test_non_finite_coordinates_ignored() {
        let (mut state, mut input) = setup();
        input.apply(&mut state, Intent::PointerMove { y: f32::NAN });
        input.apply(&mut state, Intent::TouchStart { y: f32::INFINITY });
        input.apply(&mut state, Intent::TouchMove { y: f32::NAN });
        assert_eq!(state.player.y, 150.0);
        assert_eq!(input, InputState::new(&state));
    }

    #[test]
    fn test_to_surface_y() {
        assert_eq!(to_surface_y(250.0, 50.0), 200.0);
    }
}
