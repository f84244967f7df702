//! 2D rendering module
//!
//! Draws the scene through the [`Surface`] trait so the same code drives a
//! browser canvas or an in-memory recorder.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recorder;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recorder::{DrawCommand, Recorder};

use crate::consts::{GAME_OVER_FONT, GAME_OVER_OFFSET_X, GAME_OVER_TEXT};
use crate::sim::{Ball, GameState, Paddle};

/// Fill colors used by the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Red,
}

impl Color {
    /// CSS color name
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Red => "red",
        }
    }
}

/// A fixed-size 2D drawing target
pub trait Surface {
    /// Width and height in pixels
    fn size(&self) -> (f32, f32);
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    /// Filled full circle centered at `(x, y)`
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
    /// Text with its baseline starting at `(x, y)`
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color);
}

fn clear<S: Surface>(surface: &mut S) {
    let (w, h) = surface.size();
    surface.clear_rect(0.0, 0.0, w, h);
}

fn draw_paddle<S: Surface>(surface: &mut S, paddle: &Paddle) {
    surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, Color::White);
}

fn draw_ball<S: Surface>(surface: &mut S, ball: &Ball) {
    surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius, Color::White);
}

/// Clear and redraw both paddles and the ball
pub fn render_scene<S: Surface>(surface: &mut S, state: &GameState) {
    clear(surface);
    draw_paddle(surface, &state.player);
    draw_paddle(surface, &state.opponent);
    draw_ball(surface, &state.ball);
}

/// Clear and draw the game over message
pub fn render_game_over<S: Surface>(surface: &mut S) {
    clear(surface);
    let (w, h) = surface.size();
    surface.fill_text(
        GAME_OVER_TEXT,
        w / 2.0 - GAME_OVER_OFFSET_X,
        h / 2.0,
        GAME_OVER_FONT,
        Color::Red,
    );
}
