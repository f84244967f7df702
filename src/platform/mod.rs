//! Platform abstraction layer
//!
//! Browser implementations of the session's host traits:
//! - Frame scheduling (`requestAnimationFrame`)
//! - Restart button visibility

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{ButtonRestart, FrameScheduler};
