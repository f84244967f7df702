//! Browser host bindings

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, Window};

use crate::session::{RestartControl, Scheduler};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame`-backed scheduler
///
/// Clones share one frame callback, so the host can install the callback
/// after the scheduler has been moved into its session.
#[derive(Clone)]
pub struct FrameScheduler {
    window: Window,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    /// Install the function invoked for every requested frame
    pub fn set_callback(&self, callback: impl FnMut(f64) + 'static) {
        *self.callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(callback));
    }
}

impl Scheduler for FrameScheduler {
    type Handle = i32;

    fn request_tick(&mut self) -> i32 {
        let slot = self.callback.borrow();
        let Some(callback) = slot.as_ref() else {
            log::warn!("Frame requested before a callback was installed");
            return 0;
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => id,
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                0
            }
        }
    }

    fn cancel_tick(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }
}

/// Replay button shown on game over
pub struct ButtonRestart {
    button: HtmlElement,
}

impl ButtonRestart {
    pub fn new(button: HtmlElement) -> Self {
        Self { button }
    }
}

impl RestartControl for ButtonRestart {
    fn set_visible(&mut self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(e) = self.button.style().set_property("display", display) {
            log::warn!("Failed to toggle restart button: {:?}", e);
        }
    }
}
