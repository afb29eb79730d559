// Frame scheduler backed by window.requestAnimationFrame

use crate::scheduler::{FrameHandle, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

// Slot holding the JS callback that drives the loop. It is filled after the
// loop exists, since the callback needs a handle back to it.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct RafScheduler {
    window: Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: Window, callback: FrameCallback) -> Self {
        RafScheduler { window, callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule_next_frame(&mut self) -> Option<FrameHandle> {
        let slot = self.callback.borrow();
        let callback = slot.as_ref()?;
        let id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())
            .ok()?;
        Some(FrameHandle(id))
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.window.cancel_animation_frame(handle.0).ok();
    }
}
