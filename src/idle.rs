use crate::frame::SharedConductor;
use crate::overlay;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Cancel-and-rearm timeout that moves the session to Idle.
pub struct IdleTimer {
    handle: Cell<Option<i32>>,
    deadline_ms: Rc<Cell<f64>>,
    callback: Closure<dyn FnMut()>,
}

impl IdleTimer {
    pub fn new(conductor: SharedConductor, document: web::Document) -> Self {
        let deadline_ms = Rc::new(Cell::new(0.0));
        let deadline = deadline_ms.clone();
        let callback = Closure::wrap(Box::new(move || {
            if conductor.borrow_mut().idle_elapsed(deadline.get()) {
                overlay::set_hint(&document, true);
            }
        }) as Box<dyn FnMut()>);
        Self {
            handle: Cell::new(None),
            deadline_ms,
            callback,
        }
    }

    /// Drop any pending timeout and arm a new one for `deadline_ms`.
    pub fn rearm(&self, now_ms: f64, deadline_ms: f64) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(h) = self.handle.take() {
            w.clear_timeout_with_handle(h);
        }
        self.deadline_ms.set(deadline_ms);
        let delay = (deadline_ms - now_ms).max(0.0).ceil() as i32;
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            delay,
        ) {
            Ok(h) => self.handle.set(Some(h)),
            Err(e) => log::error!("[input] idle timer: {:?}", e),
        }
    }
}
