use crate::dom;
use crate::frame::{FrameContext, FrameLoop, SharedConductor};
use crate::idle::IdleTimer;
use crate::overlay;
use conductor_core::RateUpdate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub conductor: SharedConductor,
    pub frame_ctx: Rc<RefCell<FrameContext>>,
    pub frame_loop: FrameLoop,
    pub idle: Rc<IdleTimer>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_click(&w);
    wire_resize(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let now = instant::now();
        let (response, hint) = {
            let mut conductor = w.conductor.borrow_mut();
            let response = conductor.pointer_moved(ev.client_x() as f32, ev.client_y() as f32, now);
            (response, conductor.session().hint_visible)
        };
        overlay::set_hint(&w.document, hint);
        if let RateUpdate::Updated { speed, rate } = response.rate {
            log::debug!("[input] speed={:.3} rate={:.3}", speed, rate);
        }
        if response.start_loop {
            log::info!("[frame] loop started");
            w.frame_loop.request();
        }
        w.idle.rearm(now, response.idle_deadline_ms);
    }) as Box<dyn FnMut(_)>);

    _ = w
        .document
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let conductor = w.conductor.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        conductor.borrow_mut().clicked();
    }) as Box<dyn FnMut()>);
    _ = w
        .document
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let frame_ctx = w.frame_ctx.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || match dom::viewport() {
        Ok(viewport) => frame_ctx.borrow_mut().resize(viewport),
        Err(e) => log::error!("[input] resize: {:?}", e),
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
