use crate::frame::SharedConductor;
use crate::input::{action_for_key, KeyAction};
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    conductor: &SharedConductor,
    document: &web::Document,
) {
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    let hint = {
        let mut c = conductor.borrow_mut();
        match action {
            KeyAction::Stop => c.stop(),
            KeyAction::Toggle => c.toggle(),
        }
        log::info!("[keys] {:?} running={}", action, c.is_running());
        c.session().hint_visible
    };
    overlay::set_hint(document, hint);
    if action == KeyAction::Toggle {
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(conductor: SharedConductor, document: web::Document) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &conductor, &document);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
