use crate::constants::{CONTAINER_ID, HINT_ID, HINT_TEXT, WELCOME_ID};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn set_display(document: &web::Document, id: &str, value: &str) {
    if let Some(el) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = el.style().set_property("display", value);
    }
}

/// Swap the welcome screen for the instrument stage.
pub fn enter_stage(document: &web::Document) {
    set_display(document, WELCOME_ID, "none");
    set_display(document, CONTAINER_ID, "flex");
}

/// Show or hide the idle nudge.
pub fn set_hint(document: &web::Document, visible: bool) {
    if let Some(el) = document
        .get_element_by_id(HINT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        el.set_text_content(Some(HINT_TEXT));
        _ = el
            .style()
            .set_property("opacity", if visible { "1" } else { "0" });
    }
}
