use crate::constants::{
    CONTAINER_ID, INSTRUMENTS, INSTRUMENT_CLASS, INSTRUMENT_IMAGE_EXT, TRAIL_CANVAS_Z_INDEX,
};
use crate::input::px;
use conductor_core::Viewport;
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn viewport() -> anyhow::Result<Viewport> {
    let w = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let width = w.inner_width().map_err(js_err)?.as_f64().unwrap_or(0.0);
    let height = w.inner_height().map_err(js_err)?.as_f64().unwrap_or(0.0);
    Ok(Viewport::new(width as f32, height as f32))
}

fn set_styles(el: &web::HtmlElement, styles: &[(&str, &str)]) {
    let style = el.style();
    for (k, v) in styles {
        _ = style.set_property(k, v);
    }
}

/// Full-viewport canvas for the pointer trail; ignores pointer events.
pub fn create_trail_canvas(
    document: &web::Document,
    viewport: Viewport,
) -> anyhow::Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    set_styles(
        &canvas,
        &[
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("pointer-events", "none"),
            ("z-index", TRAIL_CANVAS_Z_INDEX),
        ],
    );
    sync_canvas_size(&canvas, viewport);

    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("missing <body>"))?;
    body.append_child(&canvas).map_err(js_err)?;

    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok((canvas, ctx))
}

pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width.max(1.0) as u32);
    canvas.set_height(viewport.height.max(1.0) as u32);
}

/// Replace the container's children with one element per instrument,
/// placed at its anchor.
pub fn build_instruments(
    document: &web::Document,
    anchors: &[Vec2],
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let container = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTAINER_ID))?;
    container.set_inner_html("");

    let mut out = Vec::with_capacity(anchors.len());
    for (name, anchor) in INSTRUMENTS.iter().zip(anchors) {
        let div: web::HtmlElement = document
            .create_element("div")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        div.set_class_name(INSTRUMENT_CLASS);
        let (left, top) = (px(anchor.x), px(anchor.y));
        set_styles(&div, &[("left", left.as_str()), ("top", top.as_str())]);

        let img: web::HtmlImageElement = document
            .create_element("img")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        img.set_src(&format!("{name}.{INSTRUMENT_IMAGE_EXT}"));
        img.set_alt(name);

        div.append_child(&img).map_err(js_err)?;
        container.append_child(&div).map_err(js_err)?;
        out.push(div);
    }
    log::info!("[setup] placed {} instruments", out.len());
    Ok(out)
}
