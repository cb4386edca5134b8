#![cfg(target_arch = "wasm32")]
use conductor_core::{grid_anchors, Conductor, EngineConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod idle;
mod input;
mod overlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("conductor-web starting");

    let document =
        dom::window_document().ok_or_else(|| JsValue::from_str("no window or document"))?;

    // The start button is the user gesture that unlocks audio playback.
    static STARTED: AtomicBool = AtomicBool::new(false);
    let doc = document.clone();
    dom::add_click_listener(&document, constants::START_BUTTON_ID, move || {
        if STARTED.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Err(e) = begin_session(&doc) {
            log::error!("[setup] {:?}", e);
        }
    });
    Ok(())
}

fn begin_session(document: &web::Document) -> anyhow::Result<()> {
    let audio_el = audio::create_audio(constants::AUDIO_SRC)?;
    overlay::enter_stage(document);

    let viewport = dom::viewport()?;
    let config = EngineConfig::default();
    let count = constants::INSTRUMENTS.len();
    let anchors = grid_anchors(count, viewport, &config.layout, &mut rand::thread_rng());
    let instruments = dom::build_instruments(document, &anchors)?;
    let (canvas, ctx) = dom::create_trail_canvas(document, viewport)?;

    let conductor: frame::SharedConductor = Rc::new(RefCell::new(
        Conductor::new(
            config,
            &anchors,
            viewport,
            audio::MediaAudio::new(audio_el.clone()),
        )?,
    ));
    log::info!(
        "[setup] {} instruments in {:.0}x{:.0}",
        count,
        viewport.width,
        viewport.height
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        conductor: conductor.clone(),
        surface: frame::CanvasSurface::new(canvas, ctx),
        instruments,
    }));
    let frame_loop = frame::FrameLoop::new(frame_ctx.clone());
    let idle = Rc::new(idle::IdleTimer::new(conductor.clone(), document.clone()));

    events::wire_input_handlers(events::InputWiring {
        document: document.clone(),
        conductor: conductor.clone(),
        frame_ctx,
        frame_loop,
        idle,
    });
    events::wire_global_keydown(conductor.clone(), document.clone());
    audio::arm(&audio_el, conductor);
    Ok(())
}
