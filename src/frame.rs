use crate::audio::MediaAudio;
use crate::dom;
use crate::input::css_rgba;
use conductor_core::{Conductor, FrameOutcome, TrailSurface, Viewport};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub type SharedConductor = Rc<RefCell<Conductor<MediaAudio>>>;

/// The trail overlay canvas.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl TrailSurface for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) {
        dom::sync_canvas_size(&self.canvas, viewport);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_disk(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        #[allow(deprecated)]
        self.ctx
            .set_fill_style(&JsValue::from_str(&css_rgba(rgb, alpha)));
        self.ctx.fill();
    }
}

pub struct FrameContext {
    pub conductor: SharedConductor,
    pub surface: CanvasSurface,
    pub instruments: Vec<web::HtmlElement>,
}

impl FrameContext {
    pub fn frame(&mut self) -> FrameOutcome {
        let now = instant::now();
        let mut conductor = self.conductor.borrow_mut();
        let outcome = conductor.frame(now, &mut self.surface);
        if outcome == FrameOutcome::Continue {
            for (el, t) in self.instruments.iter().zip(conductor.transforms()) {
                let style = el.style();
                _ = style.set_property("transform", &t.to_string());
                _ = style.set_property("transition", &t.transition_css());
            }
        }
        outcome
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.conductor
            .borrow_mut()
            .resize(viewport, &mut self.surface);
    }
}

/// requestAnimationFrame driver. One closure for the lifetime of the page;
/// it reschedules itself until a frame reports [`FrameOutcome::Stop`], and
/// [`FrameLoop::request`] picks it up again after a stop.
#[derive(Clone)]
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    scheduled: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn new(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let frame_loop = Self {
            tick: Rc::new(RefCell::new(None)),
            scheduled: Rc::new(Cell::new(false)),
        };
        let again = frame_loop.clone();
        *frame_loop.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            again.scheduled.set(false);
            if frame_ctx.borrow_mut().frame() == FrameOutcome::Continue {
                again.request();
            }
        }) as Box<dyn FnMut()>));
        frame_loop
    }

    pub fn request(&self) {
        if self.scheduled.get() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = self.tick.borrow().as_ref() {
            if w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
                self.scheduled.set(true);
            }
        }
    }
}
