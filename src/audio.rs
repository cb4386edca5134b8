use crate::frame::SharedConductor;
use conductor_core::{AudioError, AudioOutput};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The page's single `<audio>` element. It loops; only a stop key pauses it.
pub struct MediaAudio {
    el: web::HtmlAudioElement,
}

impl MediaAudio {
    pub fn new(el: web::HtmlAudioElement) -> Self {
        Self { el }
    }
}

pub fn create_audio(src: &str) -> anyhow::Result<web::HtmlAudioElement> {
    let el = web::HtmlAudioElement::new_with_src(src).map_err(crate::dom::js_err)?;
    el.set_loop(true);
    Ok(el)
}

// Await a play() promise, logging rejection (autoplay policy, decode error).
async fn await_play(promise: js_sys::Promise, label: &'static str) -> bool {
    match JsFuture::from(promise).await {
        Ok(_) => true,
        Err(e) => {
            log::error!("[audio] {} play failed: {:?}", label, e);
            false
        }
    }
}

impl AudioOutput for MediaAudio {
    fn set_volume(&mut self, volume: f32) {
        self.el.set_volume(volume.clamp(0.0, 1.0) as f64);
    }

    fn set_playback_rate(&mut self, rate: f32) {
        self.el.set_playback_rate(rate as f64);
    }

    fn is_paused(&self) -> bool {
        self.el.paused()
    }

    fn request_play(&mut self) -> Result<(), AudioError> {
        let promise = self
            .el
            .play()
            .map_err(|e| AudioError::Rejected(format!("{:?}", e)))?;
        spawn_local(async move {
            await_play(promise, "gesture").await;
        });
        Ok(())
    }

    fn pause(&mut self) {
        _ = self.el.pause();
    }
}

/// First play after the start click. Once granted, settle to the session's
/// (silent) energy until the pointer moves.
pub fn arm(el: &web::HtmlAudioElement, conductor: SharedConductor) {
    let promise = match el.play() {
        Ok(p) => p,
        Err(e) => {
            log::error!("[audio] initial play threw: {:?}", e);
            return;
        }
    };
    spawn_local(async move {
        if await_play(promise, "initial").await {
            conductor.borrow_mut().audio_ready();
            log::info!("[audio] ready");
        }
    });
}
