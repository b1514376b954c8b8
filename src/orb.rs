use crate::canvas::CanvasSurface;
use crate::core::{Mood, OrbConfig, Surface};
use crate::dom;
use crate::frame::{self, SharedOrb};
use wasm_bindgen::prelude::*;
use web_sys as web;

fn to_js(e: anyhow::Error) -> JsValue {
    log::error!("[orb] {:#}", e);
    js_sys::Error::new(&format!("{e:#}")).into()
}

fn parse_mood(mood: &str) -> Result<Mood, JsValue> {
    mood.parse::<Mood>().map_err(|e| to_js(e.into()))
}

/// An animated orb bound to a canvas element.
///
/// Animation starts on construction. Changing mood or scale restarts the
/// animation with fresh particles; calling `free()` or `unmount()` cancels
/// the pending frame.
#[wasm_bindgen]
pub struct AiOrb {
    orb: SharedOrb,
    // canvas created by `mount`, removed again on `unmount`
    owned_canvas: Option<web::HtmlCanvasElement>,
}

#[wasm_bindgen]
impl AiOrb {
    /// Animate the existing `<canvas id=canvas_id>`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, mood: &str, scale: Option<f32>) -> Result<AiOrb, JsValue> {
        let canvas = dom::canvas_by_id(canvas_id).map_err(to_js)?;
        Self::attach(canvas, mood, scale, false)
    }

    /// Create a canvas inside `#container_id` and animate it.
    pub fn mount(container_id: &str, mood: &str, scale: Option<f32>) -> Result<AiOrb, JsValue> {
        let canvas = dom::append_canvas(container_id).map_err(to_js)?;
        Self::attach(canvas, mood, scale, true)
    }

    #[wasm_bindgen(js_name = setMood)]
    pub fn set_mood(&self, mood: &str) -> Result<bool, JsValue> {
        let mood = parse_mood(mood)?;
        Ok(self.orb.borrow_mut().set_mood(mood))
    }

    /// Derive the mood from page activity: `busy` (typing, analysing) shows
    /// thinking, otherwise `listening` (recording, input focus) shows
    /// listening, otherwise idle.
    #[wasm_bindgen(js_name = setActivity)]
    pub fn set_activity(&self, busy: bool, listening: bool) -> bool {
        self.orb.borrow_mut().set_activity(busy, listening)
    }

    #[wasm_bindgen(js_name = setScale)]
    pub fn set_scale(&self, scale: f32) -> bool {
        self.orb.borrow_mut().set_scale(scale)
    }

    pub fn start(&self) {
        self.orb.borrow_mut().start();
    }

    pub fn stop(&self) {
        self.orb.borrow_mut().stop();
    }

    /// Stop animating and remove the canvas if `mount` created it.
    pub fn unmount(self) {
        self.orb.borrow_mut().stop();
        if let Some(canvas) = &self.owned_canvas {
            canvas.remove();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mood(&self) -> String {
        self.orb.borrow().config().mood.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f32 {
        self.orb.borrow().config().scale
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.orb.borrow().is_running()
    }

    /// Current backing-store size in pixels as `[width, height]`.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> Vec<u32> {
        let (w, h) = self.orb.borrow().surface().size();
        vec![w, h]
    }
}

impl AiOrb {
    fn attach(
        canvas: web::HtmlCanvasElement,
        mood: &str,
        scale: Option<f32>,
        owned: bool,
    ) -> Result<AiOrb, JsValue> {
        let mood = parse_mood(mood)?;
        let config = OrbConfig::default()
            .with_mood(mood)
            .with_scale(scale.unwrap_or(crate::constants::DEFAULT_SCALE));
        let surface = CanvasSurface::new(canvas.clone()).map_err(to_js)?;
        let orb = frame::start_loop(config, surface);
        log::info!("[orb] attached mood={} scale={}", config.mood, config.scale);
        Ok(AiOrb {
            orb,
            owned_canvas: owned.then_some(canvas),
        })
    }
}
