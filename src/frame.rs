use crate::canvas::CanvasSurface;
use crate::core::{FrameRequest, FrameScheduler, OrbConfig, OrbRenderer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedOrb = Rc<RefCell<OrbRenderer<CanvasSurface, RafScheduler>>>;

/// [`FrameScheduler`] on top of `requestAnimationFrame`.
#[derive(Default)]
pub struct RafScheduler {
    tick: Option<Closure<dyn FnMut()>>,
}

impl RafScheduler {
    fn bind(&mut self, tick: impl FnMut() + 'static) {
        self.tick = Some(Closure::wrap(Box::new(tick) as Box<dyn FnMut()>));
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule_next_frame(&mut self) -> Option<FrameRequest> {
        let window = web::window()?;
        let tick = self.tick.as_ref()?;
        window
            .request_animation_frame(tick.as_ref().unchecked_ref())
            .ok()
            .map(FrameRequest)
    }

    fn cancel(&mut self, request: FrameRequest) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(request.0);
        }
    }
}

/// Build a renderer on `surface` and start its RAF loop.
///
/// The RAF closure only holds a weak reference, so dropping the returned
/// handle tears the loop down (the renderer cancels its pending frame on
/// drop).
pub fn start_loop(config: OrbConfig, surface: CanvasSurface) -> SharedOrb {
    let orb: SharedOrb = Rc::new(RefCell::new(OrbRenderer::new(
        config,
        surface,
        RafScheduler::default(),
    )));
    let weak = Rc::downgrade(&orb);
    orb.borrow_mut().scheduler_mut().bind(move || {
        if let Some(orb) = weak.upgrade() {
            if let Ok(mut renderer) = orb.try_borrow_mut() {
                renderer.tick();
            }
        }
    });
    orb.borrow_mut().start();
    orb
}
