//! Procedural "AI orb" visualization.
//!
//! [`core`] holds the host-independent particle field and its lifecycle and
//! builds on any target. The canvas/`requestAnimationFrame` front-end and the
//! exported `AiOrb` class are only compiled for `wasm32`.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod orb;

#[cfg(target_arch = "wasm32")]
pub use orb::AiOrb;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ai-orb starting");
}
