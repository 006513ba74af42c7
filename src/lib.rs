//! Starfield Runner core crate.
//!
//! A banner-height canvas game: stars scroll past, the player steers a ship
//! with arrow keys or WASD and collects coins for points. The first click
//! starts a run, the next click resets it.
//!
//! The simulation in [`game`] is independent of the browser: it draws
//! through [`render::Surface`] and reports through [`render::Hud`], with the
//! frame timestamp passed in. The wasm host wires those to a canvas and the
//! page DOM. [`site`] carries the page chrome around the banner.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod game;
pub mod render;
pub mod site;
mod web;

pub use config::{GameConfig, Profile};
pub use game::lifecycle::{LifecycleEvent, Phase};
pub use game::{FrameReport, GameState, Viewport};
pub use render::{Asset, Hud, Paint, Shape, Surface};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only if a logger is already installed.
    #[cfg(target_arch = "wasm32")]
    console_log::init_with_level(log::Level::Info).ok();
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Start the image-sprite game on `#gameCanvas`.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(Profile::Sprite)
}

/// Start with a named profile (`"sprite"` or `"vector"`).
#[wasm_bindgen]
pub fn start_game_with_profile(name: &str) -> Result<(), JsValue> {
    let profile = Profile::from_name(name)
        .ok_or_else(|| JsValue::from_str(&format!("unknown profile '{}'", name)))?;
    web::start(profile)
}

/// Current score, or `None` before the game has been started.
#[wasm_bindgen]
pub fn game_score() -> Option<u32> {
    web::score()
}
