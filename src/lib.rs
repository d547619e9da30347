//! Bug Fix Simulator core crate.
//!
//! The player is shown a buggy snippet and must type the fixed version before
//! a countdown runs out. This crate holds the level catalogue, the scoring and
//! progress model persisted in `localStorage`, the per-level session state
//! machine and the screen flow. The host page owns the DOM and drives
//! everything through [`BugFixGame`].
//!
//! All logic except `bindings`, `timer` and `logging` is plain Rust and is
//! tested natively with [`storage::MemoryStorage`].

use wasm_bindgen::prelude::*;

mod bindings;
pub mod config;
pub mod error;
pub mod game;
pub mod levels;
pub mod logging;
pub mod progress;
pub mod scoreboard;
pub mod session;
pub mod storage;
pub mod timer;

pub use bindings::BugFixGame;
pub use config::GameConfig;
pub use error::GameError;
pub use game::{Feedback, GameContext, View};
pub use levels::{LevelDef, Track};
pub use progress::TrackProgress;
pub use session::{normalize_code, validate_code};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

/// Create the game with an optional partial JSON config.
#[wasm_bindgen]
pub fn start_game(config_json: Option<String>) -> Result<BugFixGame, JsValue> {
    BugFixGame::new(config_json)
}
