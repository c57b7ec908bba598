//! Cosmos Engine - black-hole particle field for the landing page, in WASM
//!
//! Architecture:
//! - core/       - Vec2, colours, RNG
//! - domain/     - Viewport frame, particles, field, config
//! - systems/    - Gravity/swirl and spawn placement
//! - render/     - Surface trait, canvas and pixel-buffer backends
//! - simulation/ - CosmosCore orchestration + `Cosmos` facade
//! - driver/     - Animation loop (requestAnimationFrame in the browser)
//! - effects/    - Decrypt heading, tilt, scroll reveal, sign-up form
//! - api/        - Public API

pub mod core;
pub mod domain;
pub mod systems;
pub mod render;
pub mod simulation;
pub mod driver;
pub mod effects;
pub mod api;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        if console_log::init_with_level(log::Level::Info).is_err() {
            // already installed by an earlier init()
            return;
        }
    }

    log::info!("Cosmos engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::{DecryptEffect, RevealController, SignupController, TiltEffect};
pub use domain::{CosmosConfig, ParticleField, ViewportFrame};
pub use render::Surface;
pub use simulation::{Cosmos, CosmosCore, PerfStats};

#[cfg(target_arch = "wasm32")]
pub use driver::CosmosApp;
