//! JavaScript-facing surface.

pub mod wasm;

pub use wasm::{DecryptEffect, RevealController, SignupController, TiltEffect};
