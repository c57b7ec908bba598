//! Frame driving: the host-agnostic [`AnimationLoop`] plus the
//! `requestAnimationFrame` binding used in the browser.

mod animation_loop;
#[cfg(target_arch = "wasm32")]
mod raf;

pub use animation_loop::{AnimationLoop, FrameOutcome, LoopState};
#[cfg(target_arch = "wasm32")]
pub use raf::CosmosApp;
