//! Rendering: the [`Surface`] seam plus the surfaces the engine ships with.
//!
//! - `scene`     - backdrop (trail overlay, horizon, accretion glow)
//! - `pixels`    - software rasterizer, shared with JS as an `ImageData` buffer
//! - `recording` - command log for tests and tooling
//! - `canvas`    - `CanvasRenderingContext2d` (wasm32 only)

pub mod pixels;
pub mod recording;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use pixels::PixelSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{RadialGradient, Surface};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
