use wasm_bindgen::prelude::*;

use crate::render::pixels::PixelSurface;
use crate::render::surface::Surface;

use super::perf_stats::PerfStats;
use super::CosmosCore;

/// Headless handle: the simulation renders into a pixel buffer that JS
/// blits with `putImageData`. Use `CosmosApp` to let the engine drive a
/// canvas directly.
#[wasm_bindgen]
pub struct Cosmos {
    core: CosmosCore,
    pixels: PixelSurface,
}

#[wasm_bindgen]
impl Cosmos {
    /// Create a field for a surface of the given pixel size
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_core(CosmosCore::new(width as f64, height as f64))
    }

    /// Same as the constructor, tuned by a JSON `CosmosConfig`
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(width: u32, height: u32, config_json: String) -> Result<Cosmos, JsValue> {
        let core = CosmosCore::from_config_json(width as f64, height as f64, &config_json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::from_core(core))
    }

    /// Window resize: new frame, fresh particle batch, cleared buffer
    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.on_resize(width as f64, height as f64);
        self.pixels.resize(self.core.frame().width() as u32, self.core.frame().height() as u32);
    }

    /// Advance and render one frame into the pixel buffer
    pub fn tick(&mut self) {
        self.core.tick(&mut self.pixels);
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.pixels.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.pixels.height() }

    #[wasm_bindgen(getter)]
    pub fn center_x(&self) -> f64 { self.core.frame().center_x() }

    #[wasm_bindgen(getter)]
    pub fn center_y(&self) -> f64 { self.core.frame().center_y() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.ticks() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    /// Get pointer to the RGBA pixel buffer (for JS `ImageData`)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.pixels.pixels_ptr()
    }

    pub fn pixels_len_bytes(&self) -> usize {
        self.pixels.pixels_len_bytes()
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_trail_alpha(&mut self, alpha: f32) {
        self.core.set_trail_alpha(alpha);
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }
}

impl Cosmos {
    fn from_core(core: CosmosCore) -> Self {
        let pixels = PixelSurface::new(core.frame().width() as u32, core.frame().height() as u32);
        Self { core, pixels }
    }

    pub fn core(&self) -> &CosmosCore {
        &self.core
    }

    pub fn pixels(&self) -> &[u32] {
        self.pixels.pixels()
    }
}
