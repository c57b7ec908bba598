use wasm_bindgen::prelude::*;

/// Timing snapshot of the last tick
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) backdrop_ms: f64,
    pub(super) update_ms: f64,
    pub(super) draw_ms: f64,
    pub(super) particles_reset: u32,
    pub(super) particle_count: u32,
    pub(super) generation: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn backdrop_ms(&self) -> f64 { self.backdrop_ms }
    #[wasm_bindgen(getter)]
    pub fn update_ms(&self) -> f64 { self.update_ms }
    #[wasm_bindgen(getter)]
    pub fn draw_ms(&self) -> f64 { self.draw_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_reset(&self) -> u32 { self.particles_reset }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u32 { self.generation }
}
