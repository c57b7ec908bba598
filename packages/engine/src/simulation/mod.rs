//! Cosmos - the black hole simulation object
//!
//! Owns the viewport frame and the particle field. `initialize`,
//! `on_resize` and `tick` are the only mutators of simulation state, so a
//! tick can never observe a frame and a particle batch from different
//! generations.
//!
//! - init/   - construction and reseeding
//! - step/   - the per-refresh tick
//! - perf/   - optional timing
//! - facade  - wasm-bindgen handle

use crate::core::Rng;
use crate::domain::config::CosmosConfig;
use crate::domain::field::ParticleField;
use crate::domain::palette::Palette;
use crate::domain::viewport::ViewportFrame;
use crate::render::surface::Surface;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/tick.rs"]
mod tick;
mod facade;

pub use facade::Cosmos;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

pub struct CosmosCore {
    config: CosmosConfig,
    palette: Palette,
    frame: ViewportFrame,
    field: ParticleField,
    rng: Rng,

    // State
    ticks: u64,
    generation: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl CosmosCore {
    /// Create a field for a surface of the given size with default tuning
    pub fn new(width: f64, height: f64) -> Self {
        init::create_core(width, height, CosmosConfig::default())
    }

    /// Refuses configs that `CosmosConfig::validate` rejects
    pub fn with_config(width: f64, height: f64, config: CosmosConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_core(width, height, config))
    }

    pub fn from_config_json(width: f64, height: f64, json: &str) -> Result<Self, String> {
        let config = CosmosConfig::from_json(json)?;
        Ok(init::create_core(width, height, config))
    }

    /// Discard all particles and seed a fresh batch against the current frame
    pub fn initialize(&mut self) {
        init::initialize(self);
    }

    /// Rebuild the frame for the new surface size, then reinitialize the field
    pub fn on_resize(&mut self, width: f64, height: f64) {
        init::on_resize(self, width, height);
    }

    /// One display refresh: backdrop, then update and draw every particle
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        tick::tick(self, surface);
    }

    pub fn frame(&self) -> &ViewportFrame { &self.frame }

    pub fn field(&self) -> &ParticleField { &self.field }

    /// Mutable particle access for tooling; the count stays fixed
    pub fn field_mut(&mut self) -> &mut ParticleField { &mut self.field }

    pub fn config(&self) -> &CosmosConfig { &self.config }

    pub fn palette(&self) -> &Palette { &self.palette }

    pub fn particle_count(&self) -> usize { self.field.len() }

    /// Particle budget the current frame calls for
    pub fn target_count(&self) -> usize {
        ParticleField::target_count(&self.frame, &self.config)
    }

    /// Ticks run since construction
    pub fn ticks(&self) -> u64 { self.ticks }

    /// Bumped every time the field is rebuilt
    pub fn generation(&self) -> u64 { self.generation }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Trail overlay opacity; higher values mean shorter trails
    pub fn set_trail_alpha(&mut self, alpha: f32) {
        settings::set_trail_alpha(self, alpha);
    }

    /// Reseed the random source and rebuild the field
    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
