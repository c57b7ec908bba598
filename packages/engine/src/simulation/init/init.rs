use crate::core::Rng;
use crate::domain::config::CosmosConfig;
use crate::domain::field::ParticleField;
use crate::domain::palette::Palette;
use crate::domain::particle::FieldContext;
use crate::domain::viewport::ViewportFrame;

use super::perf_stats::PerfStats;
use super::CosmosCore;

pub(super) fn create_core(width: f64, height: f64, config: CosmosConfig) -> CosmosCore {
    let rng = match config.field.seed {
        Some(seed) => Rng::new(seed),
        None => Rng::from_entropy(),
    };

    let mut core = CosmosCore {
        palette: Palette::from_entries(&config.render.palette),
        frame: ViewportFrame::recompute_with(width, height, &config.layout),
        field: ParticleField::new(),
        rng,
        config,
        ticks: 0,
        generation: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    initialize(&mut core);
    core
}

pub(super) fn initialize(core: &mut CosmosCore) {
    let count = ParticleField::target_count(&core.frame, &core.config);
    let ctx = FieldContext {
        frame: &core.frame,
        field: &core.config.field,
        palette: &core.palette,
    };
    core.field.initialize(count, ctx, &mut core.rng);
    core.generation += 1;

    log::debug!(
        "particle field generation {}: {} particles around ({:.1}, {:.1})",
        core.generation,
        count,
        core.frame.center_x(),
        core.frame.center_y()
    );
}

pub(super) fn on_resize(core: &mut CosmosCore, width: f64, height: f64) {
    core.frame = ViewportFrame::recompute_with(width, height, &core.config.layout);
    log::debug!("viewport resized to {}x{}", core.frame.width(), core.frame.height());
    initialize(core);
}
