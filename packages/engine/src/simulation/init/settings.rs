use crate::core::Rng;

use super::perf_stats::PerfStats;
use super::CosmosCore;

pub(super) fn enable_perf_metrics(core: &mut CosmosCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &CosmosCore) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn set_trail_alpha(core: &mut CosmosCore, alpha: f32) {
    if !alpha.is_finite() {
        return;
    }
    core.config.render.trail = core.config.render.trail.with_alpha(alpha);
}

pub(super) fn set_seed(core: &mut CosmosCore, seed: u32) {
    core.config.field.seed = Some(seed);
    core.rng = Rng::new(seed);
    super::init::initialize(core);
}
