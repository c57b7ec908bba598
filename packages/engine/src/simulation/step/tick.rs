use crate::domain::particle::FieldContext;
use crate::render::scene::paint_backdrop;
use crate::render::surface::Surface;

use super::{CosmosCore, PerfTimer};

pub(super) fn tick<S: Surface + ?Sized>(core: &mut CosmosCore, surface: &mut S) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
    }
    let tick_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Translucent overlay instead of a clear: the previous frame fades into a trail
    if perf_on {
        let t0 = PerfTimer::start();
        paint_backdrop(surface, &core.frame, &core.config.render);
        core.perf_stats.backdrop_ms = t0.elapsed_ms();
    } else {
        paint_backdrop(surface, &core.frame, &core.config.render);
    }

    // Particles never interact, so updating the whole batch before drawing it
    // renders exactly what interleaved update/draw would.
    let ctx = FieldContext {
        frame: &core.frame,
        field: &core.config.field,
        palette: &core.palette,
    };
    if perf_on {
        let t0 = PerfTimer::start();
        let resets = core.field.update(ctx);
        core.perf_stats.update_ms = t0.elapsed_ms();
        core.perf_stats.particles_reset = resets;

        let t0 = PerfTimer::start();
        core.field.draw(surface, &core.palette);
        core.perf_stats.draw_ms = t0.elapsed_ms();
    } else {
        core.field.update(ctx);
        core.field.draw(surface, &core.palette);
    }

    core.ticks += 1;

    if perf_on {
        core.perf_stats.particle_count = core.field.len() as u32;
        core.perf_stats.generation = core.generation as u32;
        if let Some(start) = tick_start {
            core.perf_stats.tick_ms = start.elapsed_ms();
        }
    }
}
