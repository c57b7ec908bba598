use crate::core::Rng;
use crate::domain::config::CosmosConfig;
use crate::domain::palette::Palette;
use crate::domain::particle::{FieldContext, Particle, UpdateOutcome};
use crate::domain::viewport::ViewportFrame;
use crate::render::surface::Surface;

/// Fields at least this large update on the rayon pool
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 1024;

/// Ordered particle collection. Its size only changes through
/// [`ParticleField::initialize`], which replaces the whole batch.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Breakpoint-derived particle budget for `frame`
    pub fn target_count(frame: &ViewportFrame, config: &CosmosConfig) -> usize {
        if frame.is_dense(&config.layout) {
            config.field.wide_count
        } else {
            config.field.narrow_count
        }
    }

    /// Discard every particle and seed `count` fresh ones against `ctx.frame`,
    /// each with its own stream forked from `rng`.
    pub fn initialize(&mut self, count: usize, ctx: FieldContext<'_>, rng: &mut Rng) {
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::spawn(ctx, rng.fork()));
        }
        self.particles = particles;
    }

    /// Advance every particle one step; returns how many were recycled
    pub fn update(&mut self, ctx: FieldContext<'_>) -> u32 {
        #[cfg(feature = "parallel")]
        {
            if self.particles.len() >= PARALLEL_THRESHOLD {
                use rayon::prelude::*;
                return self
                    .particles
                    .par_iter_mut()
                    .map(|p| (p.update(ctx) == UpdateOutcome::Reset) as u32)
                    .sum();
            }
        }

        let mut resets = 0u32;
        for particle in self.particles.iter_mut() {
            if particle.update(ctx) == UpdateOutcome::Reset {
                resets += 1;
            }
        }
        resets
    }

    /// Draw in insertion order
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, palette: &Palette) {
        for particle in self.particles.iter() {
            particle.draw(surface, palette);
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable view; the slice cannot change the particle count
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}
