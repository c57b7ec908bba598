use crate::core::{Rng, Vec2};
use crate::domain::config::FieldConfig;
use crate::domain::palette::{ColorId, Palette};
use crate::domain::viewport::ViewportFrame;
use crate::render::surface::Surface;
use crate::systems::gravity::{apply_pull, apply_swirl};
use crate::systems::seeding::polar_spawn;

/// Everything a particle reads while respawning or moving.
///
/// Borrowed from the owning field for one call; particles never hold on to it.
#[derive(Clone, Copy)]
pub struct FieldContext<'a> {
    pub frame: &'a ViewportFrame,
    pub field: &'a FieldConfig,
    pub palette: &'a Palette,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    Orbiting,
    /// Crossed the event horizon or left the viewport; already respawned
    Reset,
}

/// A single orbiting mote.
#[derive(Clone, Debug)]
pub struct Particle {
    position: Vec2,
    size: f64,
    color: ColorId,
    angular_speed: f64,
    rng: Rng,
}

impl Particle {
    /// Create a particle with its own random stream and place it on the spawn ring
    pub fn spawn(ctx: FieldContext<'_>, rng: Rng) -> Self {
        let mut particle = Particle {
            position: ctx.frame.center(),
            size: 0.0,
            color: 0,
            angular_speed: 0.0,
            rng,
        };
        particle.reset(ctx);
        particle
    }

    /// Re-randomize every mutable field: position on the ring
    /// `[spawn_inner_radius, spawn_inner_radius + max(width, height))`,
    /// then size, colour and angular speed.
    pub fn reset(&mut self, ctx: FieldContext<'_>) {
        let field = ctx.field;
        self.position = polar_spawn(
            ctx.frame.center(),
            field.spawn_inner_radius,
            ctx.frame.max_extent(),
            &mut self.rng,
        );
        self.size = self.rng.range(0.0, field.max_size);
        self.color = ctx.palette.sample(&mut self.rng);
        self.angular_speed = self.rng.range(field.min_angular_speed, field.angular_speed_span);
    }

    /// Pull towards the center, revolve by `angular_speed`, and respawn when
    /// the result is inside the horizon or off the surface.
    #[inline]
    pub fn update(&mut self, ctx: FieldContext<'_>) -> UpdateOutcome {
        let center = ctx.frame.center();
        let Some(pulled) = apply_pull(self.position, center, ctx.field) else {
            self.reset(ctx);
            return UpdateOutcome::Reset;
        };
        let next = apply_swirl(pulled, center, self.angular_speed);

        if next.distance(center) <= ctx.field.horizon_radius || !ctx.frame.contains(next) {
            self.reset(ctx);
            return UpdateOutcome::Reset;
        }
        self.position = next;
        UpdateOutcome::Orbiting
    }

    #[inline]
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, palette: &Palette) {
        surface.fill_circle(self.position, self.size, palette.color(self.color));
    }

    pub fn position(&self) -> Vec2 { self.position }

    pub fn size(&self) -> f64 { self.size }

    pub fn color(&self) -> ColorId { self.color }

    pub fn angular_speed(&self) -> f64 { self.angular_speed }

    /// Teleport without touching the other fields
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}
