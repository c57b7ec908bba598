use super::*;
use crate::core::{Rgba, Vec2};
use crate::render::recording::{DrawCommand, RecordingSurface};

fn seeded(width: f64, height: f64, seed: u32) -> CosmosCore {
    let mut config = CosmosConfig::default();
    config.field.seed = Some(seed);
    CosmosCore::with_config(width, height, config).unwrap()
}

#[test]
fn wide_viewport_seeds_full_ring() {
    let core = seeded(1920.0, 1080.0, 1);
    let center = core.frame().center();
    assert_eq!(center, Vec2::new(1440.0, 540.0));
    assert_eq!(core.particle_count(), 1500);

    for p in core.field().particles() {
        let d = p.position().distance(center);
        assert!(d >= 100.0 - 1e-9 && d <= 100.0 + 1920.0 + 1e-9, "distance {}", d);
    }
}

#[test]
fn config_with_horizon_past_spawn_ring_is_refused() {
    let mut config = CosmosConfig::default();
    config.field.horizon_radius = 500.0;
    assert!(config.validate().is_err());
    assert!(CosmosCore::with_config(1920.0, 1080.0, config).is_err());
}

#[test]
fn narrow_viewport_seeds_small_field() {
    let core = seeded(500.0, 800.0, 2);
    assert_eq!(core.frame().center_x(), 250.0);
    assert_eq!(core.particle_count(), 600);
    assert_eq!(core.generation(), 1);
}

#[test]
fn tick_keeps_every_particle_outside_horizon() {
    let mut core = seeded(1920.0, 1080.0, 3);
    let mut surface = RecordingSurface::new();
    for _ in 0..120 {
        core.tick(&mut surface);
        let center = core.frame().center();
        for p in core.field().particles() {
            assert!(p.position().distance(center) > 50.0);
            assert!((0.0..1.5).contains(&p.size()));
            assert!((0.005..0.015).contains(&p.angular_speed()));
        }
    }
    assert_eq!(core.ticks(), 120);
}

#[test]
fn tick_draws_backdrop_then_particles_in_order() {
    let mut core = seeded(1280.0, 720.0, 4);
    let mut surface = RecordingSurface::new();
    core.tick(&mut surface);

    let commands = surface.commands();
    assert_eq!(commands.len(), 3 + core.particle_count());
    assert!(matches!(commands[0], DrawCommand::Rect { color, .. } if color == Rgba::rgba(3, 3, 4, 0.2)));
    assert!(matches!(commands[1], DrawCommand::Circle { radius, .. } if radius == 60.0));
    assert!(matches!(commands[2], DrawCommand::Gradient(_)));

    for (drawn, particle) in surface.circles().skip(1).zip(core.field().particles()) {
        assert_eq!(drawn.0, particle.position());
        assert_eq!(drawn.1, particle.size());
        assert_eq!(drawn.2, core.palette().color(particle.color()));
    }
}

#[test]
fn resize_rebuilds_with_new_budget() {
    let mut core = seeded(1920.0, 1080.0, 5);
    assert_eq!(core.particle_count(), 1500);

    core.on_resize(600.0, 900.0);
    assert_eq!(core.particle_count(), 600);
    assert_eq!(core.generation(), 2);
    let center = core.frame().center();
    assert_eq!(center, Vec2::new(300.0, 450.0));
    for p in core.field().particles() {
        let d = p.position().distance(center);
        assert!(d >= 100.0 - 1e-9 && d <= 100.0 + 900.0 + 1e-9);
    }

    core.on_resize(1366.0, 768.0);
    assert_eq!(core.particle_count(), 1500);
    assert_eq!(core.frame().center_x(), 1366.0 * 0.75);
}

#[test]
fn zero_sized_surface_degrades_without_panicking() {
    let mut core = seeded(0.0, 0.0, 6);
    let mut surface = RecordingSurface::new();
    core.tick(&mut surface);
    core.tick(&mut surface);
    assert_eq!(core.particle_count(), 600);
    for p in core.field().particles() {
        assert!(p.position().x.is_finite() && p.position().y.is_finite());
    }
}

#[test]
fn particle_exactly_on_center_is_recycled() {
    let mut core = seeded(800.0, 600.0, 7);
    let center = core.frame().center();
    core.field_mut().particles_mut()[0].set_position(center);

    let mut surface = RecordingSurface::new();
    core.tick(&mut surface);

    let p = &core.field().particles()[0];
    assert!(p.position().distance(center) >= 100.0 - 1e-9);
}

#[test]
fn same_seed_same_field() {
    let mut a = seeded(1024.0, 768.0, 99);
    let mut b = seeded(1024.0, 768.0, 99);
    let mut sa = RecordingSurface::new();
    let mut sb = RecordingSurface::new();
    for _ in 0..10 {
        a.tick(&mut sa);
        b.tick(&mut sb);
    }
    assert_eq!(sa.commands(), sb.commands());
}

#[test]
fn set_seed_rebuilds_deterministically() {
    let mut a = seeded(1024.0, 768.0, 1);
    let mut b = seeded(1024.0, 768.0, 2);
    a.set_seed(42);
    b.set_seed(42);
    let pa: Vec<Vec2> = a.field().particles().iter().map(|p| p.position()).collect();
    let pb: Vec<Vec2> = b.field().particles().iter().map(|p| p.position()).collect();
    assert_eq!(pa, pb);
    assert_eq!(a.config().field.seed, Some(42));
}

#[test]
fn trail_alpha_setter_changes_overlay() {
    let mut core = seeded(320.0, 240.0, 8);
    core.set_trail_alpha(0.5);
    let mut surface = RecordingSurface::new();
    core.tick(&mut surface);
    assert!(matches!(surface.commands()[0], DrawCommand::Rect { color, .. } if color.a == 0.5));
}

#[test]
fn perf_stats_only_fill_when_enabled() {
    let mut core = seeded(1920.0, 1080.0, 9);
    let mut surface = RecordingSurface::new();
    core.tick(&mut surface);
    assert_eq!(core.get_perf_stats().particle_count(), 0);

    core.enable_perf_metrics(true);
    core.tick(&mut surface);
    let stats = core.get_perf_stats();
    assert_eq!(stats.particle_count(), 1500);
    assert_eq!(stats.generation(), 1);
    assert!(stats.tick_ms() >= 0.0);
    assert!(stats.particles_reset() <= 1500);
}
