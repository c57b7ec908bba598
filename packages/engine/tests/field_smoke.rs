use cosmos_engine::domain::config::CosmosConfig;
use cosmos_engine::driver::{AnimationLoop, FrameOutcome};
use cosmos_engine::render::{PixelSurface, RecordingSurface};
use cosmos_engine::{Cosmos, CosmosCore};

fn seeded_config(seed: u32) -> CosmosConfig {
    let mut config = CosmosConfig::default();
    config.field.seed = Some(seed);
    config
}

#[test]
fn headless_cosmos_paints_horizon_and_glow() {
    let mut cosmos = Cosmos::new(800, 600);
    assert_eq!(cosmos.width(), 800);
    assert_eq!(cosmos.height(), 600);
    assert_eq!(cosmos.center_x(), 400.0);
    // wider than the 768 density breakpoint
    assert_eq!(cosmos.particle_count(), 1500);
    assert_eq!(cosmos.pixels_len_bytes(), 800 * 600 * 4);

    for _ in 0..5 {
        cosmos.tick();
    }

    let pixels = cosmos.pixels();
    let at = |x: usize, y: usize| pixels[y * 800 + x];
    // glow tints the ring between the horizon and the glow edge blue
    let ring = at(400 + 90, 300);
    assert!((ring >> 16) & 0xFF > 0, "ring pixel {:08x}", ring);
    assert!(pixels.iter().all(|p| p >> 24 == 0xFF));
}

#[test]
fn invalid_config_struct_is_refused() {
    let mut config = seeded_config(3);
    config.field.horizon_radius = 500.0;
    assert!(CosmosCore::with_config(1920.0, 1080.0, config).is_err());
}

#[test]
fn resize_follows_breakpoints() {
    let mut cosmos = Cosmos::new(1920, 1080);
    assert_eq!(cosmos.center_x(), 1440.0);
    assert_eq!(cosmos.particle_count(), 1500);

    cosmos.resize(390, 844);
    assert_eq!(cosmos.width(), 390);
    assert_eq!(cosmos.center_x(), 195.0);
    assert_eq!(cosmos.particle_count(), 600);
    assert_eq!(cosmos.generation(), 2);
    assert_eq!(cosmos.pixels().len(), 390 * 844);
}

#[test]
fn config_json_round_trips_through_facade() {
    let json = r#"{"field":{"wide_count":200,"narrow_count":50,"seed":7}}"#;
    let cosmos = Cosmos::with_config(1280, 720, json.to_string()).unwrap_or_else(|_| panic!("config should parse"));
    assert_eq!(cosmos.particle_count(), 200);
    let echoed = CosmosConfig::from_json(&cosmos.config_json()).unwrap();
    assert_eq!(echoed.field.seed, Some(7));
    assert_eq!(echoed.field.horizon_radius, 50.0);
}

#[test]
fn invalid_config_is_rejected() {
    assert!(CosmosCore::from_config_json(100.0, 100.0, r#"{"field":{"horizon_radius":500}}"#).is_err());
    assert!(CosmosCore::from_config_json(100.0, 100.0, "not json").is_err());
}

#[test]
fn animation_loop_only_ticks_while_running() {
    let core = CosmosCore::with_config(1024.0, 768.0, seeded_config(11)).unwrap();
    let mut animation = AnimationLoop::new(core, RecordingSurface::new());

    assert_eq!(animation.frame(), FrameOutcome::Halted);
    assert_eq!(animation.core().ticks(), 0);

    assert!(animation.start());
    assert!(!animation.start());
    assert_eq!(animation.run_frames(10), 10);
    assert_eq!(animation.core().ticks(), 10);

    assert!(animation.stop());
    assert_eq!(animation.run_frames(10), 0);
    assert_eq!(animation.core().ticks(), 10);
}

#[test]
fn every_frame_keeps_particles_outside_horizon() {
    let core = CosmosCore::with_config(1600.0, 900.0, seeded_config(21)).unwrap();
    let mut animation = AnimationLoop::new(core, PixelSurface::new(1600, 900));
    animation.start();
    for _ in 0..200 {
        animation.frame();
        let core = animation.core();
        let center = core.frame().center();
        let horizon = core.config().field.horizon_radius;
        for p in core.field().particles() {
            assert!(p.position().distance(center) > horizon);
        }
    }
}
