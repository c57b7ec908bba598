use cosmos_engine::Cosmos;

#[test]
fn perf_smoke_tick() {
    let mut cosmos = Cosmos::new(1920, 1080);
    cosmos.enable_perf_metrics(true);
    for _ in 0..30 {
        cosmos.tick();
    }
    let stats = cosmos.get_perf_stats();
    assert!(stats.tick_ms() >= 0.0);
    assert!(stats.update_ms() >= 0.0);
    assert_eq!(stats.particle_count(), 1500);
    assert_eq!(cosmos.frame(), 30);
}
