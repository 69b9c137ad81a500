//! Performance benchmarks for the warehouse robot simulation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;
use warehouse_robot::clock::ManualClock;
use warehouse_robot::render;
use warehouse_robot::{Config, Simulation};

fn benchmark_tick(c: &mut Criterion) {
    let clock = ManualClock::new();
    let mut sim = Simulation::new(Config::default(), &clock);

    c.bench_function("simulation_tick", |b| {
        b.iter(|| {
            clock.advance(Duration::from_millis(1));
            black_box(sim.tick())
        });
    });
}

fn benchmark_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_frame");

    for trail_len in [0usize, 100, 10_000].iter() {
        let mut config = Config::default();
        // Far corner so the robot never arrives while the trail fills
        config.robot.start_m = warehouse_robot::Point::new(9.7, 9.7);
        config.robot.target_m = warehouse_robot::Point::new(0.0, 0.0);
        config.robot.speed_px = 0.01;

        let clock = ManualClock::new();
        let mut sim = Simulation::new(config, &clock);
        for _ in 0..*trail_len {
            sim.tick();
        }

        group.bench_with_input(BenchmarkId::new("trail", trail_len), trail_len, |b, _| {
            b.iter(|| render::compose(black_box(&sim)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_tick, benchmark_compose);

criterion_main!(benches);
