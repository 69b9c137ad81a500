//! Integration tests for the warehouse robot simulation

use std::time::Duration;

use warehouse_robot::clock::{Clock, ManualClock};
use warehouse_robot::config::ArrivalPolicy;
use warehouse_robot::duty_cycle::Phase;
use warehouse_robot::render::{self, Primitive};
use warehouse_robot::runner::{run_loop, SimulatedPacer, StopReason};
use warehouse_robot::simulation::TickOutcome;
use warehouse_robot::stats::RunReport;
use warehouse_robot::surface::HeadlessSurface;
use warehouse_robot::{Config, Point, Simulation};

const FRAME: Duration = Duration::from_nanos(16_666_667);

#[test]
fn test_reference_scenario_reaches_target() {
    let mut config = Config::default();
    config.arrival = ArrivalPolicy::Exit;

    let clock = ManualClock::new();
    let mut sim = Simulation::new(config, &clock);
    let mut surface = HeadlessSurface::new(1000.0, 1000.0).unwrap();
    let releases = surface.release_counter();
    let mut pacer = SimulatedPacer::new(&clock, FRAME);

    let outcome = run_loop(&mut sim, &mut surface, &mut pacer, Some(1_000_000)).unwrap();

    assert_eq!(outcome.stop, StopReason::Arrived);
    assert_eq!(sim.robot().position, Point::new(700.0, 900.0));
    // Every moving tick recorded exactly one point; the snap adds none
    assert_eq!(sim.robot().trail().len() as u64, sim.stats().motion_updates);

    // Robot stayed inside the arena the whole way
    for p in sim.robot().trail().iter() {
        assert!(p.x >= 15.0 && p.x <= 985.0);
        assert!(p.y >= 15.0 && p.y <= 985.0);
    }

    // Five moving ticks per 2.1s cycle at 60Hz
    let secs = clock.now().as_secs_f64();
    assert!(secs > 30.0 && secs < 60.0, "took {secs}s");

    let report = RunReport::from_simulation(&sim, &outcome);
    assert!(report.arrived);
    assert_eq!(report.frames_presented, surface.frames_presented());

    drop(surface);
    assert_eq!(releases.get(), 1);
}

#[test]
fn test_duty_cycle_through_simulation() {
    let clock = ManualClock::new();
    let mut sim = Simulation::new(Config::default(), &clock);

    let mut phases = Vec::new();
    for ms in [0u64, 50, 100, 101, 1000, 2100, 2101, 2150, 2201, 2202] {
        clock.set(Duration::from_millis(ms));
        let outcome = sim.tick();
        phases.push((ms, sim.phase(), outcome));
    }

    assert_eq!(
        phases,
        vec![
            (0, Phase::Moving, TickOutcome::Moved),
            (50, Phase::Moving, TickOutcome::Moved),
            (100, Phase::Moving, TickOutcome::Moved),
            (101, Phase::Stopped, TickOutcome::Held),
            (1000, Phase::Stopped, TickOutcome::Held),
            (2100, Phase::Stopped, TickOutcome::Held),
            (2101, Phase::Moving, TickOutcome::Held),
            (2150, Phase::Moving, TickOutcome::Moved),
            (2201, Phase::Moving, TickOutcome::Moved),
            (2202, Phase::Stopped, TickOutcome::Held),
        ]
    );
    assert_eq!(sim.robot().trail().len(), 5);
}

#[test]
fn test_quit_releases_display_once() {
    let clock = ManualClock::new();
    let mut sim = Simulation::new(Config::default(), &clock);
    let mut surface = HeadlessSurface::new(1000.0, 1000.0).unwrap().quit_after(3);
    let releases = surface.release_counter();
    let mut pacer = SimulatedPacer::new(&clock, FRAME);

    let outcome = run_loop(&mut sim, &mut surface, &mut pacer, None).unwrap();

    assert_eq!(outcome.stop, StopReason::Quit);
    assert_eq!(surface.frames_presented(), 3);
    assert_eq!(releases.get(), 1);

    // Dropping the already-released handle does not release again
    drop(surface);
    assert_eq!(releases.get(), 1);
}

#[test]
fn test_path_retention_bounds_trail() {
    let mut config = Config::default();
    config.path.retention = Some(4);

    let clock = ManualClock::new();
    let mut sim = Simulation::new(config, &clock);
    for _ in 0..6 {
        clock.advance(Duration::from_millis(10));
        sim.tick();
    }

    assert_eq!(sim.robot().trail().len(), 4);
    assert_eq!(sim.robot().trail().total_recorded(), sim.stats().motion_updates);
    assert_eq!(sim.robot().trail().last(), Some(sim.robot().center()));
}

#[test]
fn test_frame_reflects_state() {
    let clock = ManualClock::new();
    let mut sim = Simulation::new(Config::default(), &clock);
    for _ in 0..3 {
        sim.tick();
    }

    let frame = render::compose(&sim);
    let trail = frame.primitives.iter().find_map(|p| match p {
        Primitive::Polyline { points, .. } => Some(points.clone()),
        _ => None,
    });
    assert_eq!(trail, Some(sim.robot().trail().to_vec()));

    match frame.primitives.last() {
        Some(Primitive::Rect { min, .. }) => assert_eq!(*min, sim.robot().position),
        other => panic!("robot marker missing: {other:?}"),
    }
}

#[test]
fn test_config_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut config = Config::default();
    config.robot.target_m = Point::new(3.0, 4.0);
    config.arrival = ArrivalPolicy::Exit;
    config.save(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.target_px(), Point::new(300.0, 400.0));
    assert_eq!(loaded.arrival, ArrivalPolicy::Exit);

    std::fs::write(&path, "arena: [not, a, map]").unwrap();
    assert!(Config::from_file(&path).is_err());
}
