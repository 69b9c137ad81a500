//! # Warehouse Robot
//!
//! A single square robot drives in a straight line toward a fixed target on
//! a 10m x 10m warehouse floor, alternating short moving bursts with longer
//! pauses, while the traveled path is drawn as a trail.
//!
//! ## Features
//!
//! - **Deterministic**: time is injected through [`clock::Clock`], so runs can
//!   be replayed without sleeping
//! - **Backend-neutral rendering**: frames are display lists ([`render::Frame`])
//!   presented by any [`surface::Surface`]
//! - **Configurable**: YAML configuration files
//! - **GUI**: optional egui window (`--features gui`)
//!
//! ## Quick Start
//!
//! ```rust
//! use warehouse_robot::clock::ManualClock;
//! use warehouse_robot::runner::{run_loop, SimulatedPacer};
//! use warehouse_robot::surface::HeadlessSurface;
//! use warehouse_robot::{Config, Simulation};
//!
//! let config = Config::default();
//! let clock = ManualClock::new();
//! let interval = config.render.frame_interval();
//! let mut sim = Simulation::new(config, &clock);
//! let mut surface = HeadlessSurface::new(1000.0, 1000.0).unwrap();
//! let mut pacer = SimulatedPacer::new(&clock, interval);
//!
//! let outcome = run_loop(&mut sim, &mut surface, &mut pacer, Some(600)).unwrap();
//! println!("{} frames, robot at {:?}", outcome.frames_presented, sim.robot().position);
//! ```

pub mod clock;
pub mod config;
pub mod duty_cycle;
pub mod geometry;
pub mod motion;
pub mod render;
pub mod robot;
pub mod runner;
pub mod simulation;
pub mod stats;
pub mod surface;
pub mod trail;

#[cfg(feature = "gui")]
pub mod gui;

// Re-export main types
pub use config::Config;
pub use geometry::Point;
pub use robot::Robot;
pub use simulation::Simulation;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
