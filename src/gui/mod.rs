//! GUI frontend for the warehouse robot simulation, using egui + eframe.
//!
//! eframe owns the event loop, so each `update` call is one iteration of
//! the main loop: drain window events, advance the simulation through
//! [`crate::runner::advance_frame`], paint the frame, then schedule the next
//! repaint one frame interval later to hold the configured frame rate.
//!
//! ## Usage
//!
//! ```no_run
//! use warehouse_robot::Config;
//! use warehouse_robot::gui::run_gui;
//!
//! let config = Config::default();
//! run_gui(config).unwrap();
//! ```

mod app;
mod views;

pub use app::{run_gui, RobotApp};
pub use views::ArenaView;
