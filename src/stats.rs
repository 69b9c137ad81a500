//! Statistics tracking for the simulation.

use crate::clock::Clock;
use crate::geometry::Point;
use crate::runner::{LoopOutcome, StopReason};
use crate::simulation::Simulation;
use serde::{Deserialize, Serialize};

/// Running counters for a simulation
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimStats {
    /// Frames ticked so far
    pub frames: u64,
    /// Ticks that applied motion
    pub motion_updates: u64,
    /// Duty-cycle phase changes
    pub phase_transitions: u64,
    /// Total distance covered in pixels
    pub distance_traveled: f32,
    /// Frame on which the robot snapped onto the target
    pub arrived_at_frame: Option<u64>,
    /// Clock time of arrival in seconds
    pub arrived_at_secs: Option<f64>,
}

impl SimStats {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Summary of a finished run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunReport {
    pub final_position: Point,
    pub target: Point,
    pub arrived: bool,
    pub stop: StopReason,
    pub path_points: usize,
    pub frames_presented: u64,
    pub elapsed_secs: f64,
    pub stats: SimStats,
}

impl RunReport {
    pub fn from_simulation<C: Clock>(sim: &Simulation<C>, outcome: &LoopOutcome) -> Self {
        Self {
            final_position: sim.robot().position,
            target: sim.robot().target,
            arrived: sim.has_arrived(),
            stop: outcome.stop,
            path_points: sim.robot().trail().len(),
            frames_presented: outcome.frames_presented,
            elapsed_secs: sim.clock().now().as_secs_f64(),
            stats: sim.stats().clone(),
        }
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Run Report ===")?;
        writeln!(
            f,
            "Position: ({:.2}, {:.2}) -> target ({:.2}, {:.2})",
            self.final_position.x, self.final_position.y, self.target.x, self.target.y
        )?;
        match self.stats.arrived_at_secs {
            Some(t) if self.arrived => writeln!(f, "Arrived: yes, at {:.2}s", t)?,
            _ => writeln!(f, "Arrived: no")?,
        }
        writeln!(f, "Stopped by: {:?}", self.stop)?;
        writeln!(f, "Frames: {} ({} presented)", self.stats.frames, self.frames_presented)?;
        writeln!(f, "Motion updates: {}", self.stats.motion_updates)?;
        writeln!(f, "Phase transitions: {}", self.stats.phase_transitions)?;
        writeln!(f, "Distance: {:.1} px", self.stats.distance_traveled)?;
        writeln!(f, "Path points: {}", self.path_points)?;
        writeln!(f, "Clock: {:.2}s", self.elapsed_secs)?;
        Ok(())
    }
}
