//! Robot state: position, target and traveled path.

use crate::config::Config;
use crate::geometry::Point;
use crate::motion;
use crate::trail::Trail;

/// A square point-robot driving toward a fixed target
#[derive(Debug, Clone)]
pub struct Robot {
    /// Top-left corner in pixels
    pub position: Point,
    /// Target corner in pixels
    pub target: Point,
    /// Side of the robot square
    pub size: f32,
    /// Displacement per moving tick
    pub speed: f32,
    /// Largest reachable top-left corner
    bounds: Point,
    /// Center points recorded by each update
    trail: Trail,
    arrived: bool,
}

impl Robot {
    /// Build a robot from a validated configuration
    pub fn from_config(config: &Config) -> Self {
        let mut robot = Self::new(
            config.start_px(),
            config.target_px(),
            config.robot.size_px,
            config.robot.speed_px,
            config.arena.reachable_max(config.robot.size_px),
        );
        robot.trail = Trail::with_retention(config.path.retention);
        robot
    }

    pub fn new(start: Point, target: Point, size: f32, speed: f32, bounds: Point) -> Self {
        Self {
            position: start.clamp(Point::ZERO, bounds),
            target,
            size,
            speed,
            bounds,
            trail: Trail::new(),
            arrived: false,
        }
    }

    /// Step of `speed` pixels toward the target
    pub fn calculate_movement(&self) -> Point {
        motion::step_toward(self.position, self.target, self.speed)
    }

    /// Apply a displacement, clamp to the arena and record the new center
    pub fn update_position(&mut self, displacement: Point) {
        self.position = (self.position + displacement).clamp(Point::ZERO, self.bounds);
        self.trail.push(self.center());
    }

    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Whether the remaining distance is shorter than one step
    pub fn within_reach(&self) -> bool {
        self.distance_to_target() < self.speed
    }

    /// Place the robot exactly on the target. The trail is left untouched.
    pub fn snap_to_target(&mut self) {
        self.position = self.target;
        self.arrived = true;
    }

    pub fn has_arrived(&self) -> bool {
        self.arrived
    }

    pub fn center(&self) -> Point {
        Point::new(self.position.x + self.size / 2.0, self.position.y + self.size / 2.0)
    }

    pub fn target_center(&self) -> Point {
        Point::new(self.target.x + self.size / 2.0, self.target.y + self.size / 2.0)
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }
}
