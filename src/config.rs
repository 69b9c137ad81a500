//! Configuration system for the warehouse robot simulation.
//!
//! Supports YAML configuration files with defaults matching the reference
//! scenario: a 10m x 10m arena, a 30px robot starting at (0, 0) m and
//! driving toward (7, 9) m at 10px per tick.

use crate::geometry::Point;
use crate::render::MIN_GRID_SPACING_PX;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub arena: ArenaConfig,
    pub robot: RobotConfig,
    pub duty_cycle: DutyCycleConfig,
    pub render: RenderConfig,
    #[serde(default)]
    pub path: PathConfig,
    #[serde(default)]
    pub arrival: ArrivalPolicy,
    pub logging: LoggingConfig,
}

/// Arena (warehouse floor) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Arena width in pixels
    pub width_px: f32,
    /// Arena height in pixels
    pub height_px: f32,
    /// Pixels per meter
    pub pixels_per_meter: f32,
}

/// Robot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Side of the robot square in pixels
    pub size_px: f32,
    /// Displacement per moving tick in pixels
    pub speed_px: f32,
    /// Start position (top-left corner) in meters
    pub start_m: Point,
    /// Target position in meters
    pub target_m: Point,
}

/// Move/stop cycle timing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyCycleConfig {
    /// Length of the moving interval in seconds
    pub move_time_secs: f64,
    /// Length of the stopped interval in seconds
    pub stop_time_secs: f64,
}

/// Rendering and window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Frame-rate cap
    pub fps: u32,
    /// Window title
    pub title: String,
    /// Grid line spacing in meters
    pub grid_spacing_m: f32,
}

/// Retention policy for the traveled path
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathConfig {
    /// Keep at most this many points (oldest dropped). `None` keeps everything.
    #[serde(default)]
    pub retention: Option<usize>,
}

/// What the loop does once the robot reaches its target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrivalPolicy {
    /// Keep rendering the final state until the window is closed
    #[default]
    Hold,
    /// Render the arrival frame, then end the loop
    Exit,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            robot: RobotConfig::default(),
            duty_cycle: DutyCycleConfig::default(),
            render: RenderConfig::default(),
            path: PathConfig::default(),
            arrival: ArrivalPolicy::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width_px: 1000.0,
            height_px: 1000.0,
            pixels_per_meter: 100.0,
        }
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            size_px: 30.0,
            speed_px: 10.0,
            start_m: Point::new(0.0, 0.0),
            target_m: Point::new(7.0, 9.0),
        }
    }
}

impl Default for DutyCycleConfig {
    fn default() -> Self {
        Self {
            move_time_secs: 0.1,
            stop_time_secs: 2.0,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            title: "Warehouse Robot Simulation".to_string(),
            grid_spacing_m: 1.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl ArenaConfig {
    /// Largest top-left corner a robot of `robot_size` can occupy
    pub fn reachable_max(&self, robot_size: f32) -> Point {
        Point::new(self.width_px - robot_size, self.height_px - robot_size)
    }

    /// Convert a meter coordinate to pixels
    pub fn to_pixels(&self, meters: Point) -> Point {
        meters * self.pixels_per_meter
    }
}

impl LoggingConfig {
    /// Parsed log level, `None` if the string is not a level name
    pub fn level_filter(&self) -> Option<log::LevelFilter> {
        self.log_level.parse().ok()
    }
}

impl DutyCycleConfig {
    pub fn move_time(&self) -> Duration {
        secs_to_duration(self.move_time_secs)
    }

    pub fn stop_time(&self) -> Duration {
        secs_to_duration(self.stop_time_secs)
    }
}

/// Seconds to `Duration`, saturating: NaN and negatives become zero,
/// anything past `Duration::MAX` (including infinity) becomes `Duration::MAX`
fn secs_to_duration(secs: f64) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

/// Check that `secs` is a finite number of seconds `Duration` can hold
fn check_secs(name: &str, secs: f64) -> Result<(), String> {
    if !secs.is_finite() {
        return Err(format!("{} must be finite", name));
    }
    Duration::try_from_secs_f64(secs)
        .map(|_| ())
        .map_err(|_| format!("{} = {} is out of range", name, secs))
}

impl RenderConfig {
    /// Time budget of one frame at the configured cap
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Start position in pixels
    pub fn start_px(&self) -> Point {
        self.arena.to_pixels(self.robot.start_m)
    }

    /// Target position in pixels
    pub fn target_px(&self) -> Point {
        self.arena.to_pixels(self.robot.target_m)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        let arena = &self.arena;
        let robot = &self.robot;

        if !(arena.width_px > 0.0 && arena.height_px > 0.0) {
            return Err("arena dimensions must be > 0".to_string());
        }
        if !(arena.width_px.is_finite() && arena.height_px.is_finite()) {
            return Err("arena dimensions must be finite".to_string());
        }
        if !(arena.pixels_per_meter > 0.0 && arena.pixels_per_meter.is_finite()) {
            return Err("pixels_per_meter must be finite and > 0".to_string());
        }
        if !(robot.size_px > 0.0) {
            return Err("robot size must be > 0".to_string());
        }
        if robot.size_px > arena.width_px || robot.size_px > arena.height_px {
            return Err("robot cannot be larger than the arena".to_string());
        }
        if !(robot.speed_px > 0.0) {
            return Err("robot speed must be > 0".to_string());
        }
        check_secs("move_time_secs", self.duty_cycle.move_time_secs)?;
        check_secs("stop_time_secs", self.duty_cycle.stop_time_secs)?;
        if !(self.duty_cycle.move_time_secs > 0.0) {
            return Err("move_time_secs must be > 0".to_string());
        }
        if !(self.duty_cycle.stop_time_secs >= 0.0) {
            return Err("stop_time_secs must be >= 0".to_string());
        }
        if self.render.fps == 0 {
            return Err("fps must be > 0".to_string());
        }
        if !(self.render.grid_spacing_m > 0.0) {
            return Err("grid_spacing_m must be > 0".to_string());
        }
        let spacing_px = self.render.grid_spacing_m * arena.pixels_per_meter;
        if !(spacing_px.is_finite() && spacing_px >= MIN_GRID_SPACING_PX) {
            return Err(format!(
                "grid spacing is {} px, must be at least {} px",
                spacing_px, MIN_GRID_SPACING_PX
            ));
        }
        if self.path.retention == Some(0) {
            return Err("path retention must be > 0 when set".to_string());
        }
        if self.logging.level_filter().is_none() {
            return Err(format!("unknown log level '{}'", self.logging.log_level));
        }

        let max = arena.reachable_max(robot.size_px);
        let reachable = |p: Point| p.x >= 0.0 && p.y >= 0.0 && p.x <= max.x && p.y <= max.y;
        if !reachable(self.start_px()) {
            return Err(format!(
                "start {:?} m lies outside the reachable area (0..={}, 0..={} px)",
                robot.start_m, max.x, max.y
            ));
        }
        if !reachable(self.target_px()) {
            return Err(format!(
                "target {:?} m lies outside the reachable area (0..={}, 0..={} px)",
                robot.target_m, max.x, max.y
            ));
        }
        Ok(())
    }
}
