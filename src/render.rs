//! Frame composition.
//!
//! A [`Frame`] is a backend-neutral display list: background, grid, path
//! trail, target marker and robot marker, in paint order. Surfaces turn it
//! into pixels (egui painter in the GUI, nothing at all when headless).

use crate::clock::Clock;
use crate::geometry::Point;
use crate::simulation::Simulation;
use serde::Serialize;

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BACKGROUND: Rgb = Rgb(255, 255, 255);
pub const GRID: Rgb = Rgb(200, 200, 200);
pub const PATH: Rgb = Rgb(0, 0, 255);
pub const TARGET: Rgb = Rgb(0, 255, 0);
pub const ROBOT: Rgb = Rgb(255, 0, 0);

pub const PATH_WIDTH: f32 = 2.0;
pub const TARGET_RADIUS: f32 = 15.0;
/// Grid lines closer than this are not drawn
pub const MIN_GRID_SPACING_PX: f32 = 1.0;

/// A single draw operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Primitive {
    Fill(Rgb),
    Line {
        from: Point,
        to: Point,
        color: Rgb,
        width: f32,
    },
    Polyline {
        points: Vec<Point>,
        color: Rgb,
        width: f32,
    },
    Circle {
        center: Point,
        radius: f32,
        color: Rgb,
    },
    Rect {
        min: Point,
        size: Point,
        color: Rgb,
    },
}

/// One rendered frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub primitives: Vec<Primitive>,
}

impl Frame {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Number of grid lines in the frame
    pub fn grid_lines(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Line { color, .. } if *color == GRID))
            .count()
    }
}

/// Build the frame for the current simulation state
pub fn compose<C: Clock>(sim: &Simulation<C>) -> Frame {
    let config = sim.config();
    let robot = sim.robot();
    let (width, height) = (config.arena.width_px, config.arena.height_px);
    let spacing = config.render.grid_spacing_m * config.arena.pixels_per_meter;

    let mut frame = Frame::new(width, height);
    frame.push(Primitive::Fill(BACKGROUND));

    // Grid lines from 0 up to, but not including, the far edge
    for x in grid_offsets(width, spacing) {
        frame.push(Primitive::Line {
            from: Point::new(x, 0.0),
            to: Point::new(x, height),
            color: GRID,
            width: 1.0,
        });
    }
    for y in grid_offsets(height, spacing) {
        frame.push(Primitive::Line {
            from: Point::new(0.0, y),
            to: Point::new(width, y),
            color: GRID,
            width: 1.0,
        });
    }

    if robot.trail().len() > 1 {
        frame.push(Primitive::Polyline {
            points: robot.trail().to_vec(),
            color: PATH,
            width: PATH_WIDTH,
        });
    }

    frame.push(Primitive::Circle {
        center: robot.target_center(),
        radius: TARGET_RADIUS,
        color: TARGET,
    });

    frame.push(Primitive::Rect {
        min: robot.position,
        size: Point::new(robot.size, robot.size),
        color: ROBOT,
    });

    frame
}

fn grid_offsets(extent: f32, spacing: f32) -> impl Iterator<Item = f32> {
    let count = if spacing >= MIN_GRID_SPACING_PX && extent.is_finite() {
        (extent / spacing).ceil() as usize
    } else {
        0
    };
    (0..count).map(move |i| i as f32 * spacing)
}
