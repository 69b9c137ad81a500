//! Arena visualization.

use egui::{Color32, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};

use crate::geometry::Point;
use crate::render::{Frame, Primitive, Rgb, GRID};

/// Paints a composed [`Frame`] scaled to the available space
pub struct ArenaView {
    /// Show grid lines
    show_grid: bool,
}

impl Default for ArenaView {
    fn default() -> Self {
        Self { show_grid: true }
    }
}

impl ArenaView {
    /// Create a new arena view
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the frame into the remaining space of `ui`
    pub fn show(&mut self, ui: &mut Ui, frame: &Frame) {
        let controls_height = 24.0;
        let available = ui.available_size() - Vec2::new(0.0, controls_height);

        // Fit the arena, keeping its aspect ratio
        let scale = (available.x / frame.width)
            .min(available.y / frame.height)
            .max(0.01);
        let size = Vec2::new(frame.width * scale, frame.height * scale);

        let (response, painter) = ui.allocate_painter(available.max(size), Sense::hover());
        let origin = response.rect.min
            + Vec2::new(
                ((available.x - size.x) / 2.0).max(0.0),
                ((available.y - size.y) / 2.0).max(0.0),
            );
        let to_screen = |p: Point| Pos2::new(origin.x + p.x * scale, origin.y + p.y * scale);

        for primitive in &frame.primitives {
            match primitive {
                Primitive::Fill(color) => {
                    painter.rect_filled(Rect::from_min_size(origin, size), 0.0, color32(*color));
                }
                Primitive::Line { color, .. } if *color == GRID && !self.show_grid => {}
                Primitive::Line {
                    from,
                    to,
                    color,
                    width,
                } => {
                    painter.line_segment(
                        [to_screen(*from), to_screen(*to)],
                        Stroke::new(*width, color32(*color)),
                    );
                }
                Primitive::Polyline {
                    points,
                    color,
                    width,
                } => {
                    let points: Vec<Pos2> = points.iter().map(|p| to_screen(*p)).collect();
                    painter.add(Shape::line(points, Stroke::new(*width, color32(*color))));
                }
                Primitive::Circle {
                    center,
                    radius,
                    color,
                } => {
                    painter.circle_filled(to_screen(*center), radius * scale, color32(*color));
                }
                Primitive::Rect { min, size, color } => {
                    let rect = Rect::from_min_size(to_screen(*min), Vec2::new(size.x, size.y) * scale);
                    painter.rect_filled(rect, 0.0, color32(*color));
                }
            }
        }

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.show_grid, "Grid");
        });
    }
}

fn color32(Rgb(r, g, b): Rgb) -> Color32 {
    Color32::from_rgb(r, g, b)
}
