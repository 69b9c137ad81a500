//! Straight-line motion model.

use crate::geometry::Point;

/// Displacement of magnitude `speed` from `position` toward `target`.
///
/// Returns [`Point::ZERO`] when the two coincide.
pub fn step_toward(position: Point, target: Point, speed: f32) -> Point {
    let delta = target - position;
    let distance = delta.length();

    if distance == 0.0 {
        return Point::ZERO;
    }

    delta * (speed / distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_step_has_fixed_magnitude() {
        let cases = [
            (Point::new(0.0, 0.0), Point::new(700.0, 900.0)),
            (Point::new(500.0, 500.0), Point::new(0.0, 0.0)),
            (Point::new(12.5, 900.0), Point::new(13.0, 0.0)),
            (Point::new(1.0, 1.0), Point::new(1.5, 1.0)),
        ];

        for (from, to) in cases {
            let step = step_toward(from, to, 10.0);
            assert!((step.length() - 10.0).abs() < EPS, "{:?} -> {:?}", from, to);

            // Same direction as the remaining offset
            let offset = to - from;
            let dot = step.x * offset.x + step.y * offset.y;
            assert!(dot > 0.0);
            let cross = step.x * offset.y - step.y * offset.x;
            assert!(cross.abs() / offset.length() < EPS);
        }
    }

    #[test]
    fn test_reference_first_step() {
        let step = step_toward(Point::ZERO, Point::new(700.0, 900.0), 10.0);
        let distance = (700.0f32 * 700.0 + 900.0 * 900.0).sqrt();
        assert!((distance - 1140.175).abs() < 0.01);
        assert!((step.x - 7000.0 / distance).abs() < EPS);
        assert!((step.y - 9000.0 / distance).abs() < EPS);
    }

    #[test]
    fn test_zero_when_at_target() {
        let p = Point::new(700.0, 900.0);
        assert_eq!(step_toward(p, p, 10.0), Point::ZERO);
    }
}
