//! Regular polygons, and the rotating frame that carries one around.

use euclid::default::{Point2D, Vector2D};
use std::f64::consts::PI;

/// How many sides the arena has. It's a hexagon.
pub const HEXAGON_SIDES: usize = 6;

/// Compute the vertices of a regular polygon with `sides` corners,
/// each `radius` away from `center`, with the first corner at `angle` radians.
pub fn regular_polygon(
    center: Point2D<f64>,
    radius: f64,
    angle: f64,
    sides: usize,
) -> Vec<Point2D<f64>> {
    let step = 2.0 * PI / sides as f64;
    (0..sides)
        .map(|k| {
            let theta = angle + k as f64 * step;
            center + Vector2D::new(theta.cos(), theta.sin()) * radius
        })
        .collect()
}

/// A polygon spinning at a constant rate around a fixed center.
#[derive(Copy, Clone, Debug)]
pub struct RotatingFrame {
    pub center: Point2D<f64>,
    /// Distance from the center to each corner
    pub radius: f64,
    /// Current rotation in radians.
    /// This just keeps growing; it's never wrapped back into [0, 2pi).
    pub angle: f64,
    /// Radians per second
    pub angular_speed: f64,
    pub sides: usize,
}

impl RotatingFrame {
    /// Make a hexagon starting at angle 0.
    pub fn hexagon(center: Point2D<f64>, radius: f64, angular_speed: f64) -> Self {
        Self {
            center,
            radius,
            angle: 0.0,
            angular_speed,
            sides: HEXAGON_SIDES,
        }
    }

    /// Spin the frame forward by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.angle += self.angular_speed * dt;
    }

    /// Where the corners are right now.
    pub fn vertices(&self) -> Vec<Point2D<f64>> {
        regular_polygon(self.center, self.radius, self.angle, self.sides)
    }

    /// The velocity of a point glued to the frame.
    pub fn velocity_at(&self, point: Point2D<f64>) -> Vector2D<f64> {
        wall_velocity(self.center, self.angular_speed, point)
    }
}

/// Velocity of `point` if it rigidly rotates around `center` at `angular_speed`.
/// A point at offset (x, y) moves at (-w*y, w*x).
pub fn wall_velocity(center: Point2D<f64>, angular_speed: f64, point: Point2D<f64>) -> Vector2D<f64> {
    let offset = point - center;
    Vector2D::new(-angular_speed * offset.y, angular_speed * offset.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_sit_on_the_circle() {
        let center = Point2D::new(400.0, 300.0);
        for &angle in &[0.0, 0.3, 1.0, PI, 17.25, -4.0] {
            let verts = regular_polygon(center, 250.0, angle, HEXAGON_SIDES);
            assert_eq!(verts.len(), HEXAGON_SIDES);
            for v in verts {
                assert!(((v - center).length() - 250.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn first_vertex_follows_the_angle() {
        let verts = regular_polygon(Point2D::zero(), 2.0, PI / 2.0, 4);
        assert!((verts[0].x - 0.0).abs() < 1e-12);
        assert!((verts[0].y - 2.0).abs() < 1e-12);
        // Next one is a quarter turn further along
        assert!((verts[1].x + 2.0).abs() < 1e-12);
        assert!(verts[1].y.abs() < 1e-12);
    }

    #[test]
    fn angle_accumulates_without_wrapping() {
        let mut frame = RotatingFrame::hexagon(Point2D::zero(), 1.0, 2.0);
        for _ in 0..10 {
            frame.advance(1.0);
        }
        assert!((frame.angle - 20.0).abs() < 1e-12);
    }

    #[test]
    fn wall_velocity_is_perpendicular_to_offset() {
        let frame = RotatingFrame::hexagon(Point2D::new(10.0, 10.0), 5.0, 0.5);
        let v = frame.velocity_at(Point2D::new(14.0, 13.0));
        assert!((v.x + 1.5).abs() < 1e-12);
        assert!((v.y - 2.0).abs() < 1e-12);
        assert!(v.dot(Vector2D::new(4.0, 3.0)).abs() < 1e-12);
    }
}
