//! Collisions between the ball and the walls of a spinning convex polygon.

use crate::ball::RigidBall;
use crate::polygon::wall_velocity;

use euclid::default::{Point2D, Vector2D};
use log::trace;

/// Where and how the ball hit a wall.
#[derive(Copy, Clone, Debug)]
pub struct Contact {
    /// Index of the edge's first vertex. The edge runs to the next vertex (wrapping).
    pub edge: usize,
    /// Closest point on the edge to the ball's center, before correction
    pub point: Point2D<f64>,
    /// Unit vector pointing from the wall towards the ball
    pub normal: Vector2D<f64>,
    pub penetration: f64,
}

/// The outcome of one pass of `resolve_collision`.
#[derive(Copy, Clone, Debug)]
pub struct Resolution {
    /// The ball after the pass. Same as the input if nothing happened.
    pub ball: RigidBall,
    /// The edge that was resolved, if any
    pub contact: Option<Contact>,
}

impl Resolution {
    pub fn collided(&self) -> bool {
        self.contact.is_some()
    }
}

/// Check the ball against each edge of the polygon and resolve the first one
/// it's both overlapping and moving into.
///
/// The polygon spins around `center` at `angular_speed`, so the wall at the
/// contact point has a velocity of its own. The bounce is worked out relative
/// to that: the normal part is flipped and scaled by the ball's restitution,
/// the tangential part is damped by its friction. Then the ball is pushed
/// straight out of the wall by the penetration depth.
///
/// Edges the ball overlaps but is already leaving are skipped, so it doesn't
/// get stuck to them. Only one edge is resolved per call; call it again to
/// handle corners.
pub fn resolve_collision(
    ball: &RigidBall,
    vertices: &[Point2D<f64>],
    center: Point2D<f64>,
    angular_speed: f64,
) -> Resolution {
    let count = vertices.len();
    for i in 0..count {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % count];

        let edge_vec = p2 - p1;
        let edge_length = edge_vec.length();
        if edge_length == 0.0 {
            continue;
        }
        let edge_unit = edge_vec / edge_length;

        // Rotate the edge a quarter turn, then make sure it faces the middle.
        let mut normal = Vector2D::new(-edge_unit.y, edge_unit.x);
        let midpoint = p1.lerp(p2, 0.5);
        if normal.dot(center - midpoint) < 0.0 {
            normal = -normal;
        }

        // Closest point on the segment, not the infinite line
        let t = (ball.pos - p1).dot(edge_unit).max(0.0).min(edge_length);
        let closest = p1 + edge_unit * t;

        let dist_vec = ball.pos - closest;
        let dist = dist_vec.length();
        if dist >= ball.radius {
            continue;
        }
        let penetration = ball.radius - dist;
        let collision_normal = if dist != 0.0 { dist_vec / dist } else { normal };

        let wall_vel = wall_velocity(center, angular_speed, closest);
        let rel_vel = ball.vel - wall_vel;
        let rel_vel_normal = rel_vel.dot(collision_normal);
        if rel_vel_normal >= 0.0 {
            // Already on its way out.
            continue;
        }

        let v_normal = collision_normal * rel_vel_normal;
        let v_tangent = rel_vel - v_normal;
        let new_rel_vel = v_normal * -ball.restitution + v_tangent * (1.0 - ball.friction);

        trace!(
            "ball hit edge {} at ({:.2}, {:.2}), penetration {:.3}, normal speed {:.2}",
            i,
            closest.x,
            closest.y,
            penetration,
            rel_vel_normal
        );

        return Resolution {
            ball: RigidBall {
                pos: ball.pos + collision_normal * penetration,
                vel: new_rel_vel + wall_vel,
                ..*ball
            },
            contact: Some(Contact {
                edge: i,
                point: closest,
                normal: collision_normal,
                penetration,
            }),
        };
    }

    Resolution {
        ball: *ball,
        contact: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::{regular_polygon, HEXAGON_SIDES};

    /// A big still square, with its bottom edge along y = 100.
    fn square() -> (Vec<Point2D<f64>>, Point2D<f64>) {
        let verts = vec![
            Point2D::new(-100.0, -100.0),
            Point2D::new(100.0, -100.0),
            Point2D::new(100.0, 100.0),
            Point2D::new(-100.0, 100.0),
        ];
        (verts, Point2D::zero())
    }

    fn ball_at(x: f64, y: f64, vx: f64, vy: f64) -> RigidBall {
        RigidBall::new(Point2D::new(x, y), Vector2D::new(vx, vy), 10.0, 0.9, 0.2)
    }

    /// Distance from `p` to the segment `a`-`b`
    fn segment_distance(p: Point2D<f64>, a: Point2D<f64>, b: Point2D<f64>) -> f64 {
        let ab = b - a;
        let t = ((p - a).dot(ab) / ab.square_length()).max(0.0).min(1.0);
        (p - (a + ab * t)).length()
    }

    #[test]
    fn free_ball_is_untouched() {
        let (verts, center) = square();
        let ball = ball_at(0.0, 0.0, 30.0, -20.0);
        let res = resolve_collision(&ball, &verts, center, 0.0);
        assert!(!res.collided());
        assert_eq!(res.ball.pos, ball.pos);
        assert_eq!(res.ball.vel, ball.vel);
    }

    #[test]
    fn bounce_off_still_floor() {
        let (verts, center) = square();
        let ball = ball_at(0.0, 95.0, 40.0, 100.0);
        let res = resolve_collision(&ball, &verts, center, 0.0);

        let contact = res.contact.expect("should hit the floor");
        assert_eq!(contact.edge, 2);
        assert!((contact.penetration - 5.0).abs() < 1e-9);
        assert!((contact.normal.y + 1.0).abs() < 1e-12);

        assert!((res.ball.vel.y + 90.0).abs() < 1e-9);
        assert!((res.ball.vel.x - 32.0).abs() < 1e-9);
        assert!((res.ball.pos.y - 90.0).abs() < 1e-9);
    }

    #[test]
    fn penetration_is_fully_corrected() {
        let (verts, center) = square();
        let ball = ball_at(20.0, 97.5, -10.0, 60.0);
        let res = resolve_collision(&ball, &verts, center, 0.0);
        assert!(res.collided());
        let d = segment_distance(res.ball.pos, verts[2], verts[3]);
        assert!(d >= ball.radius - 1e-9, "still overlapping: {}", d);
    }

    #[test]
    fn separating_contact_leaves_ball_alone() {
        let (verts, center) = square();
        // Overlapping the floor but already moving up
        let ball = ball_at(0.0, 95.0, 15.0, -50.0);
        let res = resolve_collision(&ball, &verts, center, 0.0);
        assert!(!res.collided());
        assert_eq!(res.ball.vel, ball.vel);
        assert_eq!(res.ball.pos, ball.pos);

        // Sliding exactly along it counts as separating too
        let ball = ball_at(0.0, 95.0, 15.0, 0.0);
        let res = resolve_collision(&ball, &verts, center, 0.0);
        assert!(!res.collided());
        assert_eq!(res.ball.vel, ball.vel);
    }

    #[test]
    fn bounce_loses_normal_speed() {
        let (verts, center) = square();
        for &(e, mu) in &[(0.0, 1.0), (0.5, 0.1), (0.9, 0.2), (0.99, 0.5)] {
            let mut ball = ball_at(-30.0, 94.0, 25.0, 80.0);
            ball.restitution = e;
            ball.friction = mu;
            let res = resolve_collision(&ball, &verts, center, 0.0);
            let contact = res.contact.unwrap();
            let before = ball.vel.dot(contact.normal);
            let after = res.ball.vel.dot(contact.normal);
            assert!(before < 0.0);
            assert!(after.abs() < before.abs());
            assert!((after + e * before).abs() < 1e-9);
        }
    }

    #[test]
    fn moving_wall_is_accounted_for() {
        // Ball resting on the floor of a spinning square: the floor is moving
        // at (-w*y, w*x) = (-w*100, 0) right under it.
        let (verts, center) = square();
        let w = 0.5;
        let ball = ball_at(0.0, 95.0, 0.0, 10.0);
        let res = resolve_collision(&ball, &verts, center, w);
        let contact = res.contact.unwrap();
        let wall = wall_velocity(center, w, contact.point);
        assert!((wall.x + 50.0).abs() < 1e-9);

        // Relative tangential speed was +50, damped by (1 - 0.2)
        let rel_after = res.ball.vel - wall;
        assert!((rel_after.x - 40.0).abs() < 1e-9);
        assert!((rel_after.y + 9.0).abs() < 1e-9);
    }

    #[test]
    fn only_first_edge_is_resolved() {
        // Jammed into a corner, moving into both walls
        let (verts, center) = square();
        let ball = ball_at(95.0, 95.0, 50.0, 50.0);
        let first = resolve_collision(&ball, &verts, center, 0.0);
        let contact = first.contact.unwrap();
        assert_eq!(contact.edge, 1);
        assert!(first.ball.vel.x < 0.0);
        assert!(first.ball.vel.y > 0.0);

        let second = resolve_collision(&first.ball, &verts, center, 0.0);
        assert_eq!(second.contact.unwrap().edge, 2);
        assert!(second.ball.vel.y < 0.0);
    }

    #[test]
    fn degenerate_edges_are_skipped() {
        let verts = vec![
            Point2D::new(-100.0, -100.0),
            Point2D::new(100.0, -100.0),
            Point2D::new(100.0, -100.0),
            Point2D::new(100.0, 100.0),
            Point2D::new(-100.0, 100.0),
        ];
        let ball = ball_at(0.0, 95.0, 0.0, 20.0);
        let res = resolve_collision(&ball, &verts, Point2D::zero(), 0.0);
        assert_eq!(res.contact.unwrap().edge, 3);
    }

    #[test]
    fn centre_on_the_wall_uses_inward_normal() {
        let (verts, center) = square();
        let ball = ball_at(0.0, 100.0, 0.0, 30.0);
        let res = resolve_collision(&ball, &verts, center, 0.0);
        let contact = res.contact.unwrap();
        assert!((contact.normal.y + 1.0).abs() < 1e-12);
        assert!((contact.penetration - 10.0).abs() < 1e-12);
        assert!((res.ball.pos.y - 90.0).abs() < 1e-12);
        assert!((res.ball.vel.y + 27.0).abs() < 1e-9);
    }

    #[test]
    fn works_in_a_spinning_hexagon() {
        let center = Point2D::new(400.0, 300.0);
        let verts = regular_polygon(center, 250.0, 0.3, HEXAGON_SIDES);
        // Put the ball just inside the middle of edge 1
        let mid = verts[1].lerp(verts[2], 0.5);
        let inward = (center - mid).normalize();
        let ball = RigidBall::new(mid + inward * 10.0, -inward * 200.0, 15.0, 0.9, 0.2);
        let res = resolve_collision(&ball, &verts, center, 0.5);
        let contact = res.contact.unwrap();
        assert_eq!(contact.edge, 1);
        assert!((contact.normal - inward).length() < 1e-9);
        assert!(segment_distance(res.ball.pos, verts[1], verts[2]) >= 15.0 - 1e-9);
    }
}
