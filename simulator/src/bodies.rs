//! Handles bodies and such

use euclid::default::{Point2D, Vector2D};

/// The representation of a body, like a star or a planet.
/// Doesn't store its position or velocity.
#[derive(Clone, Debug)]
pub struct Body {
    pub name: String,
    /// Solar masses. Always positive.
    pub mass: f64,
    /// How big to draw it, in pixels. Nothing to do with the physics.
    pub radius: f64,
    /// Color is stored as 0xRRGGBB
    pub color: u32,
}

/// A Kinemat holds all the kinematic information about something.
#[derive(Copy, Clone, Debug)]
pub struct Kinemat {
    pub pos: Point2D<f64>,
    pub vel: Vector2D<f64>,
    /// Gets overwritten every tick by the gravity pass before it's used.
    pub acc: Vector2D<f64>,
}

impl Kinemat {
    pub fn new(pos: Point2D<f64>, vel: Vector2D<f64>) -> Self {
        Self {
            pos,
            vel,
            acc: Vector2D::zero(),
        }
    }

    pub fn zero() -> Self {
        Self::new(Point2D::zero(), Vector2D::zero())
    }

    /// Semi-implicit Euler: velocity from the stored acceleration, then position from the new velocity.
    pub fn update(&mut self, dt: f64) {
        self.vel += self.acc * dt;
        self.pos += self.vel * dt;
    }
}

/// An Orbiter is a combination of a Body and a Kinemat.
/// In other words, a thing and where it is (and how fast it's going.)
#[derive(Clone, Debug)]
pub struct Orbiter(pub Body, pub Kinemat);

impl Orbiter {
    pub fn momentum(&self) -> Vector2D<f64> {
        self.1.vel * self.0.mass
    }
}
