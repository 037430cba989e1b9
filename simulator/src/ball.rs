//! The ball, and the spinning arena it bounces around in.

use crate::collision::{resolve_collision, Resolution};
use crate::polygon::RotatingFrame;

use euclid::default::{Point2D, Vector2D};
use log::debug;

/// How many times per tick the walls get a chance to push the ball out.
pub const RESOLVE_PASSES: usize = 3;

/// A solid ball.
/// Screen coordinates, so +y is down.
#[derive(Copy, Clone, Debug)]
pub struct RigidBall {
    pub pos: Point2D<f64>,
    pub vel: Vector2D<f64>,
    pub radius: f64,
    /// How much normal speed survives a bounce, in [0, 1]
    pub restitution: f64,
    /// How much tangential speed is lost on a bounce, in [0, 1]
    pub friction: f64,
}

impl RigidBall {
    pub fn new(
        pos: Point2D<f64>,
        vel: Vector2D<f64>,
        radius: f64,
        restitution: f64,
        friction: f64,
    ) -> Self {
        Self {
            pos,
            vel,
            radius,
            restitution,
            friction,
        }
    }
}

/// Apply gravity, then move. Velocity goes first (semi-implicit Euler).
pub fn integrate_ball(ball: &RigidBall, gravity: f64, dt: f64) -> RigidBall {
    let vel = ball.vel + Vector2D::new(0.0, gravity * dt);
    RigidBall {
        pos: ball.pos + vel * dt,
        vel,
        ..*ball
    }
}

/// Everything about the bouncing-ball simulation.
#[derive(Clone, Debug)]
pub struct BallArena {
    frame: RotatingFrame,
    ball: RigidBall,
    /// Downwards acceleration, px/s^2
    gravity: f64,
    resolve_passes: usize,
}

impl BallArena {
    pub fn new(frame: RotatingFrame, ball: RigidBall, gravity: f64) -> Self {
        Self {
            frame,
            ball,
            gravity,
            resolve_passes: RESOLVE_PASSES,
        }
    }

    /// Change how many resolution passes happen per tick. Always at least one.
    pub fn with_resolve_passes(mut self, passes: usize) -> Self {
        self.resolve_passes = passes.max(1);
        self
    }

    /// Advance everything by `dt` seconds.
    /// Returns how many wall hits got resolved this tick.
    pub fn step(&mut self, dt: f64) -> usize {
        self.frame.advance(dt);
        let vertices = self.frame.vertices();

        self.ball = integrate_ball(&self.ball, self.gravity, dt);

        let mut hits = 0;
        for _ in 0..self.resolve_passes {
            let Resolution { ball, contact } = resolve_collision(
                &self.ball,
                &vertices,
                self.frame.center,
                self.frame.angular_speed,
            );
            if contact.is_none() {
                break;
            }
            self.ball = ball;
            hits += 1;
        }
        if hits == self.resolve_passes && hits > 0 {
            debug!("ball still touching after {} passes", hits);
        }
        hits
    }

    pub fn ball(&self) -> &RigidBall {
        &self.ball
    }

    pub fn frame(&self) -> &RotatingFrame {
        &self.frame
    }

    /// Where the walls are right now.
    pub fn vertices(&self) -> Vec<Point2D<f64>> {
        self.frame.vertices()
    }
}
