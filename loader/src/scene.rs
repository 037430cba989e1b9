//! Ready-to-run descriptions of both simulations.

use simulator::ball::{BallArena, RigidBall, RESOLVE_PASSES};
use simulator::bodies::Orbiter;
use simulator::polygon::RotatingFrame;
use simulator::SolarSystem;

/// Everything needed to start the solar system.
#[derive(Clone, Debug)]
pub struct SolarScene {
    /// Sun first
    pub orbiters: Vec<Orbiter>,
    pub grav_constant: f64,
    /// Years per tick at 1x
    pub dt: f64,
    pub speed: u32,
    /// Whether to give the Sun a kick that zeroes the total momentum
    pub balance_momentum: bool,
}

impl SolarScene {
    pub fn into_system(self) -> SolarSystem {
        let mut system = SolarSystem::new(self.orbiters)
            .with_grav_constant(self.grav_constant)
            .with_timing(self.dt, self.speed);
        if self.balance_momentum {
            system.balance_momentum();
        }
        system
    }
}

/// Everything needed to start the bouncing ball.
#[derive(Copy, Clone, Debug)]
pub struct HexagonScene {
    pub frame: RotatingFrame,
    pub ball: RigidBall,
    /// px/s^2, +y is down
    pub gravity: f64,
    pub resolve_passes: usize,
}

impl HexagonScene {
    pub fn new(frame: RotatingFrame, ball: RigidBall, gravity: f64) -> Self {
        Self {
            frame,
            ball,
            gravity,
            resolve_passes: RESOLVE_PASSES,
        }
    }

    pub fn into_arena(self) -> BallArena {
        BallArena::new(self.frame, self.ball, self.gravity).with_resolve_passes(self.resolve_passes)
    }
}
