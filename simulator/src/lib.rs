//! Handles the simulation of the solar system, and of the ball in the spinning hexagon.

pub mod ball;
pub mod bodies;
pub mod collision;
pub mod gravity;
pub mod polygon;

use crate::bodies::Orbiter;
use crate::gravity::accumulate_accelerations;
use euclid::default::Vector2D;
use log::info;

pub struct SolarSystem {
    /// Every body, Sun first. Nothing gets added or removed after creation.
    orbiters: Vec<Orbiter>,
    grav_constant: f64,
    /// Years simulated per tick at 1x speed
    base_dt: f64,
    speed_factor: u32,
    paused: bool,
    /// Simulated years so far
    elapsed: f64,
}

impl SolarSystem {
    pub fn new(orbiters: Vec<Orbiter>) -> Self {
        SolarSystem {
            orbiters,
            grav_constant: GRAV_CONSTANT,
            base_dt: BASE_DT,
            speed_factor: DEFAULT_SPEED,
            paused: false,
            elapsed: 0.0,
        }
    }

    /// Use a different gravitational constant.
    pub fn with_grav_constant(mut self, grav_constant: f64) -> Self {
        self.grav_constant = grav_constant;
        self
    }

    /// Use a different time step and speed multiplier.
    pub fn with_timing(mut self, base_dt: f64, speed_factor: u32) -> Self {
        self.base_dt = base_dt;
        self.speed_factor = speed_factor.max(1);
        self
    }

    /// One frame's worth of simulation. Does nothing while paused.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        let dt = self.base_dt * self.speed_factor as f64;
        self.step(dt);
    }

    /// Advance every body by `dt` years, paused or not.
    pub fn step(&mut self, dt: f64) {
        accumulate_accelerations(&mut self.orbiters, self.grav_constant);
        for Orbiter(_, kmat) in self.orbiters.iter_mut() {
            kmat.update(dt);
        }
        self.elapsed += dt;
    }

    /// Set the first body's velocity so the whole system has no net momentum.
    /// The Sun soaks up whatever the planets are carrying.
    pub fn balance_momentum(&mut self) {
        if let Some((primary, rest)) = self.orbiters.split_first_mut() {
            let carried = rest
                .iter()
                .fold(Vector2D::zero(), |sum, oer| sum + oer.momentum());
            primary.1.vel = -carried / primary.0.mass;
        }
    }

    /// Sum of mass * velocity over everything.
    pub fn total_momentum(&self) -> Vector2D<f64> {
        self.orbiters
            .iter()
            .fold(Vector2D::zero(), |sum, oer| sum + oer.momentum())
    }

    /// Kinetic plus gravitational potential energy.
    pub fn total_energy(&self) -> f64 {
        let kinetic: f64 = self
            .orbiters
            .iter()
            .map(|Orbiter(body, kmat)| 0.5 * body.mass * kmat.vel.square_length())
            .sum();
        let mut potential = 0.0;
        for (i, Orbiter(body, kmat)) in self.orbiters.iter().enumerate() {
            for Orbiter(other_body, other_kmat) in self.orbiters.iter().skip(i + 1) {
                let dist = (other_kmat.pos - kmat.pos).length();
                if dist != 0.0 {
                    potential -= self.grav_constant * body.mass * other_body.mass / dist;
                }
            }
        }
        kinetic + potential
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!("simulation {}", if self.paused { "paused" } else { "running" });
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn speed_up(&mut self) {
        self.speed_factor += 1;
        info!("speed {}x", self.speed_factor);
    }

    /// Slow down, but never below 1x. Pausing is what the pause is for.
    pub fn slow_down(&mut self) {
        self.speed_factor = self.speed_factor.saturating_sub(1).max(1);
        info!("speed {}x", self.speed_factor);
    }

    pub fn speed_factor(&self) -> u32 {
        self.speed_factor
    }

    /// How many years have been simulated.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// A read-only view of every orbiter, for drawing.
    pub fn orbiters(&self) -> &[Orbiter] {
        &self.orbiters
    }
}

/// G in AU^3 / (Msun * yr^2)
pub const GRAV_CONSTANT: f64 = 4.0 * std::f64::consts::PI * std::f64::consts::PI;
/// Years per tick at 1x speed
pub const BASE_DT: f64 = 0.01;
pub const DEFAULT_SPEED: u32 = 5;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{Body, Kinemat};
    use euclid::default::Point2D;

    fn sun_and_earth() -> SolarSystem {
        SolarSystem::new(vec![
            Orbiter(
                Body {
                    name: "Sun".to_string(),
                    mass: 1.0,
                    radius: 20.0,
                    color: 0xffff00,
                },
                Kinemat::zero(),
            ),
            Orbiter(
                Body {
                    name: "Earth".to_string(),
                    mass: 3.0e-6,
                    radius: 12.0,
                    color: 0x0000ff,
                },
                Kinemat::new(
                    Point2D::new(1.0, 0.0),
                    Vector2D::new(0.0, 2.0 * std::f64::consts::PI),
                ),
            ),
        ])
    }

    #[test]
    fn paused_tick_does_nothing() {
        let mut system = sun_and_earth();
        system.toggle_pause();
        system.tick();
        assert_eq!(system.elapsed(), 0.0);
        assert_eq!(system.orbiters()[1].1.pos, Point2D::new(1.0, 0.0));

        system.toggle_pause();
        system.tick();
        assert!((system.elapsed() - BASE_DT * DEFAULT_SPEED as f64).abs() < 1e-15);
        assert!(system.orbiters()[1].1.pos.y > 0.0);
    }

    #[test]
    fn speed_never_drops_below_one() {
        let mut system = sun_and_earth();
        for _ in 0..10 {
            system.slow_down();
        }
        assert_eq!(system.speed_factor(), 1);
        system.speed_up();
        system.speed_up();
        assert_eq!(system.speed_factor(), 3);
    }

    #[test]
    fn balance_cancels_momentum() {
        let mut system = sun_and_earth();
        assert!(system.total_momentum().length() > 1e-6);
        system.balance_momentum();
        assert!(system.total_momentum().length() < 1e-18);
        let sun_vel = system.orbiters()[0].1.vel;
        assert!((sun_vel.y + 3.0e-6 * 2.0 * std::f64::consts::PI).abs() < 1e-18);
    }

    #[test]
    fn step_moves_with_updated_velocity() {
        let mut system = sun_and_earth();
        system.step(0.01);
        let earth = &system.orbiters()[1].1;
        // Pulled straight in by G / r^2
        assert!((earth.acc.x + GRAV_CONSTANT).abs() < 1e-9);
        let vx = -GRAV_CONSTANT * 0.01;
        assert!((earth.vel.x - vx).abs() < 1e-12);
        assert!((earth.pos.x - (1.0 + vx * 0.01)).abs() < 1e-12);
    }

    #[test]
    fn energy_is_roughly_conserved() {
        let mut system = sun_and_earth();
        system.balance_momentum();
        let start = system.total_energy();
        for _ in 0..1000 {
            system.step(0.001);
        }
        let drift = ((system.total_energy() - start) / start).abs();
        assert!(drift < 1e-3, "energy drifted by {}", drift);
    }
}
