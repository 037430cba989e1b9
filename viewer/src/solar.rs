//! Handles the state for the solar system viewer.

use simulator::SolarSystem;

use ggez::event::{self, EventHandler, KeyCode};
use ggez::nalgebra::Point2;
use ggez::{
    graphics::{self, DrawMode, DrawParam, MeshBuilder, Text},
    input::keyboard,
    timer, Context, GameResult,
};

use graphics::Color;
use std::collections::HashSet;

/// The state of the solar system.
pub struct SolarState {
    solar_system: SolarSystem,
    /// All the keypresses last frame
    prev_keys: HashSet<KeyCode>,
}

impl SolarState {
    pub fn new(_ctx: &mut Context, solar_system: SolarSystem) -> Self {
        SolarState {
            solar_system,
            prev_keys: HashSet::new(),
        }
    }

    /// Fix the screen space to always have (0, 0) in the corner and (w, h) in the other.
    fn fix_coordinates(&mut self, ctx: &mut Context, width: f32, height: f32) -> GameResult<()> {
        let rect = graphics::Rect::new(0.0, 0.0, width, height);
        graphics::set_screen_coordinates(ctx, rect)
    }

    /// Was this key pressed just now, and not last frame?
    fn just_pressed(&self, ctx: &Context, key: KeyCode) -> bool {
        keyboard::is_key_pressed(ctx, key) && !self.prev_keys.contains(&key)
    }
}

impl EventHandler for SolarState {
    fn update(&mut self, ctx: &mut Context) -> GameResult<()> {
        const DESIRED_FPS: u32 = 60;
        while timer::check_update_time(ctx, DESIRED_FPS) {
            if self.just_pressed(ctx, KeyCode::Space) {
                self.solar_system.toggle_pause();
            }
            if self.just_pressed(ctx, KeyCode::Up) {
                self.solar_system.speed_up();
            }
            if self.just_pressed(ctx, KeyCode::Down) {
                self.solar_system.slow_down();
            }
            if keyboard::is_key_pressed(ctx, KeyCode::Q)
                || keyboard::is_key_pressed(ctx, KeyCode::Escape)
            {
                event::quit(ctx);
            }

            self.solar_system.tick();

            // Update previous keys
            self.prev_keys = keyboard::pressed_keys(ctx).to_owned();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult<()> {
        graphics::clear(ctx, graphics::BLACK);

        let (scr_w, scr_h) = graphics::drawable_size(ctx);
        let orbiters = self.solar_system.orbiters();

        let mut mesh = MeshBuilder::new();
        for (idx, orbiter) in orbiters.iter().enumerate() {
            // Make (0, 0) in AU the center of the screen, with +y going up
            let draw_pos = Point2::new(
                scr_w / 2f32 + (orbiter.1.pos.x * SCALE) as f32,
                scr_h / 2f32 - (orbiter.1.pos.y * SCALE) as f32,
            );
            let draw_radius = orbiter.0.radius as f32;

            // Everything but the Sun gets a faint ring
            if idx != 0 {
                mesh.circle(
                    DrawMode::stroke(1.0),
                    draw_pos,
                    (draw_radius / 2.0).max(1.0),
                    0.1,
                    Color::from_rgb(50, 50, 50),
                );
            }
            mesh.circle(
                DrawMode::fill(),
                draw_pos,
                draw_radius,
                0.1,
                Color::from_rgb_u32(orbiter.0.color),
            );
        }
        let mesh = mesh.build(ctx)?;
        graphics::draw(ctx, &mesh, DrawParam::default())?;

        let status = Text::new(format!(
            "Speed: {}x [UP/DOWN] | {} [SPACE]",
            self.solar_system.speed_factor(),
            if self.solar_system.is_paused() {
                "Paused"
            } else {
                "Running"
            }
        ));
        graphics::draw(ctx, &status, DrawParam::default().dest(Point2::new(10.0, 10.0)))?;

        graphics::present(ctx)
    }

    fn resize_event(&mut self, ctx: &mut Context, width: f32, height: f32) {
        if let Err(e) = self.fix_coordinates(ctx, width, height) {
            log::warn!("couldn't resize: {}", e);
        }
    }
}

/// Pixels per AU
const SCALE: f64 = 10.0;
