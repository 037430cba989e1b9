//! Handles the state for the bouncing ball viewer.

use simulator::ball::BallArena;

use ggez::event::{self, EventHandler, KeyCode};
use ggez::nalgebra::Point2;
use ggez::{
    graphics::{self, DrawMode, DrawParam, MeshBuilder},
    input::keyboard,
    timer, Context, GameResult,
};

use graphics::Color;

pub struct HexagonState {
    arena: BallArena,
}

impl HexagonState {
    pub fn new(_ctx: &mut Context, arena: BallArena) -> Self {
        HexagonState { arena }
    }

    /// Fix the screen space to always have (0, 0) in the corner and (w, h) in the other.
    fn fix_coordinates(&mut self, ctx: &mut Context, width: f32, height: f32) -> GameResult<()> {
        let rect = graphics::Rect::new(0.0, 0.0, width, height);
        graphics::set_screen_coordinates(ctx, rect)
    }
}

impl EventHandler for HexagonState {
    fn update(&mut self, ctx: &mut Context) -> GameResult<()> {
        const DESIRED_FPS: u32 = 60;
        while timer::check_update_time(ctx, DESIRED_FPS) {
            if keyboard::is_key_pressed(ctx, KeyCode::Escape) {
                event::quit(ctx);
            }
            self.arena.step(1.0 / DESIRED_FPS as f64);
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult<()> {
        graphics::clear(ctx, Color::from_rgb(30, 30, 30));

        let walls: Vec<Point2<f32>> = self
            .arena
            .vertices()
            .iter()
            .map(|v| Point2::new(v.x as f32, v.y as f32))
            .collect();
        let ball = self.arena.ball();

        let mesh = MeshBuilder::new()
            .polygon(DrawMode::stroke(3.0), &walls, Color::from_rgb(200, 200, 200))?
            .circle(
                DrawMode::fill(),
                Point2::new(ball.pos.x as f32, ball.pos.y as f32),
                ball.radius as f32,
                0.1,
                Color::from_rgb(255, 50, 50),
            )
            .build(ctx)?;
        graphics::draw(ctx, &mesh, DrawParam::default())?;

        graphics::present(ctx)
    }

    fn resize_event(&mut self, ctx: &mut Context, width: f32, height: f32) {
        if let Err(e) = self.fix_coordinates(ctx, width, height) {
            log::warn!("couldn't resize: {}", e);
        }
    }
}
