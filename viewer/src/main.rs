mod hexagon;
mod solar;

use anyhow::{anyhow, Context as _, Result};
use clap::{Parser, Subcommand};
use ggez::{
    conf::{Conf, WindowMode, WindowSetup},
    event, ContextBuilder,
};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "A ball in a spinning hexagon, or the solar system")]
struct Args {
    #[command(subcommand)]
    sim: Sim,
}

#[derive(Subcommand, Debug)]
enum Sim {
    /// Bounce a ball around inside a spinning hexagon
    Hexagon {
        /// JSON5 scene file. Uses the built-in hexagon if left out.
        #[arg(short, long)]
        scene: Option<PathBuf>,
    },
    /// Watch the planets go round
    Solar {
        /// JSON5 scene file. Uses our solar system if left out.
        #[arg(short, long)]
        scene: Option<PathBuf>,
    },
}

fn read_scene(path: &Path) -> Result<String> {
    info!("loading scene from {}", path.display());
    std::fs::read_to_string(path).with_context(|| format!("couldn't read {}", path.display()))
}

pub fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (title, width, height) = match args.sim {
        Sim::Hexagon { .. } => ("Bouncing Ball in a Spinning Hexagon", 800.0, 600.0),
        Sim::Solar { .. } => ("Solar System Simulation", 800.0, 800.0),
    };

    let c = Conf::new();
    let (ref mut ctx, ref mut event_loop) = ContextBuilder::new("orbit_simulator", "me")
        .conf(c)
        .window_setup(WindowSetup {
            title: title.to_owned(),
            ..Default::default()
        })
        .window_mode(WindowMode {
            width,
            height,
            resizable: true,
            ..Default::default()
        })
        .build()
        .map_err(|e| anyhow!("couldn't open a window: {}", e))?;

    let run = match args.sim {
        Sim::Hexagon { scene } => {
            let scene = match scene {
                Some(path) => loader::load_hexagon(&read_scene(&path)?)?,
                None => loader::prefabs::arenas::spinning_hexagon(),
            };
            let state = &mut hexagon::HexagonState::new(ctx, scene.into_arena());
            event::run(ctx, event_loop, state)
        }
        Sim::Solar { scene } => {
            let scene = match scene {
                Some(path) => loader::load_solar(&read_scene(&path)?)?,
                None => loader::prefabs::systems::ours(),
            };
            let state = &mut solar::SolarState::new(ctx, scene.into_system());
            event::run(ctx, event_loop, state)
        }
    };
    run.map_err(|e| anyhow!("simulation crashed: {}", e))
}
