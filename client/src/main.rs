//! Native Pong client: a winit window drawing the game with wgpu

mod app;
mod camera;
mod input;
mod mesh;
mod renderer;

use anyhow::Context;
use winit::event_loop::EventLoop;

use app::App;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new();
    event_loop.run_app(&mut app).context("Event loop error")?;

    app.finish()
}
