use std::sync::Arc;
use std::time::Instant;

use game_core::{run_tick, Config, GameState, Params, TickControl};
use glam::Vec2;
use log::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::input::WindowInput;
use crate::renderer::{GpuRenderer, RenderError, StartupError};

/// Everything that exists once the window is up
struct Session {
    window: Arc<Window>,
    renderer: GpuRenderer,
    state: GameState,
}

pub struct App {
    session: Option<Session>,
    input: WindowInput,
    last_frame: Instant,
    startup_error: Option<StartupError>,
    render_error: Option<RenderError>,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: None,
            input: WindowInput::new(),
            last_frame: Instant::now(),
            startup_error: None,
            render_error: None,
        }
    }

    /// Outcome of the run once the event loop has returned
    pub fn finish(self) -> anyhow::Result<()> {
        if let Some(e) = self.startup_error {
            return Err(e.into());
        }
        if let Some(e) = self.render_error {
            return Err(e.into());
        }
        Ok(())
    }

    fn start(event_loop: &ActiveEventLoop) -> Result<Session, StartupError> {
        let attrs = Window::default_attributes()
            .with_title("Pong")
            .with_inner_size(PhysicalSize::new(
                Params::ARENA_WIDTH as u32,
                Params::ARENA_HEIGHT as u32,
            ))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs).map_err(StartupError::Window)?);

        let size = window.inner_size();
        let state = GameState::new(Config::with_arena(size.width as f32, size.height as f32));
        let arena = Vec2::new(state.map().width, state.map().height);
        info!("Window created: {}x{}, arena {}x{}", size.width, size.height, arena.x, arena.y);

        let renderer = pollster::block_on(GpuRenderer::new(window.clone(), arena))?;
        Ok(Session {
            window,
            renderer,
            state,
        })
    }

    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        match run_tick(&mut session.state, &mut self.input, &mut session.renderer, dt) {
            Ok((TickControl::Continue, events)) => {
                if let Some((from, to)) = events.transition {
                    debug!("Tick switched {:?} -> {:?}", from, to);
                }
            }
            Ok((TickControl::Exit, _)) => {
                info!("Quit requested");
                event_loop.exit();
            }
            Err(e) => {
                error!("Render failed: {}", e);
                self.render_error = Some(e);
                event_loop.exit();
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() {
            return;
        }

        match Self::start(event_loop) {
            Ok(session) => {
                session.window.request_redraw();
                self.session = Some(session);
                self.last_frame = Instant::now();
            }
            Err(e) => {
                error!("Startup failed: {}", e);
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(session) = &self.session {
            session.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.input.close_requested();
                // A hidden window may never get another redraw
                if self.session.is_some() {
                    self.tick(event_loop);
                } else {
                    event_loop.exit();
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.input
                        .handle_key(code, &event.logical_key, event.state, event.repeat);
                }
            }
            WindowEvent::Focused(false) => self.input.focus_lost(),
            WindowEvent::RedrawRequested => self.tick(event_loop),
            _ => {}
        }
    }
}
