pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use game_core::{FrameView, Renderer};
use glam::Vec2;
use log::info;
use wgpu::*;
use winit::window::Window;

use crate::camera::{Camera, CameraUniform};
use crate::mesh::Mesh;
use resources::GameBuffers;

/// Failures while bringing up the window and GPU
#[derive(Debug)]
pub enum StartupError {
    Window(winit::error::OsError),
    CreateSurface(CreateSurfaceError),
    NoAdapter,
    RequestDevice(RequestDeviceError),
    NoSurfaceFormat,
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Window(e) => write!(f, "Window creation failed: {}", e),
            Self::CreateSurface(e) => write!(f, "Failed to create surface: {}", e),
            Self::NoAdapter => write!(f, "Failed to find a GPU adapter"),
            Self::RequestDevice(e) => write!(f, "Failed to create device: {}", e),
            Self::NoSurfaceFormat => write!(f, "Surface reports no texture formats"),
        }
    }
}

impl std::error::Error for StartupError {}

/// Failures that stop the frame loop
#[derive(Debug)]
pub enum RenderError {
    OutOfMemory,
    Surface(SurfaceError),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfMemory => write!(f, "GPU out of memory"),
            Self::Surface(e) => write!(f, "Surface error: {}", e),
        }
    }
}

impl std::error::Error for RenderError {}

pub struct GpuRenderer {
    pub window: Arc<Window>,
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    pub pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,
    pub buffers: GameBuffers,
    pub mesh: Mesh,

    // Arena the camera currently covers
    pub arena: Vec2,
    pub title: String,
}

impl GpuRenderer {
    pub async fn new(window: Arc<Window>, arena: Vec2) -> Result<Self, StartupError> {
        let ctx = init::init_wgpu(window.clone()).await?;
        let camera = Camera::orthographic(arena.x, arena.y);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);
        let mesh = Mesh::rectangle(&ctx.device, &ctx.queue);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        info!("Renderer ready at {}x{}", ctx.size.0, ctx.size.1);

        Ok(Self {
            window,
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            pipeline: pipes.pipeline,
            camera_bind_group,
            buffers,
            mesh,
            arena,
            title: String::new(),
        })
    }

    /// Re-apply the surface configuration after it was lost or went stale
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    fn update_camera(&mut self, arena: Vec2) {
        if arena == self.arena {
            return;
        }
        let uniform = CameraUniform::from_camera(&Camera::orthographic(arena.x, arena.y));
        self.queue
            .write_buffer(&self.buffers.camera, 0, bytemuck::cast_slice(&[uniform]));
        self.arena = arena;
    }

    fn update_title(&mut self, view: &FrameView) {
        let title = format!("Pong  {}", view.hud_line());
        if title != self.title {
            self.window.set_title(&title);
            self.title = title;
        }
    }
}

impl Renderer for GpuRenderer {
    type Error = RenderError;

    fn render(&mut self, view: &FrameView) -> Result<(), RenderError> {
        self.update_camera(view.arena);
        self.update_title(view);
        draw::draw_frame(self, view)
    }
}
