use game_core::{Aabb, FrameView};
use wgpu::util::DeviceExt;
use wgpu::*;

use crate::camera::{Camera, CameraUniform};

/// Two paddles and a ball
pub const MAX_INSTANCES: usize = 3;

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, width, height
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    pub fn from_bounds(bounds: &Aabb) -> Self {
        let size = bounds.size();
        Self {
            transform: [bounds.min.x, bounds.min.y, size.x, size.y],
            tint: WHITE,
        }
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let instances = device.create_buffer(&BufferDescriptor {
        label: Some("Instance Buffer"),
        size: (std::mem::size_of::<InstanceData>() * MAX_INSTANCES) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        instances,
    }
}

/// Rectangles to draw for a frame, paddles first
pub fn instances_from_view(view: &FrameView) -> Vec<InstanceData> {
    view.paddles
        .iter()
        .chain(view.ball.iter())
        .take(MAX_INSTANCES)
        .map(InstanceData::from_bounds)
        .collect()
}
