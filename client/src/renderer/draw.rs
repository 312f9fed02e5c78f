use game_core::FrameView;
use log::warn;
use wgpu::*;

use super::resources::instances_from_view;
use super::{GpuRenderer, RenderError};

pub fn draw_frame(renderer: &mut GpuRenderer, view: &FrameView) -> Result<(), RenderError> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            warn!("Surface lost or outdated, reconfiguring");
            renderer.reconfigure();
            return Ok(());
        }
        Err(SurfaceError::Timeout) => {
            warn!("Timed out waiting for the next frame");
            return Ok(());
        }
        Err(SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
        Err(e) => return Err(RenderError::Surface(e)),
    };
    let target = output.texture.create_view(&TextureViewDescriptor::default());

    let instances = instances_from_view(view);
    if !instances.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.instances, 0, bytemuck::cast_slice(&instances));
    }

    let mut encoder = renderer.device.create_command_encoder(&CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });
    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &target,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_rects(renderer, &mut pass, instances.len() as u32);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn draw_rects(renderer: &GpuRenderer, pass: &mut RenderPass<'_>, count: u32) {
    if count == 0 {
        return;
    }
    pass.set_pipeline(&renderer.pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(0, renderer.mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(renderer.mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
    pass.draw_indexed(0..renderer.mesh.index_count, 0, 0..count);
}
