use game_core::{Color, DrawCommand, BLACK, WHITE};
use glam::Vec2;
use wgpu::*;

use super::resources::InstanceData;
use super::Renderer;

/// Instances for one frame, grouped by mesh
#[derive(Debug, Default, PartialEq)]
pub struct Batches {
    pub clear: Color,
    pub rects: Vec<InstanceData>,
    pub ellipses: Vec<InstanceData>,
}

/// Flatten the shapes of a draw list into instanced quads and discs
pub fn build_batches(commands: &[DrawCommand]) -> Batches {
    let mut batches = Batches {
        clear: BLACK,
        ..Default::default()
    };

    for command in commands {
        match command {
            DrawCommand::Clear(color) => {
                batches.clear = *color;
                batches.rects.clear();
                batches.ellipses.clear();
            }
            DrawCommand::Rect(aabb) => batches.rects.push(InstanceData::from_aabb(aabb, WHITE)),
            DrawCommand::Ellipse(aabb) => {
                batches.ellipses.push(InstanceData::from_aabb(aabb, WHITE))
            }
            DrawCommand::Line { from, to } => {
                // Axis-aligned, one pixel thick
                let min = from.min(*to);
                let max = from.max(*to) + Vec2::ONE;
                let aabb = game_core::Aabb::new(min, max);
                batches.rects.push(InstanceData::from_aabb(&aabb, WHITE));
            }
            // Painted by the egui overlay
            DrawCommand::Text { .. } => {}
        }
    }
    batches
}

pub fn draw_frame(renderer: &mut Renderer, commands: &[DrawCommand]) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(tex) => tex,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Reconfigure and skip this frame
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(SurfaceError::Timeout) => {
            log::warn!("Surface timeout, skipping frame");
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let batches = build_batches(commands);
    let instances: Vec<InstanceData> = batches
        .rects
        .iter()
        .chain(batches.ellipses.iter())
        .copied()
        .collect();
    renderer
        .buffers
        .instances
        .upload(&renderer.device, &renderer.queue, &instances);

    {
        let [r, g, b, a] = batches.clear.map(f64::from);
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(wgpu::Color { r, g, b, a }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(
            renderer,
            &mut pass,
            batches.rects.len() as u32,
            batches.ellipses.len() as u32,
        );
    }

    let text = renderer.text.prepare(commands, renderer.arena);
    let screen_descriptor = renderer.text.screen_descriptor(renderer.size);
    let egui_buffers = renderer.text.upload(
        &renderer.device,
        &renderer.queue,
        &mut encoder,
        &text,
        &screen_descriptor,
    );

    {
        let mut pass = encoder
            .begin_render_pass(&RenderPassDescriptor {
                label: Some("Text Pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Load,
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            })
            .forget_lifetime();
        renderer.text.paint(&mut pass, &text, &screen_descriptor);
    }
    renderer.text.cleanup(&text);

    renderer
        .queue
        .submit(egui_buffers.into_iter().chain(std::iter::once(encoder.finish())));
    output.present();

    Ok(())
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>, rects: u32, ellipses: u32) {
    if rects + ellipses == 0 {
        return;
    }
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(1, renderer.buffers.instances.buffer.slice(..));

    // Rects (paddles, divider)
    let (rect_mesh, circle_mesh) = &renderer.meshes;
    if rects > 0 {
        pass.set_vertex_buffer(0, rect_mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(rect_mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.draw_indexed(0..rect_mesh.index_count, 0, 0..rects);
    }

    // Circles (ball)
    if ellipses > 0 {
        pass.set_vertex_buffer(0, circle_mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(circle_mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.draw_indexed(0..circle_mesh.index_count, 0, rects..rects + ellipses);
    }
}
