pub mod draw;
pub mod init;
pub mod overlay;
pub mod pipeline;
pub mod resources;

use std::sync::Arc;

use game_core::DrawCommand;
use overlay::TextOverlay;
use resources::GameBuffers;
use wgpu::*;
use winit::window::Window;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};

#[allow(dead_code)]
pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub arena: (f32, f32),

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle
    pub text: TextOverlay,
}

impl Renderer {
    /// `arena` is the simulation's size in pixels; the camera maps it onto the window
    pub async fn new(window: Arc<Window>, arena: (f32, f32)) -> Result<Self, String> {
        let ctx = init::init_wgpu(window.clone()).await?;
        let camera = Camera::pixel_space(arena.0, arena.1);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        // Meshes
        let rect_mesh = create_rectangle(&ctx.device);
        let circle_mesh = create_circle(&ctx.device, 24);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        let text = TextOverlay::new(&ctx.device, ctx.config.format, window);

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            arena,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            meshes: (rect_mesh, circle_mesh),
            text,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, commands: &[DrawCommand]) -> Result<(), String> {
        draw::draw_frame(self, commands)
    }
}
