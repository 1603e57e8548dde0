//! Text drawn with egui on top of the instanced scene.
//!
//! Each frame goes through `prepare()` (lay out labels and tessellate),
//! `upload()` (textures and buffers, borrows the encoder), `paint()` (a second
//! render pass that loads the scene) and `cleanup()` (free stale textures).

use std::sync::Arc;

use game_core::{DrawCommand, TextAnchor, TextSize};
use winit::window::Window;

/// A piece of text in egui points, ready for the painter
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub pos: egui::Pos2,
    pub align: egui::Align2,
    pub size: f32,
}

/// Font height in arena pixels
pub fn font_size(size: TextSize) -> f32 {
    match size {
        TextSize::Large => 54.0,
        TextSize::Score => 30.0,
        TextSize::Small => 26.0,
    }
}

fn align(anchor: TextAnchor) -> egui::Align2 {
    match anchor {
        TextAnchor::Center => egui::Align2::CENTER_CENTER,
        TextAnchor::TopLeft => egui::Align2::LEFT_TOP,
    }
}

/// Pick the text out of a draw list and map it from arena pixels onto a
/// screen `screen` points large.
///
/// A `Clear` drops everything before it, the same way it does for shapes.
pub fn labels(commands: &[DrawCommand], arena: (f32, f32), screen: egui::Vec2) -> Vec<Label> {
    let scale = egui::vec2(screen.x / arena.0, screen.y / arena.1);
    let mut labels = Vec::new();
    for command in commands {
        match command {
            DrawCommand::Clear(_) => labels.clear(),
            DrawCommand::Text {
                text,
                pos,
                anchor,
                size,
            } => labels.push(Label {
                text: text.clone(),
                pos: egui::pos2(pos.x * scale.x, pos.y * scale.y),
                align: align(*anchor),
                size: font_size(*size) * scale.y,
            }),
            _ => {}
        }
    }
    labels
}

/// Tessellated output of one `prepare()` call
pub struct PreparedText {
    pub primitives: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
}

pub struct TextOverlay {
    window: Arc<Window>,
    egui_ctx: egui::Context,
    egui_winit_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl TextOverlay {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        window: Arc<Window>,
    ) -> Self {
        let egui_ctx = egui::Context::default();
        let egui_winit_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            &*window,
            None,
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(device, surface_format, None, 1, false);

        Self {
            window,
            egui_ctx,
            egui_winit_state,
            egui_renderer,
        }
    }

    pub fn screen_descriptor(&self, size: (u32, u32)) -> egui_wgpu::ScreenDescriptor {
        egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.0, size.1],
            pixels_per_point: self.window.scale_factor() as f32,
        }
    }

    pub fn prepare(&mut self, commands: &[DrawCommand], arena: (f32, f32)) -> PreparedText {
        let raw_input = self.egui_winit_state.take_egui_input(&self.window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            let screen = ctx.screen_rect().size();
            let painter = ctx.layer_painter(egui::LayerId::background());
            for label in labels(commands, arena, screen) {
                painter.text(
                    label.pos,
                    label.align,
                    label.text,
                    egui::FontId::proportional(label.size),
                    egui::Color32::WHITE,
                );
            }
        });

        self.egui_winit_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let primitives = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        PreparedText {
            primitives,
            textures_delta: full_output.textures_delta,
        }
    }

    /// Upload textures and vertex data. Returns any extra command buffers
    /// egui wants submitted ahead of the frame's encoder.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        prepared: &PreparedText,
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
    ) -> Vec<wgpu::CommandBuffer> {
        for (id, image_delta) in &prepared.textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.egui_renderer.update_buffers(
            device,
            queue,
            encoder,
            &prepared.primitives,
            screen_descriptor,
        )
    }

    pub fn paint(
        &self,
        render_pass: &mut wgpu::RenderPass<'static>,
        prepared: &PreparedText,
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
    ) {
        self.egui_renderer
            .render(render_pass, &prepared.primitives, screen_descriptor);
    }

    pub fn cleanup(&mut self, prepared: &PreparedText) {
        for id in &prepared.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Aabb, BLACK};
    use glam::Vec2;

    fn text(s: &str, pos: Vec2, anchor: TextAnchor, size: TextSize) -> DrawCommand {
        DrawCommand::Text {
            text: s.to_string(),
            pos,
            anchor,
            size,
        }
    }

    #[test]
    fn test_labels_keep_arena_positions_at_native_size() {
        let commands = [
            DrawCommand::Clear(BLACK),
            DrawCommand::Rect(Aabb::from_pos_size(Vec2::ZERO, Vec2::ONE)),
            text("3", Vec2::new(200.0, 20.0), TextAnchor::TopLeft, TextSize::Score),
        ];
        let labels = labels(&commands, (800.0, 600.0), egui::vec2(800.0, 600.0));

        assert_eq!(
            labels,
            vec![Label {
                text: "3".to_string(),
                pos: egui::pos2(200.0, 20.0),
                align: egui::Align2::LEFT_TOP,
                size: 30.0,
            }]
        );
    }

    #[test]
    fn test_labels_scale_with_screen() {
        let commands = [text(
            "Player Wins!",
            Vec2::new(400.0, 300.0),
            TextAnchor::Center,
            TextSize::Large,
        )];
        let labels = labels(&commands, (800.0, 600.0), egui::vec2(400.0, 300.0));

        assert_eq!(labels[0].pos, egui::pos2(200.0, 150.0));
        assert_eq!(labels[0].align, egui::Align2::CENTER_CENTER);
        assert_eq!(labels[0].size, 27.0);
    }

    #[test]
    fn test_clear_drops_earlier_labels() {
        let commands = [
            text("old", Vec2::ZERO, TextAnchor::TopLeft, TextSize::Small),
            DrawCommand::Clear(BLACK),
            text("new", Vec2::ZERO, TextAnchor::TopLeft, TextSize::Small),
        ];
        let labels = labels(&commands, (800.0, 600.0), egui::vec2(800.0, 600.0));
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "new");
    }

    #[test]
    fn test_banner_is_largest() {
        assert!(font_size(TextSize::Large) > font_size(TextSize::Score));
        assert!(font_size(TextSize::Score) > font_size(TextSize::Small));
    }
}
