//! Window creation

use std::sync::Arc;

use game_core::Params;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

pub struct PlatformConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            title: "Ping Pong".to_string(),
            width: Params::ARENA_WIDTH as u32,
            height: Params::ARENA_HEIGHT as u32,
        }
    }
}

/// Open a fixed-size window matching the arena
pub fn create_window(
    event_loop: &ActiveEventLoop,
    config: &PlatformConfig,
) -> Result<Arc<Window>, String> {
    let attrs = WindowAttributes::default()
        .with_title(&config.title)
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .with_resizable(false);

    let window = event_loop
        .create_window(attrs)
        .map_err(|e| format!("Failed to create window: {:?}", e))?;
    Ok(Arc::new(window))
}
