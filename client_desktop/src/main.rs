//! Desktop Pong: one player against a reactive computer paddle.
//!
//! winit drives the loop via `ApplicationHandler`. Each due tick of the
//! `FrameClock` runs exactly one `Session::frame`, plays the sounds for its
//! events and draws the resulting draw list.

mod audio;
mod camera;
mod clock;
mod input;
mod mesh;
mod platform;
mod renderer;

use std::sync::Arc;
use std::time::Instant;

use game_core::{Config, Engine, Flow, Params, ScoreTarget, Session};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use audio::SoundBank;
use clock::FrameClock;
use input::{map_key, InputState};
use platform::PlatformConfig;
use renderer::Renderer;

/// Everything that needs a live window
struct GameState {
    window: Arc<Window>,
    renderer: Renderer,
    session: Session,
    input: InputState,
    clock: FrameClock,
    sounds: SoundBank,
}

impl GameState {
    fn new(window: Arc<Window>) -> Result<Self, String> {
        let config = Config::new();
        let arena = (config.arena_width, config.arena_height);
        let renderer = pollster::block_on(Renderer::new(window.clone(), arena))?;

        let engine = Engine::from_entropy(config);
        let session = Session::new(engine, ScoreTarget::default());
        let sounds = SoundBank::load(&audio::assets_dir());

        Ok(Self {
            window,
            renderer,
            session,
            input: InputState::new(),
            clock: FrameClock::new(Params::FPS, Instant::now()),
            sounds,
        })
    }

    /// Run one simulation frame and draw it
    fn frame(&mut self) -> Flow {
        let flow = self.session.frame(&self.input.frame_input());
        self.input.end_frame();

        self.session.engine().events().dispatch(&mut self.sounds);

        if let Err(e) = self.renderer.draw(&self.session.draw_list()) {
            log::error!("Render failed: {}", e);
        }
        flow
    }
}

struct App {
    config: PlatformConfig,
    state: Option<GameState>,
}

impl App {
    fn new() -> Self {
        Self {
            config: PlatformConfig::default(),
            state: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let created =
            platform::create_window(event_loop, &self.config).and_then(GameState::new);
        match created {
            Ok(state) => {
                log::info!(
                    "Window created: {}x{}",
                    self.config.width,
                    self.config.height
                );
                self.state = Some(state);
            }
            Err(e) => {
                log::error!("Startup failed: {}", e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = &self.state else {
            return;
        };
        if state.clock.is_due(Instant::now()) {
            state.window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(state.clock.next_tick()));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                state.input.request_quit();
                state.window.request_redraw();
            }

            WindowEvent::Resized(size) => {
                state.renderer.resize(size.width, size.height);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(key) = map_key(code) {
                        match event.state {
                            ElementState::Pressed => state.input.key_down(key),
                            ElementState::Released => state.input.key_up(key),
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                if !state.clock.is_due(now) {
                    return;
                }
                state.clock.tick(now);

                if let Flow::Exit { delay } = state.frame() {
                    log::info!("Exiting after {} frames", state.clock.frame_count);
                    clock::wait(delay);
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Pong starting...");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}
