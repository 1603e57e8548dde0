use glam::Vec2;

use crate::{Params, Side};

/// Game configuration
///
/// Built from [`Params`]; physics is fixed for a session.
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_paddle_x: f32,
    pub ai_paddle_inset: f32,
    pub player_step: f32,
    pub ai_step: f32,
    pub ball_size: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            player_paddle_x: Params::PLAYER_PADDLE_X,
            ai_paddle_inset: Params::AI_PADDLE_INSET,
            player_step: Params::PLAYER_STEP,
            ai_step: Params::AI_STEP,
            ball_size: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for the paddle guarding `side`
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.player_paddle_x,
            Side::Ai => self.arena_width - self.ai_paddle_inset,
        }
    }

    /// Top edge of a freshly spawned paddle (vertically centred)
    pub fn paddle_spawn_y(&self) -> f32 {
        self.arena_height / 2.0 - self.paddle_height / 2.0
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    /// Per-frame step for the paddle guarding `side`
    pub fn paddle_step(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.player_step,
            Side::Ai => self.ai_step,
        }
    }

    /// Ball spawn point (top-left corner of the ball at arena centre)
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    pub fn ball_size(&self) -> Vec2 {
        Vec2::splat(self.ball_size)
    }

    /// Clamp a paddle's top edge to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        crate::clamp_top(y, self.paddle_height, self.arena_height)
    }
}
