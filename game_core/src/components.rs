use glam::Vec2;

use crate::{clamp_top, Aabb, RandomSource};

/// Which end of the arena a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player, // Left, keyboard controlled
    Ai,     // Right, tracks the ball
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Ai => "AI",
        }
    }
}

/// Paddle component - a vertical rectangle guarding one side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,  // Top-left corner; x never changes after spawn
    pub size: Vec2, // Width, height
    pub step: f32,  // Pixels moved per frame
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, step: f32) -> Self {
        Self {
            side,
            pos,
            size,
            step,
        }
    }

    /// Shift vertically by `delta`, keeping the paddle fully on screen
    pub fn move_by(&mut self, delta: f32, screen_height: f32) {
        self.pos.y = clamp_top(self.pos.y + delta, self.size.y, screen_height);
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Chase the ball's vertical centre at most one step per frame.
    ///
    /// Snaps onto the ball when it is within a step, so the paddle never
    /// oscillates around a stationary target.
    pub fn auto_track(&mut self, ball: &Ball, screen_height: f32) {
        let diff = ball.rect().center().y - self.center_y();
        let delta = if diff.abs() <= self.step {
            diff
        } else {
            self.step.copysign(diff)
        };
        self.move_by(delta, screen_height);
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,   // Top-left corner
    pub spawn: Vec2, // Where `reset` puts the ball back
    pub size: Vec2,
    pub vel: Vec2, // Pixels per frame; neither component is ever zero
}

impl Ball {
    pub fn new(spawn: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self {
            pos: spawn,
            spawn,
            size,
            vel,
        }
    }

    /// Place a new ball at `spawn` heading in a random diagonal direction
    pub fn serve<R: RandomSource + ?Sized>(
        spawn: Vec2,
        size: Vec2,
        speed: Vec2,
        rng: &mut R,
    ) -> Self {
        let vx = speed.x.abs() * rng.sign();
        let vy = speed.y.abs() * rng.sign();
        Self::new(spawn, size, Vec2::new(vx, vy))
    }

    /// Advance one frame. Returns true when the ball bounced off the top or
    /// bottom wall.
    ///
    /// The position is never corrected: a ball that overshoots a wall by up to
    /// one step comes back inside on the next frame.
    pub fn advance(&mut self, screen_height: f32) -> bool {
        self.pos += self.vel;

        let wall_hit = self.pos.y <= 0.0 || self.pos.y + self.size.y >= screen_height;
        if wall_hit {
            self.vel.y = -self.vel.y;
        }
        wall_hit
    }

    /// Bounce off whichever paddle the ball overlaps, player paddle first.
    ///
    /// A paddle only deflects a ball travelling toward it, so a ball still
    /// overlapping after a bounce is not flipped back on the next frame.
    pub fn check_collision(&mut self, player: &Paddle, ai: &Paddle) -> Option<Side> {
        let rect = self.rect();

        if rect.intersects(&player.rect()) {
            if self.vel.x < 0.0 {
                self.vel.x = -self.vel.x;
                return Some(player.side);
            }
        } else if rect.intersects(&ai.rect()) && self.vel.x > 0.0 {
            self.vel.x = -self.vel.x;
            return Some(ai.side);
        }

        None
    }

    /// Return to the spawn point and serve again.
    ///
    /// The horizontal direction is reversed: the ball always leaves the arena
    /// moving toward the side that conceded, so the next serve heads toward
    /// the scorer. The vertical direction is re-rolled.
    pub fn reset<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.pos = self.spawn;
        self.vel.x = -self.vel.x;
        self.vel.y = self.vel.y.abs() * rng.sign();
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Up and down held together cancel out
    pub fn from_keys(up: bool, down: bool) -> Self {
        let dir = match (up, down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        };
        Self { dir }
    }
}
