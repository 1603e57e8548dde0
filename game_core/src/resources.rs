use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }

    /// Player is checked first, so it wins the (unreachable) tie
    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.ai >= win_score {
            Some(Side::Ai)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Something that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    WallHit,
    PaddleHit(Side),
    Scored(Side),
}

/// Receives game events, e.g. to play sounds
pub trait EventSink {
    fn on_event(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn on_event(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Events that occurred during this frame, in the order they happened
#[derive(Debug, Clone, Default)]
pub struct Events {
    list: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.list.push(event);
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = GameEvent> + '_ {
        self.list.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn contains(&self, event: GameEvent) -> bool {
        self.list.contains(&event)
    }

    /// Hand every event to `sink`, oldest first
    pub fn dispatch(&self, sink: &mut dyn EventSink) {
        for event in self.iter() {
            sink.on_event(event);
        }
    }
}

/// Source of the coin flips used for serve directions
pub trait RandomSource {
    fn flip(&mut self) -> bool;

    /// +1.0 or -1.0
    fn sign(&mut self) -> f32 {
        if self.flip() {
            1.0
        } else {
            -1.0
        }
    }
}

/// Random number generator
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for GameRng {
    fn flip(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }
}

/// Replays a fixed pattern of flips, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    pattern: Vec<bool>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(pattern: Vec<bool>) -> Self {
        Self { pattern, cursor: 0 }
    }
}

impl RandomSource for ScriptedRng {
    fn flip(&mut self) -> bool {
        if self.pattern.is_empty() {
            return true;
        }
        let value = self.pattern[self.cursor % self.pattern.len()];
        self.cursor += 1;
        value
    }
}
