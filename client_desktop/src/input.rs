//! Keyboard input handling
//!
//! Movement keys are level-triggered (held), menu keys are edge-triggered and
//! kept in press order until the next simulation frame consumes them.

use std::collections::HashSet;

use game_core::{Command, FrameInput, ScoreTarget};
use winit::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Digit3,
    Digit5,
    Digit7,
    Escape,
}

impl Key {
    /// Menu command bound to this key, if any
    pub fn command(self) -> Option<Command> {
        match self {
            Key::Digit3 => Some(Command::SelectTarget(ScoreTarget::BestOf3)),
            Key::Digit5 => Some(Command::SelectTarget(ScoreTarget::BestOf5)),
            Key::Digit7 => Some(Command::SelectTarget(ScoreTarget::BestOf7)),
            Key::Escape => Some(Command::Escape),
            Key::Up | Key::Down => None,
        }
    }
}

pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(Key::Down),
        KeyCode::Digit3 | KeyCode::Numpad3 => Some(Key::Digit3),
        KeyCode::Digit5 | KeyCode::Numpad5 => Some(Key::Digit5),
        KeyCode::Digit7 | KeyCode::Numpad7 => Some(Key::Digit7),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<Key>,
    pressed: Vec<Key>,
    quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Auto-repeat presses are dropped: a key counts once until released
    pub fn key_down(&mut self, key: Key) {
        if self.held.insert(key) {
            self.pressed.push(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Snapshot for the next simulation frame
    pub fn frame_input(&self) -> FrameInput {
        let mut commands: Vec<Command> = Vec::new();
        if self.quit {
            commands.push(Command::Quit);
        }
        commands.extend(self.pressed.iter().filter_map(|key| key.command()));

        FrameInput {
            up: self.is_held(Key::Up),
            down: self.is_held(Key::Down),
            commands,
        }
    }

    /// Forget edge-triggered presses once a frame has consumed them
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(KeyCode::KeyW), Some(Key::Up));
        assert_eq!(map_key(KeyCode::ArrowDown), Some(Key::Down));
        assert_eq!(map_key(KeyCode::Digit5), Some(Key::Digit5));
        assert_eq!(map_key(KeyCode::Escape), Some(Key::Escape));
        assert_eq!(map_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_held_keys_drive_movement() {
        let mut input = InputState::new();
        input.key_down(Key::Up);
        input.end_frame();

        let frame = input.frame_input();
        assert!(frame.up && !frame.down);
        assert!(frame.commands.is_empty(), "Movement keys are not commands");

        input.key_up(Key::Up);
        assert!(!input.frame_input().up);
    }

    #[test]
    fn test_presses_are_ordered_and_cleared() {
        let mut input = InputState::new();
        input.key_down(Key::Digit7);
        input.key_down(Key::Escape);

        assert_eq!(
            input.frame_input().commands,
            vec![
                Command::SelectTarget(ScoreTarget::BestOf7),
                Command::Escape
            ]
        );

        input.end_frame();
        assert!(input.frame_input().commands.is_empty());
        assert!(input.pressed.is_empty());
    }

    #[test]
    fn test_repeat_does_not_press_twice() {
        let mut input = InputState::new();
        input.key_down(Key::Digit3);
        input.end_frame();
        input.key_down(Key::Digit3); // OS auto-repeat while still held
        assert!(input.pressed.is_empty());

        input.key_up(Key::Digit3);
        input.key_down(Key::Digit3);
        assert_eq!(input.pressed, vec![Key::Digit3]);
    }

    #[test]
    fn test_quit_comes_first_and_sticks() {
        let mut input = InputState::new();
        input.key_down(Key::Digit5);
        input.request_quit();

        let commands = input.frame_input().commands;
        assert_eq!(commands[0], Command::Quit);

        input.end_frame();
        assert_eq!(input.frame_input().commands, vec![Command::Quit]);
    }
}
