//! Renderer-agnostic draw list built from session state

use glam::Vec2;

use crate::{Aabb, Engine, MatchState, RandomSource, Side};

pub type Color = [f32; 4];

pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

pub const PROMPT_TEXT: &str = "Play Best of:";
pub const OPTIONS_TEXT: &str = "(3) Best of 3 | (5) Best of 5 | (7) Best of 7 | (ESC) Exit";

/// Vertical offsets of the prompt and options lines below the banner
pub const PROMPT_OFFSET: f32 = 50.0;
pub const OPTIONS_OFFSET: f32 = 100.0;
pub const SCORE_TOP: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Center,
    TopLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Large, // Winner banner
    Score,
    Small, // Menu lines
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect(Aabb),
    Ellipse(Aabb),
    Line {
        from: Vec2,
        to: Vec2,
    },
    Text {
        text: String,
        pos: Vec2,
        anchor: TextAnchor,
        size: TextSize,
    },
}

pub fn winner_banner(winner: Side) -> &'static str {
    match winner {
        Side::Player => "Player Wins!",
        Side::Ai => "AI Wins!",
    }
}

/// Draw commands for the current frame, in paint order
pub fn draw_list<R: RandomSource>(engine: &Engine<R>, state: &MatchState) -> Vec<DrawCommand> {
    let map = engine.map();
    let mut commands = vec![DrawCommand::Clear(BLACK)];

    if let Some(winner) = state.winner() {
        let center = Vec2::new(map.width / 2.0, map.height / 2.0);
        let lines = [
            (winner_banner(winner), 0.0, TextSize::Large),
            (PROMPT_TEXT, PROMPT_OFFSET, TextSize::Small),
            (OPTIONS_TEXT, OPTIONS_OFFSET, TextSize::Small),
        ];
        for (text, offset, size) in lines {
            commands.push(DrawCommand::Text {
                text: text.to_string(),
                pos: center + Vec2::new(0.0, offset),
                anchor: TextAnchor::Center,
                size,
            });
        }
        return commands;
    }

    let score = engine.score();
    commands.push(DrawCommand::Rect(engine.player().rect()));
    commands.push(DrawCommand::Rect(engine.ai().rect()));
    commands.push(DrawCommand::Ellipse(engine.ball().rect()));
    commands.push(DrawCommand::Line {
        from: Vec2::new(map.width / 2.0, 0.0),
        to: Vec2::new(map.width / 2.0, map.height),
    });
    for (value, x) in [(score.player, map.width / 4.0), (score.ai, map.width * 3.0 / 4.0)] {
        commands.push(DrawCommand::Text {
            text: value.to_string(),
            pos: Vec2::new(x, SCORE_TOP),
            anchor: TextAnchor::TopLeft,
            size: TextSize::Score,
        });
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, MatchAction, ScriptedRng};

    fn engine() -> Engine<ScriptedRng> {
        Engine::with_rng(Config::new(), ScriptedRng::new(vec![true]))
    }

    #[test]
    fn test_running_draw_list() {
        let engine = engine();
        let commands = draw_list(&engine, &MatchState::default());

        assert_eq!(commands[0], DrawCommand::Clear(BLACK));
        assert_eq!(commands[1], DrawCommand::Rect(engine.player().rect()));
        assert_eq!(commands[2], DrawCommand::Rect(engine.ai().rect()));
        assert_eq!(commands[3], DrawCommand::Ellipse(engine.ball().rect()));
        assert_eq!(
            commands[4],
            DrawCommand::Line {
                from: Vec2::new(400.0, 0.0),
                to: Vec2::new(400.0, 600.0)
            }
        );
        assert_eq!(
            commands[6],
            DrawCommand::Text {
                text: "0".to_string(),
                pos: Vec2::new(600.0, 20.0),
                anchor: TextAnchor::TopLeft,
                size: TextSize::Score,
            }
        );
        assert_eq!(commands.len(), 7);
    }

    #[test]
    fn test_game_over_draw_list() {
        let engine = engine();
        let mut state = MatchState::default();
        state.transition(MatchAction::ScoreReached(Side::Ai));

        let commands = draw_list(&engine, &state);
        let texts: Vec<(&str, Vec2)> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, pos, .. } => Some((text.as_str(), *pos)),
                _ => None,
            })
            .collect();

        assert_eq!(
            texts,
            vec![
                ("AI Wins!", Vec2::new(400.0, 300.0)),
                ("Play Best of:", Vec2::new(400.0, 350.0)),
                (OPTIONS_TEXT, Vec2::new(400.0, 400.0)),
            ]
        );
        assert!(!commands.iter().any(|c| matches!(c, DrawCommand::Rect(_))));
    }
}
