use std::time::Duration;

use crate::{
    draw_list, DrawCommand, Engine, GameRng, MatchAction, MatchPhase, MatchState, PaddleIntent,
    RandomSource, ScoreTarget,
};

/// Discrete (edge-triggered) requests from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,   // Window closed
    Escape, // ESC pressed
    SelectTarget(ScoreTarget),
}

/// Input snapshot for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub commands: Vec<Command>, // In the order they were pressed
}

impl FrameInput {
    pub fn intent(&self) -> PaddleIntent {
        PaddleIntent::from_keys(self.up, self.down)
    }

    fn quit_requested(&self) -> bool {
        self.commands.contains(&Command::Quit)
    }
}

/// What the event loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit { delay: Duration },
}

/// Top-level game state: the simulation plus the match it belongs to
pub struct Session<R: RandomSource = GameRng> {
    engine: Engine<R>,
    state: MatchState,
}

impl<R: RandomSource> Session<R> {
    pub fn new(engine: Engine<R>, target: ScoreTarget) -> Self {
        Self {
            engine,
            state: MatchState::new(target),
        }
    }

    /// Run one frame of the game loop
    pub fn frame(&mut self, input: &FrameInput) -> Flow {
        self.engine.clear_events();

        // Winner check happens before anything moves
        self.state.check_score(&self.engine.score());

        match self.state.phase() {
            MatchPhase::Running => {
                if input.quit_requested() {
                    self.state.transition(MatchAction::Quit);
                    return Flow::Exit {
                        delay: Duration::ZERO,
                    };
                }
                self.engine.update(input.intent());
                Flow::Continue
            }
            MatchPhase::GameOver { .. } => self.handle_menu(&input.commands),
            MatchPhase::Terminated => Flow::Exit {
                delay: Duration::ZERO,
            },
        }
    }

    /// Apply every menu key pressed this frame, in order.
    ///
    /// A replay selection resets the game straight away but the match only
    /// resumes once the whole queue is handled, so ESC or a close request
    /// later in the same frame still ends the game.
    fn handle_menu(&mut self, commands: &[Command]) -> Flow {
        let mut replay = None;
        for command in commands {
            let action = match *command {
                Command::Quit => MatchAction::Quit,
                Command::Escape => MatchAction::Exit,
                Command::SelectTarget(target) => {
                    self.engine.reset_game();
                    replay = Some(target);
                    continue;
                }
            };

            let result = self.state.transition(action);
            if result.success() {
                return Flow::Exit {
                    delay: result.exit_delay().unwrap_or_default(),
                };
            }
        }

        if let Some(target) = replay {
            self.state.transition(MatchAction::SelectTarget(target));
        }
        Flow::Continue
    }

    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine<R> {
        &mut self.engine
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn draw_list(&self) -> Vec<DrawCommand> {
        draw_list(&self.engine, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, GameEvent, Score, ScriptedRng, Side};
    use glam::Vec2;

    fn session() -> Session<ScriptedRng> {
        let engine = Engine::with_rng(Config::new(), ScriptedRng::new(vec![true]));
        Session::new(engine, ScoreTarget::default())
    }

    fn press(command: Command) -> FrameInput {
        FrameInput {
            commands: vec![command],
            ..Default::default()
        }
    }

    fn finished(score: Score) -> Session<ScriptedRng> {
        let mut session = session();
        session.engine_mut().set_score(score);
        session.frame(&FrameInput::default());
        assert!(session.state().is_game_over());
        session
    }

    #[test]
    fn test_escape_ignored_while_running() {
        let mut session = session();
        assert_eq!(session.frame(&press(Command::Escape)), Flow::Continue);
        assert!(session.state().is_running());
        assert_eq!(session.engine().ball().pos, Vec2::new(405.0, 303.0));
    }

    #[test]
    fn test_quit_while_running_exits_immediately() {
        let mut session = session();
        let flow = session.frame(&press(Command::Quit));
        assert_eq!(
            flow,
            Flow::Exit {
                delay: Duration::ZERO
            }
        );
        assert!(session.state().is_terminated());
        assert_eq!(session.engine().ball().pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_game_over_freezes_simulation() {
        let mut session = finished(Score { player: 5, ai: 1 });
        let ball = session.engine().ball();
        session.frame(&FrameInput {
            up: true,
            ..Default::default()
        });
        assert_eq!(session.engine().ball(), ball);
        assert_eq!(session.state().winner(), Some(Side::Player));
    }

    #[test]
    fn test_escape_on_game_over_exits_after_delay() {
        let mut session = finished(Score { player: 0, ai: 5 });
        let flow = session.frame(&press(Command::Escape));
        assert_eq!(
            flow,
            Flow::Exit {
                delay: Duration::from_millis(500)
            }
        );
    }

    #[test]
    fn test_close_on_game_over_exits_immediately() {
        let mut session = finished(Score { player: 5, ai: 3 });
        let flow = session.frame(&press(Command::Quit));
        assert_eq!(
            flow,
            Flow::Exit {
                delay: Duration::ZERO
            }
        );
        assert!(session.state().is_terminated());
    }

    #[test]
    fn test_escape_after_selection_still_exits() {
        let mut session = finished(Score { player: 5, ai: 0 });
        let flow = session.frame(&FrameInput {
            commands: vec![
                Command::SelectTarget(ScoreTarget::BestOf3),
                Command::Escape,
            ],
            ..Default::default()
        });
        assert_eq!(
            flow,
            Flow::Exit {
                delay: Duration::from_millis(500)
            }
        );
        assert!(session.state().is_terminated());
    }

    #[test]
    fn test_last_selection_sets_target() {
        let mut session = finished(Score { player: 5, ai: 0 });
        let flow = session.frame(&FrameInput {
            commands: vec![
                Command::SelectTarget(ScoreTarget::BestOf3),
                Command::SelectTarget(ScoreTarget::BestOf7),
            ],
            ..Default::default()
        });
        assert_eq!(flow, Flow::Continue);
        assert_eq!(session.state().target(), ScoreTarget::BestOf7);
        assert!(session.state().is_running());
        assert_eq!(session.engine().score(), Score::new());
    }

    #[test]
    fn test_frame_clears_stale_events() {
        let mut session = session();
        session
            .engine_mut()
            .place_ball(Vec2::new(400.0, 1.0), Vec2::new(5.0, -3.0));
        session.frame(&FrameInput::default());
        assert!(session.engine().events().contains(GameEvent::WallHit));

        session.engine_mut().set_score(Score { player: 5, ai: 0 });
        session.frame(&FrameInput::default());
        assert!(session.engine().events().is_empty());
    }
}
