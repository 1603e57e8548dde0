//! Match State Machine
//!
//! Tracks whether a match is being played, is over, or the game is shutting down.

use std::time::Duration;

use crate::{Params, Score, Side};

/// Points needed to win a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreTarget {
    BestOf3,
    #[default]
    BestOf5,
    BestOf7,
}

impl ScoreTarget {
    pub fn points(self) -> u32 {
        match self {
            ScoreTarget::BestOf3 => 3,
            ScoreTarget::BestOf5 => Params::DEFAULT_WIN_SCORE,
            ScoreTarget::BestOf7 => 7,
        }
    }
}

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Running,
    GameOver { winner: Side },
    Terminated,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    ScoreReached(Side),
    SelectTarget(ScoreTarget),
    Exit, // ESC on the game-over screen
    Quit, // Window closed
}

/// Result of a phase transition
#[derive(Debug, Clone)]
pub struct TransitionResult {
    success: bool,
    exit_delay: Option<Duration>,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    /// How long to wait before closing, set only for a successful Exit
    pub fn exit_delay(&self) -> Option<Duration> {
        self.exit_delay
    }
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct MatchState {
    phase: MatchPhase,
    target: ScoreTarget,
}

impl MatchState {
    pub fn new(target: ScoreTarget) -> Self {
        Self {
            phase: MatchPhase::Running,
            target,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn target(&self) -> ScoreTarget {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.phase == MatchPhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, MatchPhase::GameOver { .. })
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == MatchPhase::Terminated
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_phase = self.phase;

        let Some(next_phase) = self.next_phase(action) else {
            log::debug!("Rejected {:?} in {:?}", action, from_phase);
            return TransitionResult {
                success: false,
                exit_delay: None,
            };
        };

        self.phase = next_phase;
        if let MatchAction::SelectTarget(target) = action {
            self.target = target;
            log::info!("New match: best of {}", target.points());
        }
        log::debug!("{:?} -> {:?} on {:?}", from_phase, next_phase, action);

        let exit_delay = match action {
            MatchAction::Exit => Some(Duration::from_millis(Params::EXIT_DELAY_MS)),
            _ => None,
        };

        TransitionResult {
            success: true,
            exit_delay,
        }
    }

    /// Move to GameOver if either side has reached the target
    pub fn check_score(&mut self, score: &Score) -> Option<TransitionResult> {
        if !self.is_running() {
            return None;
        }
        let winner = score.has_winner(self.target.points())?;
        Some(self.transition(MatchAction::ScoreReached(winner)))
    }

    /// Get next phase for a given action (if valid)
    fn next_phase(&self, action: MatchAction) -> Option<MatchPhase> {
        match (self.phase, action) {
            // From Running
            (MatchPhase::Running, MatchAction::ScoreReached(winner)) => {
                Some(MatchPhase::GameOver { winner })
            }
            (MatchPhase::Running, MatchAction::Quit) => Some(MatchPhase::Terminated),

            // From GameOver
            (MatchPhase::GameOver { .. }, MatchAction::SelectTarget(_)) => {
                Some(MatchPhase::Running)
            }
            (MatchPhase::GameOver { .. }, MatchAction::Exit) => Some(MatchPhase::Terminated),
            (MatchPhase::GameOver { .. }, MatchAction::Quit) => Some(MatchPhase::Terminated),

            // Invalid transition
            _ => None,
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(ScoreTarget::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_over(winner: Side) -> MatchState {
        let mut state = MatchState::default();
        state.transition(MatchAction::ScoreReached(winner));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = MatchState::default();
        assert_eq!(state.phase(), MatchPhase::Running);
        assert_eq!(state.target(), ScoreTarget::BestOf5);
        assert_eq!(state.target().points(), 5);
    }

    #[test]
    fn test_score_reached_ends_match() {
        let mut state = MatchState::default();
        let result = state.transition(MatchAction::ScoreReached(Side::Ai));
        assert!(result.success());
        assert_eq!(result.exit_delay(), None);
        assert_eq!(state.winner(), Some(Side::Ai));
        assert!(state.is_game_over());
    }

    #[test]
    fn test_select_target_restarts() {
        let mut state = game_over(Side::Player);
        let result = state.transition(MatchAction::SelectTarget(ScoreTarget::BestOf3));
        assert!(result.success());
        assert_eq!(state.phase(), MatchPhase::Running);
        assert_eq!(state.target(), ScoreTarget::BestOf3);
    }

    #[test]
    fn test_exit_has_delay() {
        let mut state = game_over(Side::Player);
        let result = state.transition(MatchAction::Exit);
        assert!(result.success());
        assert!(state.is_terminated());
        assert_eq!(result.exit_delay(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_quit_is_immediate_from_any_live_phase() {
        let mut state = MatchState::default();
        let result = state.transition(MatchAction::Quit);
        assert!(result.success());
        assert_eq!(result.exit_delay(), None);
        assert!(state.is_terminated());

        let mut state = game_over(Side::Ai);
        assert!(state.transition(MatchAction::Quit).success());
        assert!(state.is_terminated());
    }

    #[test]
    fn test_invalid_transitions_leave_state_unchanged() {
        let mut state = MatchState::default();
        // Escape and replay selection mean nothing mid-match
        for action in [
            MatchAction::Exit,
            MatchAction::SelectTarget(ScoreTarget::BestOf7),
        ] {
            let result = state.transition(action);
            assert!(!result.success());
            assert_eq!(result.exit_delay(), None);
            assert_eq!(state.phase(), MatchPhase::Running);
        }
        assert_eq!(state.target(), ScoreTarget::BestOf5);

        let mut state = game_over(Side::Player);
        assert!(!state.transition(MatchAction::ScoreReached(Side::Ai)).success());
        assert_eq!(state.winner(), Some(Side::Player));

        state.transition(MatchAction::Quit);
        assert!(!state.transition(MatchAction::SelectTarget(ScoreTarget::BestOf3)).success());
        assert!(state.is_terminated());
    }

    #[test]
    fn test_check_score() {
        let mut state = MatchState::new(ScoreTarget::BestOf3);
        assert!(state.check_score(&Score { player: 2, ai: 2 }).is_none());

        let result = state.check_score(&Score { player: 1, ai: 3 });
        assert!(result.is_some_and(|r| r.success()));
        assert_eq!(state.winner(), Some(Side::Ai));

        // Already over: no second transition
        assert!(state.check_score(&Score { player: 3, ai: 3 }).is_none());
    }
}
