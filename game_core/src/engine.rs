use glam::Vec2;
use hecs::{Entity, World};

use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, GameMap, GameRng, Paddle,
    PaddleIntent, RandomSource, Score, Side,
};

/// Owns the simulated world: both paddles, the ball, the score and this
/// frame's events.
pub struct Engine<R: RandomSource = GameRng> {
    world: World,
    map: GameMap,
    config: Config,
    score: Score,
    events: Events,
    rng: R,
    player: Entity,
    ai: Entity,
    ball: Entity,
}

impl Engine<GameRng> {
    /// Engine with a seeded random source (reproducible serves)
    pub fn new(config: Config, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    pub fn from_entropy(config: Config) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }
}

impl<R: RandomSource> Engine<R> {
    pub fn with_rng(config: Config, mut rng: R) -> Self {
        let mut world = World::new();
        let map = GameMap::new(&config);

        let player = create_paddle(&mut world, &config, Side::Player);
        let ai = create_paddle(&mut world, &config, Side::Ai);

        let speed = Vec2::new(config.ball_speed_x, config.ball_speed_y);
        let ball = create_ball(
            &mut world,
            Ball::serve(config.ball_spawn(), config.ball_size(), speed, &mut rng),
        );

        Self {
            world,
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            player,
            ai,
            ball,
        }
    }

    /// Run one frame of simulation with the player's intent
    pub fn update(&mut self, intent: PaddleIntent) {
        step(
            &mut self.world,
            &self.map,
            intent,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
    }

    /// Zero both scores and serve again. Paddles keep their positions.
    pub fn reset_game(&mut self) {
        self.score.reset();
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.reset(&mut self.rng);
        }
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        let entity = match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        };
        self.component(entity)
    }

    pub fn player(&self) -> Paddle {
        self.paddle(Side::Player)
    }

    pub fn ai(&self) -> Paddle {
        self.paddle(Side::Ai)
    }

    pub fn ball(&self) -> Ball {
        self.component(self.ball)
    }

    /// Move the ball directly, e.g. to set up a scenario
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Move a paddle directly; the arena clamp still applies
    pub fn place_paddle(&mut self, side: Side, y: f32) {
        let entity = match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        };
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(entity) {
            paddle.pos.y = self.config.clamp_paddle_y(y);
        }
    }

    pub fn set_score(&mut self, score: Score) {
        self.score = score;
    }

    fn component<T: hecs::Component + Copy>(&self, entity: Entity) -> T {
        // Entities are spawned in `with_rng` and never despawned
        *self
            .world
            .get::<&T>(entity)
            .expect("engine entity is missing a component")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEvent, ScriptedRng};

    fn engine() -> Engine<ScriptedRng> {
        Engine::with_rng(Config::new(), ScriptedRng::new(vec![true, true]))
    }

    #[test]
    fn test_engine_spawn_layout() {
        let engine = engine();
        assert_eq!(engine.player().pos, Vec2::new(10.0, 250.0));
        assert_eq!(engine.ai().pos, Vec2::new(780.0, 250.0));
        assert_eq!(engine.ball().pos, Vec2::new(400.0, 300.0));
        assert_eq!(engine.ball().vel, Vec2::new(5.0, 3.0));
        assert_eq!(engine.score(), Score::new());
    }

    #[test]
    fn test_opening_serve_comes_from_rng() {
        let engine = Engine::with_rng(Config::new(), ScriptedRng::new(vec![false, true]));
        let ball = engine.ball();
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.spawn, ball.pos);
        assert_eq!(ball.vel, Vec2::new(-5.0, 3.0));
    }

    #[test]
    fn test_update_moves_player_then_ball_then_ai() {
        let mut engine = engine();
        engine.update(PaddleIntent::from_keys(true, false));

        assert_eq!(engine.player().pos.y, 240.0);
        assert_eq!(engine.ball().pos, Vec2::new(405.0, 303.0));
        // Ball centre 306.5 vs AI centre 300: one step down
        assert_eq!(engine.ai().pos.y, 255.0);
        assert!(engine.events().is_empty());
    }

    #[test]
    fn test_update_clears_previous_events() {
        let mut engine = engine();
        engine.place_ball(Vec2::new(400.0, 1.0), Vec2::new(5.0, -3.0));
        engine.update(PaddleIntent::new());
        assert!(engine.events().contains(GameEvent::WallHit));

        engine.update(PaddleIntent::new());
        assert!(engine.events().is_empty());
    }

    #[test]
    fn test_reset_game_keeps_paddles() {
        let mut engine = engine();
        for _ in 0..5 {
            engine.update(PaddleIntent::from_keys(false, true));
        }
        engine.set_score(Score { player: 5, ai: 2 });
        let player_y = engine.player().pos.y;
        let ai_y = engine.ai().pos.y;

        engine.reset_game();

        assert_eq!(engine.score(), Score::new());
        assert_eq!(engine.ball().pos, Vec2::new(400.0, 300.0));
        assert_eq!(engine.player().pos.y, player_y);
        assert_eq!(engine.ai().pos.y, ai_y);
    }

    #[test]
    fn test_place_paddle_is_clamped() {
        let mut engine = engine();
        engine.place_paddle(Side::Player, 9000.0);
        assert_eq!(engine.player().pos.y, 500.0);
    }

    #[test]
    fn test_seeded_engines_match() {
        let mut a = Engine::new(Config::new(), 99);
        let mut b = Engine::new(Config::new(), 99);
        for _ in 0..600 {
            a.update(PaddleIntent::new());
            b.update(PaddleIntent::new());
        }
        assert_eq!(a.ball(), b.ball());
        assert_eq!(a.score(), b.score());
    }
}
