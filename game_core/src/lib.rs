pub mod components;
pub mod config;
pub mod engine;
pub mod fsm;
pub mod map;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;
pub mod view;

pub use components::*;
pub use config::*;
pub use engine::*;
pub use fsm::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use view::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one deterministic frame of the Pong simulation
pub fn step<R: RandomSource + ?Sized>(
    world: &mut World,
    map: &GameMap,
    intent: PaddleIntent,
    score: &mut Score,
    events: &mut Events,
    rng: &mut R,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Player paddle follows the held keys
    set_intent(world, Side::Player, intent);
    move_paddles(world, map);

    // 2. Move ball (walls bounce here)
    move_ball(world, map, events);

    // 3. Paddle collisions
    check_collisions(world, events);

    // 4. Check scoring (ball exited arena)
    check_scoring(world, map, score, events, rng);

    // 5. Computer paddle reacts to where the ball ended up
    track_ball(world, map);
}

/// Helper to create a paddle entity at its spawn position
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    let pos = Vec2::new(config.paddle_x(side), config.paddle_spawn_y());
    let paddle = Paddle::new(side, pos, config.paddle_size(), config.paddle_step(side));
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
