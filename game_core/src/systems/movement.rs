use hecs::World;

use crate::{Ball, Events, GameEvent, GameMap, Paddle, PaddleIntent};

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, map: &GameMap) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            let delta = intent.dir as f32 * paddle.step;
            paddle.move_by(delta, map.height);
        }
    }
}

/// Move ball one frame, bouncing off the top and bottom walls
pub fn move_ball(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(map.height) {
            events.push(GameEvent::WallHit);
        }
    }
}
