use hecs::World;

use crate::{Ball, GameMap, Paddle, Side};

/// Move the computer paddle toward the ball
pub fn track_ball(world: &mut World, map: &GameMap) {
    let ball = match world.query_mut::<&Ball>().into_iter().next() {
        Some((_e, ball)) => *ball,
        None => return, // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Ai {
            paddle.auto_track(&ball, map.height);
        }
    }
}
