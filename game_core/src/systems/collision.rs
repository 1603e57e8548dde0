use hecs::World;

use crate::{Ball, Events, GameEvent, Paddle, Side};

/// Bounce the ball off a paddle it overlaps
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle data first so the ball can be borrowed mutably
    let (player, ai) = {
        let mut player = None;
        let mut ai = None;
        for (_entity, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Player => player = Some(*paddle),
                Side::Ai => ai = Some(*paddle),
            }
        }
        match (player, ai) {
            (Some(player), Some(ai)) => (player, ai),
            _ => return, // Paddles not spawned yet
        }
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(side) = ball.check_collision(&player, &ai) {
            events.push(GameEvent::PaddleHit(side));
        }
    }
}
