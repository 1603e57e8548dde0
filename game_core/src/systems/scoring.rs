use hecs::World;

use crate::{Ball, Events, GameEvent, GameMap, RandomSource, Score};

/// Check if ball left the arena (scoring)
pub fn check_scoring<R: RandomSource + ?Sized>(
    world: &mut World,
    map: &GameMap,
    score: &mut Score,
    events: &mut Events,
    rng: &mut R,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(side) = map.scoring_side(ball.pos.x) {
            score.increment(side);
            events.push(GameEvent::Scored(side));
            log::debug!(
                "{} scored ({} - {})",
                side.label(),
                score.player,
                score.ai
            );

            ball.reset(rng);
        }
    }
}
