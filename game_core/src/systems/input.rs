use hecs::World;

use crate::{Paddle, PaddleIntent, Side};

/// Store this frame's intent on the paddle guarding `side`
pub fn set_intent(world: &mut World, side: Side, intent: PaddleIntent) {
    for (_entity, (paddle, slot)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == side {
            *slot = intent;
        }
    }
}
