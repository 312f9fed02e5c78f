use hecs::World;

use crate::input::{paddle_keys, FrameInput};
use crate::{GameMap, Paddle, Player};

/// Turn held keys into paddle intents for the active players
///
/// The edge clamp looks at the paddle's bounds *before* this frame's move,
/// so a paddle may overshoot an edge by one frame before it is stopped.
pub fn apply_paddle_input(world: &mut World, input: &FrameInput, map: &GameMap, active: &[Player]) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if !active.contains(&paddle.player) {
            continue;
        }
        let (left, right) = paddle_keys(paddle.player);

        if input.is_held(left) {
            paddle.move_left();
            if map.past_left(&paddle.bounds()) {
                paddle.stop_left();
            }
        } else {
            paddle.stop_left();
        }

        if input.is_held(right) {
            paddle.move_right();
            if map.past_right(&paddle.bounds()) {
                paddle.stop_right();
            }
        } else {
            paddle.stop_right();
        }
    }
}
