use crate::{Ball, Paddle, Player, Time};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, active: &[Player]) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if active.contains(&paddle.player) {
            paddle.update(time.dt);
        }
    }
}

/// Move ball based on direction and speed
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.update(time.dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_move_paddles_skips_inactive() {
        let mut world = World::new();
        let one = create_paddle(&mut world, Player::One, Vec2::new(100.0, 700.0));
        let two = create_paddle(&mut world, Player::Two, Vec2::new(100.0, 20.0));
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.move_right();
        }

        let time = Time { dt: 0.1, elapsed: 0.1 };
        move_paddles(&mut world, &time, &[Player::One]);

        assert!((world.get::<&Paddle>(one).unwrap().pos.x - 200.0).abs() < 1e-3);
        assert_eq!(world.get::<&Paddle>(two).unwrap().pos.x, 100.0);
    }

    #[test]
    fn test_move_ball() {
        let mut world = World::new();
        let ball = create_ball(&mut world, Vec2::new(100.0, 100.0));

        let time = Time { dt: 0.05, elapsed: 0.05 };
        move_ball(&mut world, &time);

        let moved = *world.get::<&Ball>(ball).unwrap();
        assert!((moved.pos.x - 110.0).abs() < 1e-3);
        assert!((moved.pos.y - 110.0).abs() < 1e-3);
    }
}
