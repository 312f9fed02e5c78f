use crate::{Aabb, Ball, PaddleHitPolicy, Paddle, Player};

use super::RuleContext;

/// Bounce the ball off the left and right walls
pub fn side_walls(ctx: &mut RuleContext) {
    for (_entity, ball) in ctx.world.query_mut::<&mut Ball>() {
        if ctx.map.past_sides(&ball.bounds()) {
            ball.rebound_sides();
            ctx.events.side_rebound = true;
        }
    }
}

/// Bounce the ball off every active paddle it overlaps
///
/// Paddles are tested independently in player order. Under
/// [`PaddleHitPolicy::ReboundEach`] overlapping both paddles flips the
/// ball twice, leaving its direction unchanged.
pub fn paddle_hits(ctx: &mut RuleContext) {
    // Collect paddle bounds first so the ball can be borrowed mutably
    let mut paddles: Vec<(Player, Aabb)> = ctx
        .world
        .query::<&Paddle>()
        .iter()
        .filter(|(_e, p)| ctx.active.contains(&p.player))
        .map(|(_e, p)| (p.player, p.bounds()))
        .collect();
    paddles.sort_by_key(|(player, _)| *player);

    for (_entity, ball) in ctx.world.query_mut::<&mut Ball>() {
        let mut flipped = false;
        for (_player, bounds) in &paddles {
            if !ball.bounds().intersects(bounds) {
                continue;
            }
            ctx.events.paddle_hits += 1;
            if flipped && ctx.config.paddle_hit_policy == PaddleHitPolicy::ReboundOnce {
                continue;
            }
            ball.rebound_top_or_paddle();
            flipped = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, FrameEvents, GameMap, Scoreboard, Time};
    use glam::Vec2;
    use hecs::World;

    struct Fixture {
        world: World,
        map: GameMap,
        config: Config,
        scoreboard: Scoreboard,
        time: Time,
        events: FrameEvents,
    }

    impl Fixture {
        fn new(config: Config) -> Self {
            Self {
                world: World::new(),
                map: config.map(),
                config,
                scoreboard: Scoreboard::new(),
                time: Time::new(),
                events: FrameEvents::new(),
            }
        }

        fn run(&mut self, rule: crate::systems::Rule, active: &[Player]) {
            let mut ctx = RuleContext {
                world: &mut self.world,
                map: &self.map,
                config: &self.config,
                scoreboard: &mut self.scoreboard,
                time: &mut self.time,
                events: &mut self.events,
                active,
            };
            rule(&mut ctx);
        }

        fn ball(&self) -> Ball {
            let mut query = self.world.query::<&Ball>();
            query.iter().next().map(|(_e, b)| *b).unwrap()
        }
    }

    #[test]
    fn test_ball_bounces_off_left_wall() {
        let mut fx = Fixture::new(Config::new());
        create_ball(&mut fx.world, Vec2::new(-1.0, 300.0));

        fx.run(side_walls, &[Player::One]);

        assert_eq!(fx.ball().dir.x, -0.2);
        assert_eq!(fx.ball().pos, Vec2::new(-1.0, 300.0), "Side rebound never moves the ball");
        assert!(fx.events.side_rebound);
    }

    #[test]
    fn test_ball_bounces_off_right_wall() {
        let mut fx = Fixture::new(Config::new());
        create_ball(&mut fx.world, Vec2::new(fx.map.width - 9.0, 300.0));

        fx.run(side_walls, &[Player::One]);

        assert_eq!(fx.ball().dir.x, -0.2);
        assert!(fx.events.side_rebound);
    }

    #[test]
    fn test_no_side_bounce_inside_arena() {
        let mut fx = Fixture::new(Config::new());
        create_ball(&mut fx.world, Vec2::new(300.0, 300.0));

        fx.run(side_walls, &[Player::One]);

        assert_eq!(fx.ball().dir, Vec2::new(0.2, 0.2));
        assert!(!fx.events.side_rebound);
    }

    #[test]
    fn test_ball_bounces_off_paddle() {
        let mut fx = Fixture::new(Config::new());
        create_paddle(&mut fx.world, Player::One, Vec2::new(300.0, 600.0));
        create_ball(&mut fx.world, Vec2::new(310.0, 596.0));

        fx.run(paddle_hits, &[Player::One]);

        assert_eq!(fx.ball().dir, Vec2::new(0.2, -0.2));
        assert_eq!(fx.events.paddle_hits, 1);
    }

    #[test]
    fn test_inactive_paddle_is_not_hit() {
        let mut fx = Fixture::new(Config::new());
        create_paddle(&mut fx.world, Player::Two, Vec2::new(300.0, 20.0));
        create_ball(&mut fx.world, Vec2::new(310.0, 18.0));

        fx.run(paddle_hits, &[Player::One]);

        assert_eq!(fx.ball().dir, Vec2::new(0.2, 0.2));
        assert_eq!(fx.events.paddle_hits, 0);
    }

    #[test]
    fn test_double_hit_cancels_under_rebound_each() {
        let mut fx = Fixture::new(Config::new());
        // Both paddles overlapping the same ball
        create_paddle(&mut fx.world, Player::One, Vec2::new(300.0, 104.0));
        create_paddle(&mut fx.world, Player::Two, Vec2::new(300.0, 100.0));
        create_ball(&mut fx.world, Vec2::new(310.0, 100.0));

        fx.run(paddle_hits, &[Player::One, Player::Two]);

        assert_eq!(fx.events.paddle_hits, 2);
        assert_eq!(fx.ball().dir, Vec2::new(0.2, 0.2), "Two flips are a net no-op");
    }

    #[test]
    fn test_double_hit_flips_once_under_rebound_once() {
        let config = Config::new().with_paddle_hit_policy(PaddleHitPolicy::ReboundOnce);
        let mut fx = Fixture::new(config);
        create_paddle(&mut fx.world, Player::One, Vec2::new(300.0, 104.0));
        create_paddle(&mut fx.world, Player::Two, Vec2::new(300.0, 100.0));
        create_ball(&mut fx.world, Vec2::new(310.0, 100.0));

        fx.run(paddle_hits, &[Player::One, Player::Two]);

        assert_eq!(fx.events.paddle_hits, 2);
        assert_eq!(fx.ball().dir, Vec2::new(0.2, -0.2));
    }

    #[test]
    fn test_touching_paddle_edge_is_not_a_hit() {
        let mut fx = Fixture::new(Config::new());
        create_paddle(&mut fx.world, Player::One, Vec2::new(300.0, 600.0));
        create_ball(&mut fx.world, Vec2::new(310.0, 590.0)); // bottom edge at 600

        fx.run(paddle_hits, &[Player::One]);

        assert_eq!(fx.events.paddle_hits, 0);
    }
}
