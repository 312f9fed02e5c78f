use log::debug;

use crate::params::Params;
use crate::{Ball, Player};

use super::RuleContext;

/// Single player: ball fell past the bottom, player 1 loses a life
pub fn solo_bottom_edge(ctx: &mut RuleContext) {
    for (_entity, ball) in ctx.world.query_mut::<&mut Ball>() {
        if ctx.map.past_bottom(&ball.bounds()) {
            ball.rebound_bottom();
            ctx.events.bottom_rebound = true;

            let lives = ctx.scoreboard.lose_life(Player::One);
            ctx.events.lives_lost[Player::One.index()] = true;
            ctx.time.reset_elapsed();
            debug!("Player 1 missed the ball, {} lives left", lives);

            if lives < 1 {
                ctx.events.round_over = true;
            }
        }
    }
}

/// Single player: the top is a wall. Bouncing off it scores, but only
/// once the round has been running for longer than the guard period.
pub fn solo_top_wall(ctx: &mut RuleContext) {
    for (_entity, ball) in ctx.world.query_mut::<&mut Ball>() {
        if ctx.map.past_top(&ball.bounds()) {
            ball.rebound_top_or_paddle();
            ctx.events.top_rebound = true;

            if ctx.time.elapsed > Params::SCORE_GUARD_SECS {
                ctx.scoreboard.award_point(Player::One);
                ctx.events.scored[Player::One.index()] = true;
                debug!("Player 1 scored, score {}", ctx.scoreboard.stats(Player::One).score);
            }
        }
    }
}

/// Two players: ball past the bottom is a point for player 2
pub fn versus_bottom_edge(ctx: &mut RuleContext) {
    let mut missed = false;
    for (_entity, ball) in ctx.world.query_mut::<&mut Ball>() {
        if ctx.map.past_bottom(&ball.bounds()) {
            ball.rebound_bottom();
            missed = true;
        }
    }
    if missed {
        ctx.events.bottom_rebound = true;
        concede(ctx, Player::One);
    }
}

/// Two players: ball past the top is a point for player 1
pub fn versus_top_edge(ctx: &mut RuleContext) {
    let mut missed = false;
    for (_entity, ball) in ctx.world.query_mut::<&mut Ball>() {
        if ctx.map.past_top(&ball.bounds()) {
            ball.rebound_top_multiplayer();
            missed = true;
        }
    }
    if missed {
        ctx.events.top_multiplayer_rebound = true;
        concede(ctx, Player::Two);
    }
}

/// `defender` let the ball through: opponent scores, defender loses a life
fn concede(ctx: &mut RuleContext, defender: Player) {
    let scorer = defender.opponent();
    ctx.scoreboard.award_point(scorer);
    ctx.events.scored[scorer.index()] = true;

    let lives = ctx.scoreboard.lose_life(defender);
    ctx.events.lives_lost[defender.index()] = true;
    ctx.time.reset_elapsed();
    debug!("{:?} conceded, {} lives left", defender, lives);

    if lives < 1 {
        ctx.events.round_over = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::Rule;
    use crate::{create_ball, Config, FrameEvents, GameMap, PlayerStats, Scoreboard, Time};
    use glam::Vec2;
    use hecs::World;

    fn setup_world() -> (World, GameMap, Config, Scoreboard, Time, FrameEvents) {
        let config = Config::new();
        (
            World::new(),
            config.map(),
            config,
            Scoreboard::new(),
            Time::new(),
            FrameEvents::new(),
        )
    }

    fn run(
        rule: Rule,
        world: &mut World,
        map: &GameMap,
        config: &Config,
        scoreboard: &mut Scoreboard,
        time: &mut Time,
        events: &mut FrameEvents,
    ) {
        let mut ctx = RuleContext {
            world,
            map,
            config,
            scoreboard,
            time,
            events,
            active: &[Player::One, Player::Two],
        };
        rule(&mut ctx);
    }

    fn ball(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, b)| *b).unwrap()
    }

    #[test]
    fn test_solo_bottom_costs_a_life() {
        let (mut world, map, config, mut board, mut time, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(300.0, map.height - 5.0));
        time.elapsed = 4.0;

        run(solo_bottom_edge, &mut world, &map, &config, &mut board, &mut time, &mut events);

        assert_eq!(board.stats(Player::One), PlayerStats { score: 0, lives: 2 });
        assert_eq!(ball(&world).pos, Params::BALL_RESPAWN);
        assert!(ball(&world).dir.y < 0.0);
        assert!(events.bottom_rebound);
        assert!(events.lost_life(Player::One));
        assert_eq!(time.elapsed, 0.0, "Respawn restarts the guard period");
        assert!(!events.round_over);
    }

    #[test]
    fn test_solo_last_life_ends_round() {
        let (mut world, map, config, mut board, mut time, mut events) = setup_world();
        board.lose_life(Player::One);
        board.lose_life(Player::One);
        create_ball(&mut world, Vec2::new(300.0, map.height + 1.0));

        run(solo_bottom_edge, &mut world, &map, &config, &mut board, &mut time, &mut events);

        assert_eq!(board.stats(Player::One).lives, 0);
        assert!(events.round_over);
    }

    #[test]
    fn test_solo_top_scores_after_guard() {
        let (mut world, map, config, mut board, mut time, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(300.0, -1.0));
        time.elapsed = 1.5;

        run(solo_top_wall, &mut world, &map, &config, &mut board, &mut time, &mut events);

        assert_eq!(board.stats(Player::One).score, 1);
        assert!(events.scored(Player::One));
        assert!(events.top_rebound);
        let b = ball(&world);
        assert_eq!(b.pos, Vec2::new(300.0, -1.0), "Top wall does not respawn");
        assert_eq!(b.dir, Vec2::new(0.2, -0.2));
    }

    #[test]
    fn test_solo_top_inside_guard_does_not_score() {
        let (mut world, map, config, mut board, mut time, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(300.0, -1.0));
        time.elapsed = 1.0; // guard is strictly greater-than

        run(solo_top_wall, &mut world, &map, &config, &mut board, &mut time, &mut events);

        assert_eq!(board.stats(Player::One).score, 0);
        assert!(events.top_rebound);
        assert!(!events.scored(Player::One));
    }

    #[test]
    fn test_versus_top_scores_for_player_one() {
        let (mut world, map, config, mut board, mut time, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(300.0, -2.0));

        run(versus_top_edge, &mut world, &map, &config, &mut board, &mut time, &mut events);

        assert_eq!(board.stats(Player::One), PlayerStats { score: 1, lives: 3 });
        assert_eq!(board.stats(Player::Two), PlayerStats { score: 0, lives: 2 });
        assert!(events.top_multiplayer_rebound);
        assert!(!events.top_rebound);
        assert_eq!(ball(&world).pos, Params::BALL_RESPAWN);
    }

    #[test]
    fn test_versus_bottom_scores_for_player_two() {
        let (mut world, map, config, mut board, mut time, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(300.0, map.height));

        run(versus_bottom_edge, &mut world, &map, &config, &mut board, &mut time, &mut events);

        assert_eq!(board.stats(Player::One), PlayerStats { score: 0, lives: 2 });
        assert_eq!(board.stats(Player::Two), PlayerStats { score: 1, lives: 3 });
        assert!(events.scored(Player::Two));
        assert!(events.lost_life(Player::One));
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, map, config, mut board, mut time, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(300.0, 300.0));
        time.elapsed = 10.0;

        let rules: [Rule; 4] = [solo_bottom_edge, solo_top_wall, versus_bottom_edge, versus_top_edge];
        for rule in rules {
            run(rule, &mut world, &map, &config, &mut board, &mut time, &mut events);
        }

        assert_eq!(events, FrameEvents::default());
        assert_eq!(board.stats(Player::One), PlayerStats::default());
    }
}
