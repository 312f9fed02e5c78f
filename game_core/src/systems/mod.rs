pub mod collision;
pub mod input;
pub mod movement;
pub mod scoring;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use scoring::*;

use hecs::World;

use crate::{Config, FrameEvents, GameMap, Player, Scoreboard, Time};

/// Mutable view of everything an edge/collision rule may touch
pub struct RuleContext<'a> {
    pub world: &'a mut World,
    pub map: &'a GameMap,
    pub config: &'a Config,
    pub scoreboard: &'a mut Scoreboard,
    pub time: &'a mut Time,
    pub events: &'a mut FrameEvents,
    /// Paddles taking part in this mode, in hit-test order
    pub active: &'a [Player],
}

/// One predicate -> action pair, evaluated once per frame
pub type Rule = fn(&mut RuleContext);

/// Single-player rules, in evaluation order
pub const SINGLE_PLAYER_RULES: &[Rule] = &[
    solo_bottom_edge,
    solo_top_wall,
    side_walls,
    paddle_hits,
];

/// Two-player rules, in evaluation order
pub const MULTI_PLAYER_RULES: &[Rule] = &[
    versus_bottom_edge,
    versus_top_edge,
    side_walls,
    paddle_hits,
];

/// Run every rule in order. Rules are independent guards, not branches of
/// one decision, so several may fire in the same frame and their
/// rebounds compose.
pub fn run_rules(rules: &[Rule], ctx: &mut RuleContext) {
    for &rule in rules {
        rule(ctx);
    }
}
