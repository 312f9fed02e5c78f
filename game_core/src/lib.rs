pub mod bridge;
pub mod components;
pub mod config;
pub mod fsm;
pub mod input;
pub mod map;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use bridge::*;
pub use components::*;
pub use config::*;
pub use fsm::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use glam::Vec2;
use hecs::{Entity, World};

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, player: Player, pos: Vec2) -> Entity {
    world.spawn((Paddle::new(player, pos),))
}

/// Helper to create a ball entity
pub fn create_ball(world: &mut World, pos: Vec2) -> Entity {
    world.spawn((Ball::new(pos),))
}
