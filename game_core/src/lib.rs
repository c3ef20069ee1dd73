pub mod components;
pub mod config;
pub mod curve;
pub mod difficulty;
pub mod error;
pub mod geometry;
pub mod hero;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;
pub mod timers;

pub use components::*;
pub use config::*;
pub use curve::*;
pub use difficulty::*;
pub use error::*;
pub use geometry::*;
pub use hero::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use timers::*;

use glam::Vec2;
use hecs::{Entity, World};

/// Helper to create a coin at `pos`
pub fn create_coin(world: &mut World, pos: Vec2, config: &Config) -> Entity {
    world.spawn((
        Body::new(pos, config.coin_size),
        Scroll::new(config.tuning.coin_factor),
        Collider::Coin,
    ))
}

/// Helper to create an island with its bottom-left corner at `pos`
pub fn create_island(world: &mut World, pos: Vec2, config: &Config) -> Entity {
    world.spawn((
        Body::new(pos, config.island_size),
        Scroll::new(config.tuning.island_factor),
        Collider::Island,
    ))
}

/// Helper to create a guardian patrolling `host`
pub fn create_guardian(
    world: &mut World,
    host: Entity,
    pos: Vec2,
    heading: Heading,
    config: &Config,
) -> Entity {
    let guardian = Guardian::new(heading);
    world.spawn((
        Body::new(pos, config.rider_size),
        Scroll::new(guardian.factor()),
        Collider::Guardian,
        Rider { host },
        guardian,
    ))
}

/// Helper to create a bonus pickup riding on `host`
pub fn create_bonus(world: &mut World, host: Entity, pos: Vec2, config: &Config) -> Entity {
    world.spawn((
        Body::new(pos, config.rider_size),
        Scroll::new(1.0),
        Collider::Bonus,
        Rider { host },
    ))
}
