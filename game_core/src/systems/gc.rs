use hecs::World;
use tracing::trace;

use crate::components::*;
use crate::resources::*;

/// Garbage collection: despawn entities that scrolled off the left edge,
/// along with any rider whose host is gone
pub fn gc(world: &mut World, events: &mut Events) {
    let mut to_remove = Vec::new();

    // Find entities fully past the left edge
    for (entity, body) in world.query::<&Body>().iter() {
        if body.right() < 0.0 {
            to_remove.push(entity);
        }
    }

    // Find riders that lost their host, or are about to
    for (entity, rider) in world.query::<&Rider>().iter() {
        if !world.contains(rider.host) || to_remove.contains(&rider.host) {
            to_remove.push(entity);
        }
    }

    to_remove.sort_unstable_by_key(|entity| entity.id());
    to_remove.dedup();

    // Remove collected entities
    for entity in to_remove {
        if world.despawn(entity).is_ok() {
            trace!(?entity, "Despawned");
            events.despawned += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::{create_bonus, create_coin, create_island};
    use glam::Vec2;

    #[test]
    fn test_offscreen_entities_are_removed() {
        let config = Config::for_display(1200.0, 600.0).unwrap();
        let mut world = World::new();
        let mut events = Events::new();

        let gone = create_coin(&mut world, Vec2::new(-51.0, 100.0), &config);
        let edge = create_coin(&mut world, Vec2::new(-50.0, 100.0), &config);

        gc(&mut world, &mut events);

        assert!(!world.contains(gone));
        assert!(world.contains(edge), "right edge at exactly 0 stays");
        assert_eq!(events.despawned, 1);
    }

    #[test]
    fn test_riders_leave_with_their_host() {
        let config = Config::for_display(1200.0, 600.0).unwrap();
        let mut world = World::new();
        let mut events = Events::new();

        let island = create_island(&mut world, Vec2::new(-300.0, 100.0), &config);
        // Still on screen itself, but its host is leaving
        let bonus = create_bonus(&mut world, island, Vec2::new(10.0, 200.0), &config);

        gc(&mut world, &mut events);

        assert!(!world.contains(island));
        assert!(!world.contains(bonus));
        assert_eq!(events.despawned, 2);
    }

    #[test]
    fn test_orphaned_rider_is_removed() {
        let config = Config::for_display(1200.0, 600.0).unwrap();
        let mut world = World::new();
        let mut events = Events::new();

        let island = create_island(&mut world, Vec2::new(300.0, 100.0), &config);
        let bonus = create_bonus(&mut world, island, Vec2::new(310.0, 200.0), &config);
        world.despawn(island).unwrap();

        gc(&mut world, &mut events);
        assert!(!world.contains(bonus));
    }
}
