use hecs::{Entity, World};

use crate::components::*;
use crate::config::Config;
use crate::geometry::Rect;
use crate::hero::Hero;

/// An entity overlapping the hero's hitbox this frame
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub entity: Entity,
    pub collider: Collider,
    pub body: Body,
    pub guardian: Option<Guardian>,
}

/// What a contact does to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Remove the entity and score `points`; coins also count toward an extra life
    Collect { points: u32, coin: bool },
    /// Landed on an island top
    Bounce,
    /// Costs a life unless the hero is immortal
    Hurt,
    /// Removed without effect on the hero
    Destroy,
}

/// Hitbox test for an entity that has already reached the hero's column.
///
/// Panics if `rect` starts right of the hero; callers filter on that first.
pub fn touches(rect: &Rect, hero: &Hero) -> bool {
    assert!(
        rect.x() <= hero.right(),
        "collision test for an entity right of the hero: {} > {}",
        rect.x(),
        hero.right()
    );

    let hitbox = hero.hitbox();
    if rect.right() <= hitbox.x() {
        return false;
    }
    rect.overlaps_vertically(&hitbox)
}

/// Collect every collidable entity touching the hero, ordered by hecs slot index.
/// Slots are reused after despawns, so this is a stable order, not spawn order.
pub fn find_contacts(world: &World, hero: &Hero) -> Vec<Contact> {
    let mut contacts: Vec<Contact> = world
        .query::<(&Body, &Collider, Option<&Guardian>)>()
        .iter()
        .filter(|(_e, (body, _collider, _guardian))| body.pos.x <= hero.right())
        .filter(|(_e, (body, _collider, _guardian))| touches(&body.rect(), hero))
        .map(|(entity, (body, collider, guardian))| Contact {
            entity,
            collider: *collider,
            body: *body,
            guardian: guardian.copied(),
        })
        .collect();

    contacts.sort_by_key(|contact| contact.entity.id());
    contacts
}

/// Decide the reaction for one contact
pub fn react(contact: &Contact, hero: &Hero, config: &Config) -> Reaction {
    match contact.collider {
        Collider::Coin => Reaction::Collect {
            points: config.tuning.coin_value,
            coin: true,
        },
        Collider::Bonus => Reaction::Collect {
            points: config.tuning.bonus_value,
            coin: false,
        },
        Collider::Island => {
            if hero.pos.y >= contact.body.top() - config.landing_margin() {
                Reaction::Bounce
            } else {
                Reaction::Hurt
            }
        }
        Collider::Guardian => match contact.guardian {
            Some(guardian) if !guardian.is_dangerous() => Reaction::Destroy,
            _ => Reaction::Hurt,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_coin, create_guardian, create_island};
    use glam::Vec2;

    fn setup() -> (World, Config, Hero) {
        let config = Config::for_display(1200.0, 600.0).unwrap();
        let mut hero = Hero::new(&config);
        hero.pos = Vec2::new(50.0, 200.0);
        (World::new(), config, hero)
    }

    #[test]
    fn test_entity_behind_hitbox_misses() {
        let (_, _, hero) = setup();
        // Hitbox starts a third of the way into the sprite
        let rect = Rect::new(Vec2::new(0.0, 200.0), Vec2::new(83.0, 50.0));
        assert!(!touches(&rect, &hero));
        let rect = Rect::new(Vec2::new(0.0, 200.0), Vec2::new(84.0, 50.0));
        assert!(touches(&rect, &hero));
    }

    #[test]
    fn test_vertical_overlap_is_required() {
        let (_, _, hero) = setup();
        // Hitbox spans y 200..280
        let above = Rect::new(Vec2::new(100.0, 281.0), Vec2::new(50.0, 50.0));
        let below = Rect::new(Vec2::new(100.0, 140.0), Vec2::new(50.0, 50.0));
        let grazing = Rect::new(Vec2::new(100.0, 280.0), Vec2::new(50.0, 50.0));
        assert!(!touches(&above, &hero));
        assert!(!touches(&below, &hero));
        assert!(touches(&grazing, &hero));
    }

    #[test]
    #[should_panic(expected = "right of the hero")]
    fn test_touches_rejects_entity_ahead() {
        let (_, _, hero) = setup();
        let rect = Rect::new(Vec2::new(hero.right() + 1.0, 200.0), Vec2::splat(10.0));
        touches(&rect, &hero);
    }

    #[test]
    fn test_find_contacts_skips_distant_entities() {
        let (mut world, config, hero) = setup();
        let near = create_coin(&mut world, Vec2::new(120.0, 220.0), &config);
        create_coin(&mut world, Vec2::new(600.0, 220.0), &config);
        create_coin(&mut world, Vec2::new(120.0, 500.0), &config);

        let contacts = find_contacts(&world, &hero);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].entity, near);
        assert_eq!(contacts[0].collider, Collider::Coin);
    }

    #[test]
    fn test_contacts_sorted_by_slot_after_reuse() {
        let (mut world, config, hero) = setup();
        let first = create_coin(&mut world, Vec2::new(120.0, 220.0), &config);
        create_coin(&mut world, Vec2::new(125.0, 220.0), &config);
        world.despawn(first).unwrap();
        create_coin(&mut world, Vec2::new(130.0, 220.0), &config);

        let contacts = find_contacts(&world, &hero);
        assert_eq!(contacts.len(), 2);
        assert!(contacts[0].entity.id() < contacts[1].entity.id());

        let again: Vec<_> = find_contacts(&world, &hero)
            .iter()
            .map(|contact| contact.entity)
            .collect();
        let ids: Vec<_> = contacts.iter().map(|contact| contact.entity).collect();
        assert_eq!(again, ids);
    }

    #[test]
    fn test_island_landing_versus_side_hit() {
        let (mut world, config, hero) = setup();

        // Island top just under the hero's feet
        let landing = create_island(&mut world, Vec2::new(100.0, 110.0), &config);
        let contacts = find_contacts(&world, &hero);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].entity, landing);
        assert_eq!(react(&contacts[0], &hero, &config), Reaction::Bounce);

        // Island top well above the hero's feet
        world.clear();
        create_island(&mut world, Vec2::new(100.0, 150.0), &config);
        let contacts = find_contacts(&world, &hero);
        assert_eq!(react(&contacts[0], &hero, &config), Reaction::Hurt);
    }

    #[test]
    fn test_guardian_reaction_depends_on_heading() {
        let (mut world, config, hero) = setup();
        let island = create_island(&mut world, Vec2::new(600.0, 0.0), &config);
        create_guardian(
            &mut world,
            island,
            Vec2::new(100.0, 220.0),
            Heading::TowardHero,
            &config,
        );
        create_guardian(
            &mut world,
            island,
            Vec2::new(110.0, 220.0),
            Heading::AwayFromHero,
            &config,
        );

        let reactions: Vec<Reaction> = find_contacts(&world, &hero)
            .iter()
            .map(|contact| react(contact, &hero, &config))
            .collect();
        assert_eq!(reactions, vec![Reaction::Hurt, Reaction::Destroy]);
    }

    #[test]
    fn test_collectibles_score_their_value() {
        let (mut world, config, hero) = setup();
        create_coin(&mut world, Vec2::new(120.0, 220.0), &config);
        let contacts = find_contacts(&world, &hero);
        assert_eq!(
            react(&contacts[0], &hero, &config),
            Reaction::Collect {
                points: config.tuning.coin_value,
                coin: true
            }
        );
    }
}
