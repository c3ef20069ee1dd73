use std::collections::HashMap;

use hecs::{Entity, World};

use crate::components::*;
use crate::config::Config;
use crate::geometry::Rect;
use crate::hero::Hero;

/// Scroll every movable entity left. Riders move relative to their host's speed;
/// a rider whose host is gone is left in place for gc to collect.
pub fn scroll_entities(world: &mut World, speed: f32) {
    let host_speeds: HashMap<Entity, f32> = world
        .query::<(&Scroll, Option<&Rider>)>()
        .iter()
        .filter(|(_e, (_scroll, rider))| rider.is_none())
        .map(|(e, (scroll, _rider))| (e, scroll.factor * speed))
        .collect();

    for (_entity, (body, scroll, rider)) in
        world.query_mut::<(&mut Body, &Scroll, Option<&Rider>)>()
    {
        let reference = match rider {
            Some(rider) => match host_speeds.get(&rider.host) {
                Some(host_speed) => *host_speed,
                None => continue,
            },
            None => speed,
        };
        body.pos.x -= scroll.factor * reference;
    }
}

/// Turn guardians at the ends of their island and alert those that spot the hero
pub fn patrol_guardians(world: &mut World, hero: &Hero, config: &Config) {
    let islands: HashMap<Entity, Rect> = world
        .query::<(&Body, &Collider)>()
        .iter()
        .filter(|(_e, (_body, collider))| **collider == Collider::Island)
        .map(|(e, (body, _collider))| (e, body.rect()))
        .collect();

    for (_entity, (body, guardian, scroll, rider)) in
        world.query_mut::<(&Body, &mut Guardian, &mut Scroll, &Rider)>()
    {
        let Some(island) = islands.get(&rider.host) else {
            continue;
        };

        let inset = body.size.x / 5.0;
        if body.pos.x + inset <= island.x() {
            guardian.turn(Heading::AwayFromHero);
        } else if body.right() - inset >= island.right() {
            guardian.turn(Heading::TowardHero);
        }

        if guardian.is_watching()
            && body.pos.x - hero.right() <= config.height / 2.0
            && body.pos.y <= hero.top()
        {
            guardian.alerted = true;
        }

        scroll.factor = guardian.factor();
    }
}
