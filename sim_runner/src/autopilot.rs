use game_core::{Body, Collider, Session};

/// Decide whether the autopilot holds the touch this frame.
///
/// Aims for a cruising height just above the nearest island still ahead of the
/// hero, so it tends to land on island tops and pick up coins on the way.
pub fn calculate_touch(session: &Session) -> bool {
    let hero = &session.hero;
    let config = &session.config;

    let next_island = session
        .world
        .query::<(&Body, &Collider)>()
        .iter()
        .filter(|(_e, (body, collider))| {
            **collider == Collider::Island && body.right() > hero.hitbox().x()
        })
        .map(|(_e, (body, _collider))| *body)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x));

    let target_y = match next_island {
        Some(island) => island.top() + config.unit / 2.0,
        None => config.height / 2.0,
    };

    let diff = target_y - hero.pos.y;
    let deadzone = config.unit / 10.0;

    if diff > deadzone {
        true
    } else if diff < -deadzone {
        false
    } else {
        // Inside the deadzone: only climb if already falling
        hero.vy < 0.0
    }
}
