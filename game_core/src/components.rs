use glam::Vec2;

use crate::geometry::Rect;
use crate::params::Params;

/// Position (bottom-left corner) and size of a scrolling entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Movable: scrolls left by `factor` times the reference speed each frame.
/// The reference is the global speed, or the host's speed for riders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scroll {
    pub factor: f32,
}

impl Scroll {
    pub fn new(factor: f32) -> Self {
        Self { factor }
    }
}

/// Collidable: what happens when the hero touches this entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collider {
    Coin,
    Island,
    Guardian,
    Bonus,
}

/// Rides on a host island; removed together with it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rider {
    pub host: hecs::Entity,
}

/// Which way a guardian walks along its island
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Walking left, toward the hero: dangerous on contact
    TowardHero,
    /// Walking right, away from the hero: destroyed on contact
    AwayFromHero,
}

/// Island guardian patrol state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guardian {
    pub heading: Heading,
    /// Spotted the hero and holding position
    pub alerted: bool,
}

impl Guardian {
    pub fn new(heading: Heading) -> Self {
        Self {
            heading,
            alerted: false,
        }
    }

    /// Speed as a multiple of the host island's speed
    pub fn factor(&self) -> f32 {
        match (self.heading, self.alerted) {
            (Heading::TowardHero, true) => Params::GUARDIAN_ALERT,
            (Heading::TowardHero, false) => Params::GUARDIAN_TOWARD,
            (Heading::AwayFromHero, _) => Params::GUARDIAN_AWAY,
        }
    }

    pub fn is_dangerous(&self) -> bool {
        self.heading == Heading::TowardHero
    }

    /// Only a guardian walking toward the hero keeps watch
    pub fn is_watching(&self) -> bool {
        self.heading == Heading::TowardHero && !self.alerted
    }

    pub fn turn(&mut self, heading: Heading) {
        if self.heading != heading {
            self.heading = heading;
            self.alerted = false;
        }
    }
}
