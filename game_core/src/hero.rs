use glam::Vec2;

use crate::config::Config;
use crate::geometry::Rect;
use crate::params::Params;

/// Result of a hit on the hero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeLoss {
    /// Hero was immortal; nothing changed
    Absorbed,
    /// A life was lost and lives remain
    Lost { remaining: u32 },
    /// The last life was lost
    Exhausted,
}

/// Outcome of one upward ramp step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ramp {
    Accelerated,
    Capped,
    /// Climbed a full jump above the bounce point without a held touch
    Apex,
}

/// The player-controlled flyer
#[derive(Debug, Clone)]
pub struct Hero {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical speed in multiples of the global scroll speed
    pub vy: f32,
    pub tilt: f32,
    pub lives: u32,
    pub coins: u32,
    pub immortal: bool,
    pub visible: bool,
    pub touching: bool,
    pub bounces: u32,
    /// Height the current bounce started from
    pub bounce_floor: f32,
}

impl Hero {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: config.hero_start(),
            size: config.hero_size,
            vy: 0.0,
            tilt: 0.0,
            lives: config.tuning.starting_lives,
            coins: 0,
            immortal: false,
            visible: true,
            touching: false,
            bounces: 0,
            bounce_floor: config.height,
        }
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

    /// Collision box: the right two thirds of the sprite, minus its top fifth
    pub fn hitbox(&self) -> Rect {
        let x = self.pos.x + self.size.x / 3.0;
        let y = self.pos.y;
        Rect::from_edges(x, y, x + 2.0 * self.size.x / 3.0, y + 4.0 * self.size.y / 5.0)
    }

    pub fn lose_life(&mut self) -> LifeLoss {
        if self.immortal {
            return LifeLoss::Absorbed;
        }

        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            return LifeLoss::Exhausted;
        }

        self.immortal = true;
        LifeLoss::Lost {
            remaining: self.lives,
        }
    }

    pub fn become_mortal(&mut self) {
        self.immortal = false;
        self.visible = true;
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    /// Returns false when already at the cap
    pub fn grant_life(&mut self, max_lives: u32) -> bool {
        if self.lives >= max_lives {
            return false;
        }
        self.lives += 1;
        true
    }

    /// Count a coin. Returns true when it completed a life-granting set.
    pub fn collect_coin(&mut self, coins_per_life: u32) -> bool {
        self.coins += 1;
        coins_per_life > 0 && self.coins % coins_per_life == 0
    }

    /// Count a bounce off an island top, capped at `MAX_BOUNCES`.
    /// Returns the streak length once it reaches three.
    pub fn register_bounce(&mut self) -> Option<u32> {
        self.bounces = (self.bounces + 1).min(Params::MAX_BOUNCES);
        (self.bounces >= 3).then_some(self.bounces)
    }

    /// Apply one frame of vertical motion. Returns true when the hero fell out the bottom.
    pub fn advance(&mut self, config: &Config, speed: f32) -> bool {
        self.pos.y += self.vy * speed;

        if self.top() <= 0.0 {
            return true;
        }

        let ceiling = config.height + self.size.y;
        if self.pos.y > ceiling {
            self.pos.y = ceiling - self.size.y;
        }
        false
    }

    pub fn ramp_up(&mut self, config: &Config, speed: f32) -> Ramp {
        if !self.touching && self.pos.y - self.bounce_floor >= config.jump_distance {
            self.bounce_floor = config.height;
            return Ramp::Apex;
        }
        if self.vy > Params::MAX_UP_FACTOR * speed {
            return Ramp::Capped;
        }

        self.tilt = (self.tilt + 1.0).min(Params::MAX_TILT);
        self.vy += config.thrust_up;
        Ramp::Accelerated
    }

    /// Returns false once the fall speed is capped
    pub fn ramp_down(&mut self, config: &Config, speed: f32) -> bool {
        if self.vy < Params::MAX_DOWN_FACTOR * speed {
            return false;
        }

        self.vy -= config.thrust_down;
        self.tilt = (self.tilt - 1.0).max(Params::MIN_TILT);
        true
    }

    /// Kick upward at full climb speed, lifting clear of an island first unless
    /// bouncing off the floor
    pub fn kick(&mut self, config: &Config, speed: f32, lift: bool) {
        if lift {
            self.pos.y += config.bounce_lift();
        }
        self.tilt = Params::MAX_TILT / 2.0;
        self.bounce_floor = self.pos.y;
        self.vy = Params::MAX_UP_FACTOR * speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Config, Hero) {
        let config = Config::for_display(1200.0, 600.0).unwrap();
        let hero = Hero::new(&config);
        (config, hero)
    }

    #[test]
    fn test_hitbox_is_inset() {
        let (_, mut hero) = setup();
        hero.pos = Vec2::new(0.0, 0.0);
        hero.size = Vec2::new(90.0, 100.0);

        let hitbox = hero.hitbox();
        assert_eq!(hitbox.x(), 30.0);
        assert_eq!(hitbox.right(), 90.0);
        assert_eq!(hitbox.y(), 0.0);
        assert_eq!(hitbox.top(), 80.0);
    }

    #[test]
    fn test_lose_life_grants_immortality() {
        let (_, mut hero) = setup();
        assert_eq!(hero.lose_life(), LifeLoss::Lost { remaining: 2 });
        assert!(hero.immortal);
    }

    #[test]
    fn test_immortal_hero_absorbs_hits() {
        let (_, mut hero) = setup();
        hero.lose_life();
        let before = hero.clone();

        assert_eq!(hero.lose_life(), LifeLoss::Absorbed);
        assert_eq!(hero.lives, before.lives);
        assert_eq!(hero.immortal, before.immortal);
    }

    #[test]
    fn test_last_life_exhausts() {
        let (_, mut hero) = setup();
        hero.lives = 1;
        assert_eq!(hero.lose_life(), LifeLoss::Exhausted);
        assert_eq!(hero.lives, 0);
        assert_eq!(hero.lose_life(), LifeLoss::Exhausted, "never goes negative");
        assert_eq!(hero.lives, 0);
    }

    #[test]
    fn test_become_mortal_restores_visibility() {
        let (_, mut hero) = setup();
        hero.lose_life();
        hero.toggle_visible();
        hero.become_mortal();
        assert!(!hero.immortal);
        assert!(hero.visible);
    }

    #[test]
    fn test_grant_life_is_capped() {
        let (config, mut hero) = setup();
        assert!(!hero.grant_life(config.tuning.max_lives));
        hero.lives = 1;
        assert!(hero.grant_life(config.tuning.max_lives));
        assert_eq!(hero.lives, 2);
    }

    #[test]
    fn test_every_tenth_coin_completes_a_set() {
        let (_, mut hero) = setup();
        let mut sets = Vec::new();
        for _ in 0..30 {
            if hero.collect_coin(10) {
                sets.push(hero.coins);
            }
        }
        assert_eq!(sets, vec![10, 20, 30]);
    }

    #[test]
    fn test_bounce_streak() {
        let (_, mut hero) = setup();
        assert_eq!(hero.register_bounce(), None);
        assert_eq!(hero.register_bounce(), None);
        assert_eq!(hero.register_bounce(), Some(3));
        assert_eq!(hero.register_bounce(), Some(4));
        assert_eq!(hero.register_bounce(), Some(5));
        assert_eq!(hero.register_bounce(), Some(5), "streak is capped");
    }

    #[test]
    fn test_ramp_up_caps() {
        let (config, mut hero) = setup();
        hero.touching = true;
        let speed = config.game_speed;

        let mut steps = 0;
        while hero.ramp_up(&config, speed) == Ramp::Accelerated {
            steps += 1;
            assert!(steps < 1000);
        }
        assert!(hero.vy > Params::MAX_UP_FACTOR * speed);
        assert!(hero.vy <= Params::MAX_UP_FACTOR * speed + config.thrust_up);
        assert_eq!(hero.tilt, (steps as f32).min(Params::MAX_TILT));
    }

    #[test]
    fn test_ramp_down_caps() {
        let (config, mut hero) = setup();
        let speed = config.game_speed;

        while hero.ramp_down(&config, speed) {}
        assert!(hero.vy < Params::MAX_DOWN_FACTOR * speed);
        assert_eq!(hero.tilt, Params::MIN_TILT);
    }

    #[test]
    fn test_ramp_up_reaches_apex_after_jump_distance() {
        let (config, mut hero) = setup();
        hero.touching = false;
        hero.kick(&config, config.game_speed, true);
        hero.pos.y = hero.bounce_floor + config.jump_distance;

        assert_eq!(hero.ramp_up(&config, config.game_speed), Ramp::Apex);
        assert_eq!(hero.bounce_floor, config.height);
    }

    #[test]
    fn test_advance_falls_out_of_bottom() {
        let (config, mut hero) = setup();
        hero.pos.y = -hero.size.y + 1.0;
        hero.vy = -1.0;
        assert!(hero.advance(&config, 1.0));
    }

    #[test]
    fn test_advance_clamps_ceiling() {
        let (config, mut hero) = setup();
        hero.pos.y = config.height + hero.size.y + 5.0;
        hero.vy = 0.0;
        assert!(!hero.advance(&config, config.game_speed));
        assert_eq!(hero.top(), config.height + hero.size.y);
    }

    #[test]
    fn test_kick_lifts_off_islands_only() {
        let (config, mut hero) = setup();
        let y = hero.pos.y;
        hero.kick(&config, config.game_speed, true);
        assert_eq!(hero.pos.y, y + config.bounce_lift());
        assert_eq!(hero.vy, Params::MAX_UP_FACTOR * config.game_speed);

        let y = hero.pos.y;
        hero.kick(&config, config.game_speed, false);
        assert_eq!(hero.pos.y, y);
    }
}
