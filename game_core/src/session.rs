//! One play session: phase machine, touch input, and the per-frame update.
//!
//! The host owns the clock. It forwards touches and calls [`Session::advance`]
//! with wall-clock deltas; every scheduled callback then runs serially on the
//! caller's thread.

use std::fmt;

use glam::Vec2;
use hecs::{Entity, World};
use tracing::{debug, info};

use crate::config::Config;
use crate::hero::{Hero, LifeLoss, Ramp};
use crate::params::Params;
use crate::resources::{Events, GameRng, Score};
use crate::systems::*;
use crate::timers::{Task, Timers};

pub const START_BANNER: &str = "Touch to Start";
pub const GAME_OVER_BANNER: &str = "Game Over";

/// Session phase. There is no way back from `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Banner shown for a bounce streak of `streak` island landings
pub fn streak_label(streak: u32) -> Option<&'static str> {
    match streak {
        0..=2 => None,
        3 => Some("Triple Jump!"),
        4 => Some("Quadro Jump!"),
        _ => Some("Multiply Jump!"),
    }
}

pub struct Session {
    pub world: World,
    pub config: Config,
    pub hero: Hero,
    pub score: Score,
    pub events: Events,
    pub timers: Timers,
    pub spawner: Spawner,
    rng: GameRng,
    speed: f32,
    phase: Phase,
    banner: String,
    frames: u64,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Self {
        let hero = Hero::new(&config);
        let spawner = Spawner::new(&config);
        Self {
            world: World::new(),
            hero,
            score: Score::new(),
            events: Events::new(),
            timers: Timers::new(),
            spawner,
            rng: GameRng::new(seed),
            speed: 0.0,
            phase: Phase::Idle,
            banner: START_BANNER.to_string(),
            frames: 0,
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Global scroll speed in pixels per frame
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn banner(&self) -> &str {
        &self.banner
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Seconds on the session clock
    pub fn elapsed(&self) -> f64 {
        self.timers.now()
    }

    /// Begin climbing. The first touch also starts the session.
    pub fn touch_down(&mut self, at: Vec2) {
        if self.phase == Phase::GameOver {
            return;
        }
        debug!(x = at.x, y = at.y, "Touch down");

        self.hero.touching = true;
        self.hero.bounces = 0;
        self.hero.bounce_floor = self.config.height;
        self.timers.unschedule(Task::ThrustDown);
        self.timers.schedule_interval(Task::ThrustUp, Params::FRAME_DT);

        if self.phase == Phase::Idle {
            self.start();
        }
    }

    /// Begin falling
    pub fn touch_up(&mut self, at: Vec2) {
        if self.phase == Phase::GameOver {
            return;
        }
        debug!(x = at.x, y = at.y, "Touch up");

        self.hero.touching = false;
        self.timers.unschedule(Task::ThrustUp);
        self.timers.schedule_interval(Task::ThrustDown, Params::FRAME_DT);
    }

    /// Advance the session clock by `dt` seconds, running every callback that
    /// falls due. Events are reset at the start of each call.
    pub fn advance(&mut self, dt: f32) {
        self.events.clear();

        let until = self.timers.now() + dt.clamp(0.0, Params::MAX_DT) as f64;
        while let Some(task) = self.timers.pop_due(until) {
            self.run(task);
        }
        self.timers.settle(until);
    }

    /// End-of-session summary
    pub fn report(&self) -> Report {
        Report {
            phase: self.phase,
            points: self.score.points,
            coins: self.hero.coins,
            lives: self.hero.lives,
            islands: self.spawner.islands_placed(),
            elapsed: self.elapsed(),
        }
    }

    fn start(&mut self) {
        self.set_phase(Phase::Running);
        self.speed = self.config.game_speed;
        self.banner.clear();

        self.spawner
            .prime(&mut self.world, &self.config, &mut self.rng, &mut self.events);
        self.timers.schedule_interval(Task::Frame, Params::FRAME_DT);
    }

    fn run(&mut self, task: Task) {
        match task {
            Task::Frame => self.frame(),
            Task::ThrustUp => {
                if self.hero.ramp_up(&self.config, self.speed) == Ramp::Apex {
                    self.timers.unschedule(Task::ThrustUp);
                    self.timers
                        .schedule_interval(Task::ThrustDown, Params::FRAME_DT);
                }
            }
            Task::ThrustDown => {
                self.hero.ramp_down(&self.config, self.speed);
            }
            Task::BecomeMortal => {
                self.hero.become_mortal();
                self.timers.unschedule(Task::Blink);
            }
            Task::Blink => {
                self.hero.toggle_visible();
                self.events.blinks += 1;
            }
            Task::ClearBanner => {
                self.banner.clear();
                self.events.banner_changed = true;
            }
        }
    }

    fn frame(&mut self) {
        self.frames += 1;
        self.events.frames += 1;

        // 1. Hero vertical motion; falling out the bottom costs a life
        if self.hero.advance(&self.config, self.speed) {
            self.hurt();
            if self.phase != Phase::Running {
                return;
            }
            self.hero.kick(&self.config, self.speed, false);
            self.climb();
        }

        // 2. Guardians pick their speed, then everything scrolls
        patrol_guardians(&mut self.world, &self.hero, &self.config);
        scroll_entities(&mut self.world, self.speed);

        // 3. Resolve contacts against post-motion positions
        for contact in find_contacts(&self.world, &self.hero) {
            if self.phase != Phase::Running {
                return;
            }
            match react(&contact, &self.hero, &self.config) {
                Reaction::Collect { points, coin } => self.collect(contact.entity, points, coin),
                Reaction::Bounce => self.bounce(),
                Reaction::Hurt => self.hurt(),
                Reaction::Destroy => {
                    self.remove(contact.entity);
                    self.events.guardians_destroyed += 1;
                }
            }
        }

        // 4. Prune, then refill
        gc(&mut self.world, &mut self.events);
        self.spawner.tick(
            &mut self.world,
            &self.config,
            &mut self.rng,
            &mut self.events,
            self.speed,
        );
    }

    fn collect(&mut self, entity: Entity, points: u32, coin: bool) {
        if !self.remove(entity) {
            return;
        }
        self.score.add(points);

        if !coin {
            self.events.bonuses_collected += 1;
            return;
        }
        self.events.coins_collected += 1;
        if self.hero.collect_coin(self.config.tuning.coins_per_life)
            && self.hero.grant_life(self.config.tuning.max_lives)
        {
            self.events.lives_gained += 1;
            info!(lives = self.hero.lives, coins = self.hero.coins, "Life granted");
        }
    }

    /// Land on an island top and spring back up
    fn bounce(&mut self) {
        self.hero.kick(&self.config, self.speed, true);
        self.events.bounces += 1;

        if let Some(streak) = self.hero.register_bounce() {
            self.score
                .add(streak.saturating_mul(self.config.tuning.bounce_value));
            if let Some(label) = streak_label(streak) {
                self.show_banner(label);
            }
        }
        self.climb();
    }

    fn climb(&mut self) {
        self.timers.unschedule(Task::ThrustDown);
        self.timers.schedule_interval(Task::ThrustUp, Params::FRAME_DT);
    }

    fn hurt(&mut self) {
        match self.hero.lose_life() {
            LifeLoss::Absorbed => self.events.hits_absorbed += 1,
            LifeLoss::Lost { remaining } => {
                self.events.lives_lost += 1;
                info!(remaining, "Life lost");
                self.timers
                    .schedule_once(Task::BecomeMortal, self.config.tuning.immortality_secs);
                self.timers
                    .schedule_interval(Task::Blink, self.config.tuning.blink_secs);
            }
            LifeLoss::Exhausted => {
                self.events.lives_lost += 1;
                self.game_over();
            }
        }
    }

    fn game_over(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }
        self.set_phase(Phase::GameOver);
        self.timers.clear();
        self.speed = 0.0;
        self.hero.touching = false;
        self.hero.vy = 0.0;
        self.banner = GAME_OVER_BANNER.to_string();
        self.events.banner_changed = true;
        self.events.game_over = true;
        info!(points = self.score.points, coins = self.hero.coins, "Game over");
    }

    fn show_banner(&mut self, text: &str) {
        self.banner = text.to_string();
        self.events.banner_changed = true;
        self.timers
            .schedule_once(Task::ClearBanner, self.config.tuning.banner_secs);
    }

    /// Returns false if the entity was already gone
    fn remove(&mut self, entity: Entity) -> bool {
        let removed = self.world.despawn(entity).is_ok();
        if removed {
            self.events.despawned += 1;
        }
        removed
    }

    fn set_phase(&mut self, next: Phase) {
        info!(from = %self.phase, to = %next, "Session phase changed");
        self.phase = next;
    }
}

/// End-of-session summary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub phase: Phase,
    pub points: u32,
    pub coins: u32,
    pub lives: u32,
    pub islands: u64,
    pub elapsed: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} points, {} coins, {} lives left, {} islands in {:.1}s",
            self.phase, self.points, self.coins, self.lives, self.islands, self.elapsed
        )
    }
}
