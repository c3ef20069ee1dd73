use glam::Vec2;
use hecs::World;
use rand::Rng;
use tracing::debug;

use crate::components::Heading;
use crate::config::Config;
use crate::curve::CurveChain;
use crate::difficulty::Difficulty;
use crate::params::Params;
use crate::resources::{Events, GameRng};
use crate::{create_bonus, create_coin, create_guardian, create_island};

/// Distance pacing for one kind of spawn.
///
/// The marker sits at the right edge of the lane's last placement (placed or
/// skipped) and scrolls with it. The lane fires once the marker reaches its
/// release line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lane {
    marker: f32,
    release: f32,
    factor: f32,
}

impl Lane {
    /// A lane that is due immediately
    pub fn new(factor: f32) -> Self {
        Self {
            marker: 0.0,
            release: 0.0,
            factor,
        }
    }

    pub fn arm(&mut self, marker: f32, release: f32) {
        self.marker = marker;
        self.release = release;
    }

    pub fn marker(&self) -> f32 {
        self.marker
    }

    pub fn release(&self) -> f32 {
        self.release
    }

    pub fn is_due(&self) -> bool {
        self.marker <= self.release
    }

    /// Scroll the marker one frame. Returns true once the lane is due.
    pub fn advance(&mut self, speed: f32) -> bool {
        self.marker -= self.factor * speed;
        self.is_due()
    }
}

/// Places coin batches along chained curves and islands at the current spacing
#[derive(Debug, Clone)]
pub struct Spawner {
    chain: CurveChain,
    coins: Lane,
    islands: Lane,
    islands_placed: u64,
    difficulty: Difficulty,
}

impl Spawner {
    pub fn new(config: &Config) -> Self {
        Self {
            chain: CurveChain::new(config.curve_seed),
            coins: Lane::new(config.tuning.coin_factor),
            islands: Lane::new(config.tuning.island_factor),
            islands_placed: 0,
            difficulty: Difficulty::new(config),
        }
    }

    pub fn islands_placed(&self) -> u64 {
        self.islands_placed
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    pub fn island_lane(&self) -> &Lane {
        &self.islands
    }

    /// Opening placements when the session starts
    pub fn prime(
        &mut self,
        world: &mut World,
        config: &Config,
        rng: &mut GameRng,
        events: &mut Events,
    ) {
        self.spawn_island(world, config, rng, events);
        self.spawn_coins(world, config, rng, events);
    }

    /// Scroll both lane markers and refill whichever lane came due
    pub fn tick(
        &mut self,
        world: &mut World,
        config: &Config,
        rng: &mut GameRng,
        events: &mut Events,
        speed: f32,
    ) {
        if self.coins.advance(speed) {
            self.spawn_coins(world, config, rng, events);
        }
        if self.islands.advance(speed) {
            self.spawn_island(world, config, rng, events);
        }
    }

    fn spawn_coins(
        &mut self,
        world: &mut World,
        config: &Config,
        rng: &mut GameRng,
        events: &mut Events,
    ) {
        let candidates = self.chain.next_curve(config, rng);

        let mut placed = 0;
        for candidate in &candidates {
            if rng.chance(config.tuning.coin_skip_chance) {
                continue;
            }
            create_coin(world, candidate.as_vec2(), config);
            placed += 1;
        }
        events.spawned += placed;

        // A batch always has samples at a valid precision; fall back to the edge anyway
        let tail = candidates
            .last()
            .map(|c| c.x as f32)
            .unwrap_or(config.width);
        let release =
            config.width - rng.range_u32(Params::COIN_RELEASE_MIN, Params::COIN_RELEASE_MAX) as f32;
        self.coins.arm(tail + config.coin_size.x, release);

        debug!(
            candidates = candidates.len(),
            placed,
            release,
            "Coin batch"
        );
    }

    fn spawn_island(
        &mut self,
        world: &mut World,
        config: &Config,
        rng: &mut GameRng,
        events: &mut Events,
    ) {
        let max_y = (config.height - config.island_size.y).max(0.0) as i32;
        let pos = Vec2::new(config.width, rng.0.gen_range(0..=max_y) as f32);

        if rng.chance(config.tuning.island_skip_chance) {
            debug!(x = pos.x, "Island skipped");
        } else {
            let island = create_island(world, pos, config);
            self.islands_placed += 1;
            events.spawned += 1;
            self.difficulty.on_island_placed(self.islands_placed, rng);

            if self.islands_placed >= config.tuning.islands_before_guardian as u64
                && rng.chance(config.tuning.guardian_chance)
            {
                // Riders stand on the island top, fully inside its span
                let top = pos.y + config.island_size.y;
                let span = (config.island_size.x - config.rider_size.x).max(0.0) as i32;

                if rng.chance(config.tuning.bonus_chance) {
                    let x = pos.x + rng.0.gen_range(0..=span) as f32;
                    create_bonus(world, island, Vec2::new(x, top), config);
                    events.spawned += 1;
                }

                let heading = if rng.0.gen_bool(0.5) {
                    Heading::TowardHero
                } else {
                    Heading::AwayFromHero
                };
                let x = pos.x + rng.0.gen_range(0..=span) as f32;
                create_guardian(world, island, Vec2::new(x, top), heading, config);
                events.spawned += 1;
            }
        }

        let jitter = rng.range_u32(0, Params::ISLAND_JITTER) as f32;
        let release = config.width - self.difficulty.spacing() - jitter;
        self.islands.arm(pos.x + config.island_size.x, release);

        debug!(
            islands = self.islands_placed,
            spacing = self.difficulty.spacing(),
            release,
            "Island lane armed"
        );
    }
}
