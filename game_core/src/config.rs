use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::Params;

/// Run-time tunables, loadable from JSON. Missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub starting_lives: u32,
    pub max_lives: u32,
    pub coins_per_life: u32,
    pub coin_value: u32,
    pub bonus_value: u32,
    pub bounce_value: u32,
    pub immortality_secs: f32,
    pub blink_secs: f32,
    pub banner_secs: f32,
    pub bezier_precision: f64,
    pub min_spacing: f32,
    pub islands_before_guardian: u32,
    pub guardian_chance: f64,
    pub bonus_chance: f64,
    pub island_skip_chance: f64,
    pub coin_skip_chance: f64,
    pub coin_factor: f32,
    pub island_factor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: Params::STARTING_LIVES,
            max_lives: Params::MAX_LIVES,
            coins_per_life: Params::COINS_PER_LIFE,
            coin_value: Params::COIN_VALUE,
            bonus_value: Params::BONUS_VALUE,
            bounce_value: Params::BOUNCE_VALUE,
            immortality_secs: Params::IMMORTALITY_SECS,
            blink_secs: Params::BLINK_SECS,
            banner_secs: Params::BANNER_SECS,
            bezier_precision: Params::BEZIER_PRECISION,
            min_spacing: Params::MIN_SPACING,
            islands_before_guardian: Params::ISLANDS_BEFORE_GUARDIAN,
            guardian_chance: Params::GUARDIAN_CHANCE,
            bonus_chance: Params::BONUS_CHANCE,
            island_skip_chance: Params::ISLAND_SKIP_CHANCE,
            coin_skip_chance: Params::COIN_SKIP_CHANCE,
            coin_factor: Params::COIN_FACTOR,
            island_factor: Params::ISLAND_FACTOR,
        }
    }
}

impl Tuning {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(text)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_lives == 0 || self.starting_lives > self.max_lives {
            return Err(ConfigError::InvalidLives {
                starting: self.starting_lives,
                max: self.max_lives,
            });
        }
        if !(self.bezier_precision > 0.0 && self.bezier_precision <= 1.0) {
            return Err(ConfigError::InvalidPrecision(self.bezier_precision));
        }

        let chances = [
            ("guardian_chance", self.guardian_chance),
            ("bonus_chance", self.bonus_chance),
            ("island_skip_chance", self.island_skip_chance),
            ("coin_skip_chance", self.coin_skip_chance),
        ];
        for (field, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ChanceOutOfRange { field, value });
            }
        }

        let timers = [
            ("immortality_secs", self.immortality_secs),
            ("blink_secs", self.blink_secs),
            ("banner_secs", self.banner_secs),
        ];
        for (field, value) in timers {
            // Negated so NaN fails too
            if !(value >= Params::MIN_TIMER_SECS) {
                return Err(ConfigError::TooShort {
                    field,
                    value,
                    min: Params::MIN_TIMER_SECS,
                });
            }
        }

        let positives = [
            ("coins_per_life", self.coins_per_life as f32),
            ("min_spacing", self.min_spacing),
            ("coin_factor", self.coin_factor),
            ("island_factor", self.island_factor),
        ];
        for (field, value) in positives {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }
}

/// Session configuration, resolved once from the display size
#[derive(Debug, Clone)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub unit: f32,
    pub game_speed: f32,
    pub jump_distance: f32,
    pub initial_spacing: f32,
    pub curve_seed: Vec2,
    pub hero_size: Vec2,
    pub coin_size: Vec2,
    pub island_size: Vec2,
    pub rider_size: Vec2,
    pub thrust_up: f32,
    pub thrust_down: f32,
    pub tuning: Tuning,
}

impl Config {
    pub fn new(width: f32, height: f32, tuning: Tuning) -> Result<Self, ConfigError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidDisplay { width, height });
        }
        tuning.validate()?;

        let unit = (width / Params::UNIT_DIVISOR).floor();
        let thrust_up = Params::THRUST_UP_PER_UNIT * unit;

        Ok(Self {
            width,
            height,
            unit,
            game_speed: width / Params::SPEED_DIVISOR,
            jump_distance: (width / Params::JUMP_DIVISOR).floor(),
            initial_spacing: (Params::SPACING_UNITS * unit).floor(),
            curve_seed: Vec2::new(Params::CURVE_SEED_X * width, (height / 2.0).floor()),
            hero_size: Vec2::splat(unit),
            coin_size: Vec2::splat(unit / 2.0),
            island_size: Vec2::new(2.5 * unit, unit),
            rider_size: Vec2::splat(unit / 2.0),
            thrust_up,
            thrust_down: Params::THRUST_DOWN_RATIO * thrust_up,
            tuning,
        })
    }

    /// Config with default tuning for the given display
    pub fn for_display(width: f32, height: f32) -> Result<Self, ConfigError> {
        Self::new(width, height, Tuning::default())
    }

    /// Bottom-left corner of the hero at session start (centred at `(unit, height / 2)`)
    pub fn hero_start(&self) -> Vec2 {
        Vec2::new(self.unit, self.height / 2.0) - self.hero_size / 2.0
    }

    /// How far the hero's bottom may sit below an island top and still land on it
    pub fn landing_margin(&self) -> f32 {
        self.unit / 4.5
    }

    /// Lift applied when bouncing off an island
    pub fn bounce_lift(&self) -> f32 {
        self.unit / 4.0
    }

    pub fn quarter_width(&self) -> f32 {
        (self.width / 4.0).floor()
    }
}
