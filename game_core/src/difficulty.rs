use tracing::debug;

use crate::config::Config;
use crate::params::Params;
use crate::resources::GameRng;

/// Fibonacci numbers seeded from (0, 1): yields 1, 2, 3, 5, 8, ...
#[derive(Debug, Clone, Copy)]
pub struct Fibonacci {
    prev: [u64; 2],
}

impl Fibonacci {
    pub fn new() -> Self {
        Self { prev: [0, 1] }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let out = self.prev[0].checked_add(self.prev[1])?;
        self.prev = [self.prev[1], out];
        Some(out)
    }
}

/// Island spacing that tightens at fibonacci-numbered island counts
#[derive(Debug, Clone)]
pub struct Difficulty {
    spacing: f32,
    min_spacing: f32,
    milestones: Fibonacci,
    next_milestone: Option<u64>,
}

impl Difficulty {
    pub fn new(config: &Config) -> Self {
        let mut milestones = Fibonacci::new();
        let next_milestone = milestones.next();
        Self {
            spacing: config.initial_spacing.max(config.tuning.min_spacing),
            min_spacing: config.tuning.min_spacing,
            milestones,
            next_milestone,
        }
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn next_milestone(&self) -> Option<u64> {
        self.next_milestone
    }

    /// Called after every placed island. Returns true when the spacing tightened.
    pub fn on_island_placed(&mut self, islands: u64, rng: &mut GameRng) -> bool {
        if self.next_milestone != Some(islands) {
            return false;
        }

        let step = rng.range_u32(Params::SPACING_STEP_MIN, Params::SPACING_STEP_MAX) as f32;
        let before = self.spacing;
        self.spacing = (self.spacing - step).max(self.min_spacing);
        self.next_milestone = self.milestones.next();

        debug!(
            islands,
            before,
            after = self.spacing,
            next = ?self.next_milestone,
            "Island spacing tightened"
        );
        true
    }
}
