/// Running score for the session
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: u32) {
        self.points = self.points.saturating_add(value);
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        use rand::Rng;
        // gen_bool panics outside [0, 1]; tuning is validated before it gets here
        self.0.gen_bool(probability.clamp(0.0, 1.0))
    }

    pub fn range_u32(&mut self, min: u32, max: u32) -> u32 {
        use rand::Rng;
        self.0.gen_range(min..=max)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred since the host last advanced the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub frames: u32,
    pub coins_collected: u32,
    pub bonuses_collected: u32,
    pub guardians_destroyed: u32,
    pub lives_lost: u32,
    pub lives_gained: u32,
    pub hits_absorbed: u32,
    pub bounces: u32,
    pub spawned: u32,
    pub despawned: u32,
    pub blinks: u32,
    pub banner_changed: bool,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_add() {
        let mut score = Score::new();
        assert_eq!(score.points, 0);
        score.add(10);
        score.add(200);
        assert_eq!(score.points, 210);
    }

    #[test]
    fn test_score_saturates() {
        let mut score = Score { points: u32::MAX - 5 };
        score.add(10);
        assert_eq!(score.points, u32::MAX);
    }

    #[test]
    fn test_rng_is_deterministic() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..20 {
            assert_eq!(a.range_u32(0, 1000), b.range_u32(0, 1000));
        }
    }

    #[test]
    fn test_rng_chance_extremes() {
        let mut rng = GameRng::new(1);
        for _ in 0..50 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.coins_collected = 3;
        events.lives_lost = 1;
        events.game_over = true;

        events.clear();

        assert_eq!(events, Events::default());
    }
}
