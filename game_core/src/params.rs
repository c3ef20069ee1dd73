/// Game tuning parameters for the flyer
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Clock
    pub const FPS: f32 = 60.0;
    pub const FRAME_DT: f32 = 1.0 / Self::FPS;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
    pub const MIN_TIMER_SECS: f32 = Self::FRAME_DT; // Shortest tunable timer

    // Display scaling (divisors of the window width)
    pub const UNIT_DIVISOR: f32 = 12.0;
    pub const SPEED_DIVISOR: f32 = 300.0;
    pub const JUMP_DIVISOR: f32 = 23.0;

    // Curve
    pub const BEZIER_PRECISION: f64 = 0.2;
    pub const CURVE_SEED_X: f32 = 1.75; // Multiple of field width

    // Spacing between islands
    pub const SPACING_UNITS: f32 = 3.5;
    pub const MIN_SPACING: f32 = 15.0;
    pub const SPACING_STEP_MIN: u32 = 30;
    pub const SPACING_STEP_MAX: u32 = 50;
    pub const ISLAND_JITTER: u32 = 50;
    pub const COIN_RELEASE_MIN: u32 = 100;
    pub const COIN_RELEASE_MAX: u32 = 500;

    // Lives
    pub const STARTING_LIVES: u32 = 3;
    pub const MAX_LIVES: u32 = 3;
    pub const COINS_PER_LIFE: u32 = 10;
    pub const IMMORTALITY_SECS: f32 = 3.0;
    pub const BLINK_SECS: f32 = 0.1;

    // Score
    pub const COIN_VALUE: u32 = 10;
    pub const BONUS_VALUE: u32 = 200;
    pub const BOUNCE_VALUE: u32 = 30;
    pub const BANNER_SECS: f32 = 3.0;

    // Spawn chances
    pub const ISLANDS_BEFORE_GUARDIAN: u32 = 30;
    pub const GUARDIAN_CHANCE: f64 = 3.0 / 11.0;
    pub const BONUS_CHANCE: f64 = 5.0 / 11.0;
    pub const ISLAND_SKIP_CHANCE: f64 = 0.3;
    pub const COIN_SKIP_CHANCE: f64 = 0.0;

    // Scroll factors (multiples of the global speed)
    pub const COIN_FACTOR: f32 = 1.1;
    pub const ISLAND_FACTOR: f32 = 1.1;
    pub const GUARDIAN_TOWARD: f32 = 1.2; // Multiples of the host island speed
    pub const GUARDIAN_AWAY: f32 = 0.5;
    pub const GUARDIAN_ALERT: f32 = 1.0;

    // Hero thrust
    pub const THRUST_UP_PER_UNIT: f32 = 0.01 / 6.64;
    pub const THRUST_DOWN_RATIO: f32 = 1.2;
    pub const MAX_UP_FACTOR: f32 = 0.9;
    pub const MAX_DOWN_FACTOR: f32 = -1.1;
    pub const MAX_TILT: f32 = 25.0;
    pub const MIN_TILT: f32 = -10.0;
    pub const MAX_BOUNCES: u32 = 5;
}
