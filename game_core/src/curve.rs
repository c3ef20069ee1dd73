//! Spawn paths for coin batches.
//!
//! Coins follow a cubic Bezier curve whose control points are drawn to the
//! right of the visible field. Successive curves are chained: the last control
//! point of one curve seeds the first control point of the next, so the batches
//! read as one winding trail once they scroll into view.

use glam::{IVec2, Vec2};
use rand::Rng;

use crate::config::Config;
use crate::resources::GameRng;

/// Sample a cubic Bezier curve at `t = precision, 2 * precision, ...` while `t <= 1`.
///
/// `t` accumulates in `f64`, so whether `t = 1` itself is sampled depends on the
/// rounding of the running sum (0.2 reaches exactly 1.0, 0.3 stops near 0.9).
/// Coordinates are truncated toward zero.
pub fn bezier(points: &[Vec2; 4], precision: f64) -> Vec<IVec2> {
    assert!(
        precision > 0.0 && precision <= 1.0,
        "bezier precision out of range: {precision}"
    );

    let [p0, p1, p2, p3] = points.map(|p| (p.x as f64, p.y as f64));
    let mut coords = Vec::new();

    let mut t = precision;
    while t <= 1.0 {
        let u = 1.0 - t;
        let w0 = u * u * u;
        let w1 = 3.0 * t * u * u;
        let w2 = 3.0 * t * t * u;
        let w3 = t * t * t;

        let x = w0 * p0.0 + w1 * p1.0 + w2 * p2.0 + w3 * p3.0;
        let y = w0 * p0.1 + w1 * p1.1 + w2 * p2.1 + w3 * p3.1;
        coords.push(IVec2::new(x as i32, y as i32));

        t += precision;
    }
    coords
}

/// Carries the last control point from one curve to the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveChain {
    last: Vec2,
}

impl CurveChain {
    pub fn new(seed: Vec2) -> Self {
        Self { last: seed }
    }

    /// Last control point of the most recent curve (the seed before the first call)
    pub fn last_point(&self) -> Vec2 {
        self.last
    }

    /// Draw the next four control points.
    ///
    /// The carried point moves left by three quarters of the field width, the
    /// distance the previous batch has travelled by the time the next is asked
    /// for. The three new points lie in consecutive quarter-width bands starting
    /// one quarter past the right edge, with random heights inside the field.
    pub fn next_control_points(&mut self, config: &Config, rng: &mut GameRng) -> [Vec2; 4] {
        let quarter = config.quarter_width();
        let width = config.width;
        let bands = [
            width + quarter,
            width + 2.0 * quarter,
            width + 3.0 * quarter,
            2.0 * width,
        ];

        let mut points = [Vec2::ZERO; 4];
        points[0] = self.last - Vec2::new(3.0 * quarter, 0.0);
        for (slot, band) in points[1..].iter_mut().zip(bands.windows(2)) {
            let x = rng.0.gen_range(band[0] as i32..=band[1] as i32);
            let y = rng.0.gen_range(0..=config.height as i32);
            *slot = Vec2::new(x as f32, y as f32);
        }

        self.last = points[3];
        points
    }

    /// Next batch of spawn coordinates
    pub fn next_curve(&mut self, config: &Config, rng: &mut GameRng) -> Vec<IVec2> {
        let points = self.next_control_points(config, rng);
        bezier(&points, config.tuning.bezier_precision)
    }
}
