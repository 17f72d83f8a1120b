//! Random polylines (bounded-turn walk + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic polyline sampler for benches and
//!   randomized tests. The walk never doubles back on itself, so sampled
//!   windows stay non-degenerate and `bend::angle_3pnt` returns finite
//!   angles.
//!
//! Model
//! - Start at `cfg.start` with a random heading, advance `steps` segments of
//!   length `step_len`, turning by a bounded random amount between segments.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;

/// Bounded-turn walk configuration.
#[derive(Clone, Copy, Debug)]
pub struct WalkCfg {
    /// Number of segments; the polyline has `steps + 1` points.
    pub steps: usize,
    /// Segment length.
    pub step_len: f64,
    /// Maximum absolute heading change per segment, in radians. Clamped to
    /// [0, π/2] so consecutive edges never fold back onto each other.
    pub turn_jitter: f64,
    /// First point of the walk.
    pub start: Point,
}

impl Default for WalkCfg {
    fn default() -> Self {
        Self {
            steps: 16,
            step_len: 1.0,
            turn_jitter: 0.8,
            start: Point::new(0.0, 0.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random polyline via a bounded-turn walk.
pub fn draw_polyline(cfg: WalkCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let jitter = cfg.turn_jitter.clamp(0.0, std::f64::consts::FRAC_PI_2);
    let mut heading = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut p = cfg.start;
    let mut points = Vec::with_capacity(cfg.steps + 1);
    points.push(p);
    for _ in 0..cfg.steps {
        heading += (rng.gen::<f64>() * 2.0 - 1.0) * jitter;
        p = p + Point::new(heading.cos(), heading.sin()) * cfg.step_len;
        points.push(p);
    }
    points
}
