//! Rejection sampling of Voronoi seeds with a minimum pairwise distance
//!
//! Candidates are drawn inside a margin-bounded rectangle with the x
//! coordinate biased towards the low-x edge by raising a uniform sample to
//! the skew exponent. A candidate is accepted when it keeps twice the
//! configured spacing to every accepted seed. Once the attempt budget is
//! spent the sampler relaxes: the skew decays towards uniform as the set
//! fills, and candidates are accepted without the distance check until the
//! requested count is reached.

use rand::Rng;

use crate::geometry::Point;
use crate::geometry::Rect;
use crate::io::configuration::SAMPLING_ATTEMPTS_PER_SEED;
use crate::io::error::{Result, invalid_parameter, require_positive};

/// Sampled seeds together with how many were accepted under relaxation
///
/// Relaxed seeds always follow the strictly accepted ones.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedSet {
    seeds: Vec<Point>,
    relaxed: usize,
}

impl SeedSet {
    /// All seeds in acceptance order
    pub fn seeds(&self) -> &[Point] {
        &self.seeds
    }

    /// Seeds that passed the minimum-distance check
    pub fn strict_seeds(&self) -> &[Point] {
        let strict = self.seeds.len().saturating_sub(self.relaxed);
        self.seeds.get(..strict).unwrap_or_default()
    }

    /// Number of seeds accepted without the distance check
    pub const fn relaxed_count(&self) -> usize {
        self.relaxed
    }

    /// Total number of seeds
    pub const fn len(&self) -> usize {
        self.seeds.len()
    }

    /// True when no seeds were sampled
    pub const fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}

/// Seed sampler over a margin-bounded rectangle
#[derive(Debug, Clone, Copy)]
pub struct SeedSampler {
    area: Rect,
    spacing: f64,
    skew: f64,
}

impl SeedSampler {
    /// Create a sampler for a `width` × `height` rectangle
    ///
    /// Seeds land in `[margin, width - margin] × [margin, height - margin]`
    /// and strictly accepted seeds keep `2 × spacing` to each other.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - `width` or `height` is not a positive finite number
    /// - `margin` is negative or leaves no room (`2 × margin ≥ min(width, height)`)
    /// - `spacing` is negative or not finite
    /// - `skew` is below 1 or not finite
    pub fn new(width: f64, height: f64, margin: f64, spacing: f64, skew: f64) -> Result<Self> {
        require_positive("width", width)?;
        require_positive("height", height)?;

        if !margin.is_finite() || margin < 0.0 {
            return Err(invalid_parameter(
                "margin",
                &margin,
                &"must be a non-negative finite number",
            ));
        }
        if 2.0 * margin >= width.min(height) {
            return Err(invalid_parameter(
                "margin",
                &margin,
                &format!("twice the margin must be smaller than {width} x {height}"),
            ));
        }
        if !spacing.is_finite() || spacing < 0.0 {
            return Err(invalid_parameter(
                "spacing",
                &spacing,
                &"must be a non-negative finite number",
            ));
        }
        if !skew.is_finite() || skew < 1.0 {
            return Err(invalid_parameter(
                "skew",
                &skew,
                &"must be a finite number of at least 1",
            ));
        }

        Ok(Self {
            area: Rect::new(margin, margin, width - margin, height - margin),
            spacing,
            skew,
        })
    }

    /// Rectangle every seed lies in
    pub const fn area(&self) -> Rect {
        self.area
    }

    /// Minimum distance between strictly accepted seeds
    pub const fn min_distance(&self) -> f64 {
        2.0 * self.spacing
    }

    /// Sample exactly `count` seeds
    ///
    /// Randomness comes only from `rng`, so a seeded generator reproduces the
    /// same set bit for bit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `count` is zero
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<SeedSet> {
        if count == 0 {
            return Err(invalid_parameter("count", &count, &"must be at least 1"));
        }

        let min_distance_squared = self.min_distance() * self.min_distance();
        let max_attempts = count.saturating_mul(SAMPLING_ATTEMPTS_PER_SEED);
        let mut seeds: Vec<Point> = Vec::with_capacity(count);

        let mut attempts = 0;
        while seeds.len() < count && attempts < max_attempts {
            attempts += 1;
            let candidate = self.draw(self.skew, rng);
            if seeds
                .iter()
                .all(|seed| seed.distance_squared(candidate) >= min_distance_squared)
            {
                seeds.push(candidate);
            }
        }

        let strict = seeds.len();
        while seeds.len() < count {
            let filled = seeds.len() as f64 / count as f64;
            let relaxed_skew = (self.skew * (1.0 - filled)).max(1.0);
            seeds.push(self.draw(relaxed_skew, rng));
        }

        Ok(SeedSet {
            relaxed: seeds.len() - strict,
            seeds,
        })
    }

    fn draw<R: Rng + ?Sized>(&self, skew: f64, rng: &mut R) -> Point {
        let u: f64 = rng.random();
        let v: f64 = rng.random();
        Point::new(
            self.area.width().mul_add(u.powf(skew), self.area.min.x),
            self.area.height().mul_add(v, self.area.min.y),
        )
    }
}
