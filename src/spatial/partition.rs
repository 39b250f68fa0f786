//! Adaptive partitioning of one axis into tile boundaries

use crate::io::error::{Result, invalid_parameter, require_positive};

/// Ordered cut positions along one axis
///
/// Always starts at 0, ends at the partitioned length and is strictly
/// increasing. Every interval except the last is exactly the preferred size;
/// the last one absorbs whatever remains.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisPartition {
    steps: Vec<f64>,
}

impl AxisPartition {
    /// Partition `length` into steps close to `preferred`
    ///
    /// Steps advance by `preferred` while more than `minimum` remains. A
    /// proposal that would reach the end, or leave less than `minimum` after
    /// it, snaps to `length` instead, so a too-short remainder is merged into
    /// the final interval. A length of at most `minimum` is never subdivided.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any argument is not a positive finite
    /// number or `minimum` exceeds `preferred`
    pub fn new(length: f64, preferred: f64, minimum: f64) -> Result<Self> {
        require_positive("length", length)?;
        require_positive("preferred", preferred)?;
        require_positive("minimum", minimum)?;
        if minimum > preferred {
            return Err(invalid_parameter(
                "minimum",
                &minimum,
                &format!("must not exceed the preferred step {preferred}"),
            ));
        }

        let mut steps = vec![0.0];
        let mut position = 0.0;
        while length - position > minimum {
            let candidate = position + preferred;
            if candidate >= length || length - candidate < minimum {
                steps.push(length);
                break;
            }
            steps.push(candidate);
            position = candidate;
        }
        if steps.last().is_some_and(|&last| last < length) {
            steps.push(length);
        }

        Ok(Self { steps })
    }

    /// Cut positions including both ends
    pub fn steps(&self) -> &[f64] {
        &self.steps
    }

    /// Total partitioned length
    pub fn length(&self) -> f64 {
        self.steps.last().copied().unwrap_or(0.0)
    }

    /// Number of intervals between consecutive steps
    pub const fn interval_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Interval `index` as `(start, end)`
    pub fn interval(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.steps.get(index)?, *self.steps.get(index + 1)?))
    }

    /// All intervals in order
    pub fn intervals(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.steps.windows(2).filter_map(|pair| match pair {
            [start, end] => Some((*start, *end)),
            _ => None,
        })
    }
}
