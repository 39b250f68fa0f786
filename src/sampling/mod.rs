//! Seed placement for the approximate Voronoi partition

/// Minimum-distance rejection sampling with relaxation
pub mod seeds;

pub use seeds::{SeedSampler, SeedSet};
