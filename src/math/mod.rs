//! Mathematical utilities for the chaos game

/// Corner probability distributions and frequency counts
pub mod probability;

pub use probability::ProbabilityDistribution;
