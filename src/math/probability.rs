//! Corner probability distributions and their expected frequencies

use crate::io::configuration::PROBABILITY_TOLERANCE;
use crate::io::error::{AlgorithmError, Result};

/// Selection probability for each corner, indexed from corner 1
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityDistribution {
    probabilities: Vec<f64>,
}

impl ProbabilityDistribution {
    /// Equal probability `1 / num_corners` for every corner
    pub fn uniform(num_corners: usize) -> Self {
        let share = 1.0 / num_corners as f64;
        Self {
            probabilities: vec![share; num_corners],
        }
    }

    /// Validate user supplied probabilities against the corner count
    ///
    /// An empty slice yields the uniform distribution. A slice one short of
    /// `num_corners` gets a final entry of `1 - sum`, which is not re-validated
    /// here; a negative one is caught by [`Self::corner_frequencies`].
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// - Fewer than `num_corners - 1` entries
    /// - More than `num_corners` entries
    /// - A supplied entry is negative or not finite
    /// - The entries do not sum to one within [`PROBABILITY_TOLERANCE`]
    pub fn resolve(supplied: &[f64], num_corners: usize) -> Result<Self> {
        if supplied.is_empty() {
            return Ok(Self::uniform(num_corners));
        }

        if supplied.len() < num_corners.saturating_sub(1) {
            return Err(AlgorithmError::MissingProbability {
                num_corners,
                provided: supplied.len(),
            });
        }

        let mut probabilities = supplied.to_vec();
        if probabilities.len() == num_corners.saturating_sub(1) {
            let derived = 1.0 - probabilities.iter().sum::<f64>();
            log::debug!("Derived probability {derived} for corner {num_corners}");
            probabilities.push(derived);
        }

        if probabilities.len() > num_corners {
            return Err(AlgorithmError::ExcessCorners {
                num_corners,
                provided: probabilities.len(),
            });
        }

        if let Some(bad) = supplied.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(AlgorithmError::InvalidDistribution {
                sum: supplied.iter().sum(),
                reason: format!("probability {bad} is not a finite non-negative number"),
            });
        }

        let sum: f64 = probabilities.iter().sum();
        if (sum - 1.0).abs() >= PROBABILITY_TOLERANCE {
            return Err(AlgorithmError::InvalidDistribution {
                sum,
                reason: "the entered probabilities do not (or cannot) sum up to 1".to_string(),
            });
        }

        Ok(Self { probabilities })
    }

    /// Probability of a corner by its 1-based index
    pub fn probability(&self, corner: usize) -> Option<f64> {
        corner
            .checked_sub(1)
            .and_then(|i| self.probabilities.get(i))
            .copied()
    }

    /// All probabilities in corner order
    pub const fn as_slice(&self) -> &[f64] {
        self.probabilities.as_slice()
    }

    /// Number of corners covered by the distribution
    pub const fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Whether the distribution covers no corners
    pub const fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Number of occurrences of each corner among `num_points` samples
    ///
    /// Each count is `floor(num_points * p)`, so the total may fall short of
    /// `num_points`. Counts are truncated toward zero, so rounding noise in a
    /// derived probability just below zero yields a count of zero.
    ///
    /// # Errors
    ///
    /// Returns an error if a derived probability yields a count of minus one
    /// or less
    pub fn corner_frequencies(&self, num_points: usize) -> Result<Vec<usize>> {
        self.probabilities
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let expected = (num_points as f64 * p).trunc();
                if expected < 0.0 {
                    return Err(AlgorithmError::InvalidDistribution {
                        sum: self.probabilities.iter().sum(),
                        reason: format!(
                            "corner {} has negative probability {p} and cannot be sampled",
                            i + 1
                        ),
                    });
                }
                Ok(expected as usize)
            })
            .collect()
    }
}
