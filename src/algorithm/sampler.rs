//! Weighted corner index streams for the iterated function system

use crate::io::error::Result;
use crate::math::probability::ProbabilityDistribution;
use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffled sequence of 1-based corner indices
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CornerSequence {
    indices: Vec<usize>,
}

impl CornerSequence {
    /// Wrap an existing index list without shuffling it
    pub const fn from_indices(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Indices in iteration order
    pub const fn as_slice(&self) -> &[usize] {
        self.indices.as_slice()
    }

    /// Number of indices in the sequence
    pub const fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the sequence holds no indices
    pub const fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Occurrences of each corner, position `i` counting corner `i + 1`
    pub fn tally(&self, num_corners: usize) -> Vec<usize> {
        let mut counts = vec![0; num_corners];
        for &index in &self.indices {
            if let Some(count) = index.checked_sub(1).and_then(|i| counts.get_mut(i)) {
                *count += 1;
            }
        }
        counts
    }
}

/// Generate the corner index stream for `num_points` samples
///
/// Corner `i` appears exactly `floor(num_points * p_i)` times; the result is
/// then shuffled uniformly so the order carries no correlation. Because of the
/// truncation the sequence may be shorter than `num_points`.
///
/// # Errors
///
/// Returns an error if the distribution holds a negative derived probability
pub fn generate_corner_sequence<R: Rng + ?Sized>(
    distribution: &ProbabilityDistribution,
    num_points: usize,
    rng: &mut R,
) -> Result<CornerSequence> {
    let frequencies = distribution.corner_frequencies(num_points)?;
    let total: usize = frequencies.iter().sum();

    let mut indices = Vec::with_capacity(total);
    for (i, &count) in frequencies.iter().enumerate() {
        indices.extend(std::iter::repeat_n(i + 1, count));
    }
    indices.shuffle(rng);

    if total < num_points {
        log::debug!(
            "Corner sequence truncated to {total} of {num_points} requested points"
        );
    }

    Ok(CornerSequence { indices })
}
