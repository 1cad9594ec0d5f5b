//! Error types for attractor generation and rendering

use std::fmt;
use std::path::PathBuf;

/// Main error type for all chaos game operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Game configuration validation failed
    ///
    /// Raised for corner counts below three and scales outside `(0, 1]`
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Probability information for two or more corners is missing
    MissingProbability {
        /// Number of corners in the game
        num_corners: usize,
        /// Number of probabilities supplied
        provided: usize,
    },

    /// More probabilities were supplied than the game has corners
    ExcessCorners {
        /// Number of corners in the game
        num_corners: usize,
        /// Number of probabilities after deriving the final entry
        provided: usize,
    },

    /// Probabilities do not (or cannot) sum to one
    InvalidDistribution {
        /// Sum of the supplied or derived probabilities
        sum: f64,
        /// Explanation of what is wrong with the distribution
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MissingProbability {
                num_corners,
                provided,
            } => {
                write!(
                    f,
                    "Probability information for two or more corners is missing \
                     ({provided} given for {num_corners} corners, at least {} required)",
                    num_corners.saturating_sub(1)
                )
            }
            Self::ExcessCorners {
                num_corners,
                provided,
            } => {
                write!(
                    f,
                    "{provided} probabilities given but the game only has {num_corners} corners"
                )
            }
            Self::InvalidDistribution { sum, reason } => {
                write!(f, "Invalid probability distribution (sum {sum}): {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for chaos game results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

impl AlgorithmError {
    /// Whether the error was raised while validating a probability distribution
    pub const fn is_distribution_error(&self) -> bool {
        matches!(
            self,
            Self::MissingProbability { .. }
                | Self::ExcessCorners { .. }
                | Self::InvalidDistribution { .. }
        )
    }
}

