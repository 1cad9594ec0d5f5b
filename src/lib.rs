//! Chaos game fractals on regular polygons
//!
//! A weighted stream of corner indices drives the contraction
//! `p ← s·p + (1 − s)·corner`, whose orbit approximates the attractor of the
//! iterated function system made of one contraction per corner.

#![forbid(unsafe_code)]

/// Corner sampling, the contraction recurrence and game orchestration
pub mod algorithm;
/// Command-line interface, configuration, rendering and error handling
pub mod io;
/// Probability distributions over corners
pub mod math;
/// Polygon board geometry
pub mod spatial;

pub use algorithm::executor::{ChaosGame, Fractal, FractalParams};
pub use io::error::{AlgorithmError, Result};
