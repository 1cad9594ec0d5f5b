//! Board geometry for the chaos game

/// Regular polygon corner generation
pub mod polygon;

pub use polygon::Polygon;
