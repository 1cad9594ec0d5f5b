//! Game constants, runtime defaults and named presets

use clap::ValueEnum;

// Validation limits
/// Fewest corners a game may have
pub const MIN_CORNERS: usize = 3;
/// Allowed deviation of a probability sum from one
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

// Default values for configurable parameters
/// Default number of polygon corners
pub const DEFAULT_NUM_CORNERS: usize = 5;
/// Default fraction of the remaining distance retained at each step
pub const DEFAULT_SCALE: f64 = 1.0 / 3.0;
/// Default number of points making up the fractal
pub const DEFAULT_NUM_POINTS: usize = 20_000;
/// Default starting position of the walk
pub const DEFAULT_STARTING_POS: [f64; 2] = [0.0, 0.0];

// Rendering settings
/// Default side length of the rendered image in pixels
pub const DEFAULT_IMAGE_SIZE: u32 = 1000;
/// Half-width of the square view window in world units
pub const VIEW_EXTENT: f64 = 1.1;
/// Side length of the square drawn for each corner
pub const CORNER_MARKER_SIZE: u32 = 3;
/// Image background color
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Color of fractal points
pub const POINT_COLOR: [u8; 4] = [0, 128, 0, 255];
/// Color of corner markers
pub const CORNER_COLOR: [u8; 4] = [255, 0, 0, 255];

// Output settings
/// Default output image path
pub const DEFAULT_OUTPUT: &str = "chaos_game.png";
/// Suffix for the polygon variant when both variants are rendered
pub const POLYGON_SUFFIX: &str = "_polygon";
/// Suffix for the corner-at-center variant when both variants are rendered
pub const CENTER_SUFFIX: &str = "_center";

/// Number of points generated between progress notifications
pub const PROGRESS_CHUNK: usize = 1024;

/// Combinations of corners, scale and weights known to give clean attractors
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Sierpinski triangle
    Triangle,
    /// Four corners at half scale, which fills the square
    Square,
    /// Three outer corners plus a heavily weighted center corner
    WeightedCenterTriangle,
    /// Four outer corners plus a center corner at one third scale
    CenteredSquare,
    /// Five outer corners plus a center corner at one third scale
    CenteredPentagon,
}

/// Fully specified game setup produced by a preset
#[derive(Clone, Debug, PartialEq)]
pub struct PresetConfig {
    /// Number of corners including the center corner
    pub num_corners: usize,
    /// Fraction of the remaining distance retained at each step
    pub scale: f64,
    /// Corner probabilities, empty for uniform
    pub probabilities: Vec<f64>,
    /// Whether the last corner sits at the origin
    pub corner_at_center: bool,
}

impl Preset {
    /// Expand the preset into concrete game parameters
    pub fn config(self) -> PresetConfig {
        match self {
            Self::Triangle => PresetConfig {
                num_corners: 3,
                scale: 0.5,
                probabilities: Vec::new(),
                corner_at_center: false,
            },
            Self::Square => PresetConfig {
                num_corners: 4,
                scale: 0.5,
                probabilities: Vec::new(),
                corner_at_center: false,
            },
            // The fourth weight is derived as 7/10
            Self::WeightedCenterTriangle => PresetConfig {
                num_corners: 4,
                scale: 1.0 / 3.0,
                probabilities: vec![0.1, 0.1, 0.1],
                corner_at_center: true,
            },
            Self::CenteredSquare => PresetConfig {
                num_corners: 5,
                scale: 1.0 / 3.0,
                probabilities: Vec::new(),
                corner_at_center: true,
            },
            Self::CenteredPentagon => PresetConfig {
                num_corners: 6,
                scale: 1.0 / 3.0,
                probabilities: Vec::new(),
                corner_at_center: true,
            },
        }
    }
}
