//! Chaos game orchestration from configuration to point cloud

use crate::{
    algorithm::iterator::generate_point_cloud,
    algorithm::sampler::{CornerSequence, generate_corner_sequence},
    io::configuration::{DEFAULT_NUM_POINTS, DEFAULT_STARTING_POS, MIN_CORNERS, PROGRESS_CHUNK},
    io::error::{Result, invalid_parameter},
    math::probability::ProbabilityDistribution,
    spatial::polygon::Polygon,
};
use ndarray::Array2;
use rand::{SeedableRng, rngs::StdRng};

/// Per-run parameters of a fractal generation
#[derive(Clone, Debug, PartialEq)]
pub struct FractalParams {
    /// Corner probabilities; empty for uniform, one short to derive the last
    pub probabilities: Vec<f64>,
    /// Number of points requested
    pub num_points: usize,
    /// Position of the first point
    pub starting_pos: [f64; 2],
    /// Whether the last corner sits at the origin
    pub corner_at_center: bool,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            probabilities: Vec::new(),
            num_points: DEFAULT_NUM_POINTS,
            starting_pos: DEFAULT_STARTING_POS,
            corner_at_center: false,
        }
    }
}

/// Generated attractor handed to a renderer
#[derive(Clone, Debug, PartialEq)]
pub struct Fractal {
    /// `(n, 2)` array of visited positions, starting position first
    pub points: Array2<f64>,
    /// Board the points were contracted toward
    pub vertices: Polygon,
}

impl Fractal {
    /// Number of points in the cloud
    pub fn len(&self) -> usize {
        self.points.nrows()
    }

    /// Whether the cloud holds no points
    pub fn is_empty(&self) -> bool {
        self.points.nrows() == 0
    }
}

/// Chaos game on a regular polygon with a fixed contraction scale
///
/// Owns the random generator so that repeated generations from a seeded game
/// are reproducible. Without a seed the generator is drawn from the OS and
/// every run differs.
pub struct ChaosGame {
    num_corners: usize,
    scale: f64,
    rng: StdRng,
}

impl ChaosGame {
    /// Create a game after validating the corner count and scale
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `num_corners` is less than three
    /// - `scale` is not a finite number in `(0, 1]`
    pub fn new(num_corners: usize, scale: f64, seed: Option<u64>) -> Result<Self> {
        if num_corners < MIN_CORNERS {
            return Err(invalid_parameter(
                "num_corners",
                &num_corners,
                &format!("must be at least {MIN_CORNERS}"),
            ));
        }
        if !scale.is_finite() || scale <= 0.0 || scale > 1.0 {
            return Err(invalid_parameter("scale", &scale, &"must lie in (0, 1]"));
        }

        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Ok(Self {
            num_corners,
            scale,
            rng,
        })
    }

    /// Number of corners in the game
    pub const fn num_corners(&self) -> usize {
        self.num_corners
    }

    /// Fraction of the remaining distance retained at each step
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Corner coordinates of this game's board
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be generated
    pub fn generate_board(&self, corner_at_center: bool) -> Result<Polygon> {
        Polygon::generate(self.num_corners, corner_at_center)
    }

    /// Validate `probabilities` and draw a shuffled corner sequence
    ///
    /// # Errors
    ///
    /// Returns an error if the probabilities are missing or excessive, do not
    /// sum to one, or derive a negative final probability
    pub fn generate_ifs(
        &mut self,
        probabilities: &[f64],
        num_points: usize,
    ) -> Result<CornerSequence> {
        let distribution = ProbabilityDistribution::resolve(probabilities, self.num_corners)?;
        generate_corner_sequence(&distribution, num_points, &mut self.rng)
    }

    /// Generate the attractor point cloud for `params`
    ///
    /// # Errors
    ///
    /// Returns an error if the distribution is invalid or the point cloud
    /// cannot be assembled
    pub fn generate_fractal(&mut self, params: &FractalParams) -> Result<Fractal> {
        self.generate_fractal_with(params, |_| {})
    }

    /// Generate the attractor, reporting progress to `observer`
    ///
    /// `observer` receives the running point count in chunks of
    /// [`PROGRESS_CHUNK`] and the final count at the end.
    ///
    /// # Errors
    ///
    /// Returns an error if the distribution is invalid or the point cloud
    /// cannot be assembled
    pub fn generate_fractal_with(
        &mut self,
        params: &FractalParams,
        observer: impl FnMut(usize),
    ) -> Result<Fractal> {
        let sequence = self.generate_ifs(&params.probabilities, params.num_points)?;
        let vertices = self.generate_board(params.corner_at_center)?;

        log::debug!(
            "Walking {} corner indices over {} corners at scale {}",
            sequence.len(),
            self.num_corners,
            self.scale
        );

        let points = generate_point_cloud(
            &sequence,
            &vertices,
            self.scale,
            params.starting_pos,
            PROGRESS_CHUNK,
            observer,
        )?;

        Ok(Fractal { points, vertices })
    }
}
