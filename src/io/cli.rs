//! Command-line interface for generating and rendering chaos game fractals

use crate::algorithm::executor::{ChaosGame, FractalParams};
use crate::io::configuration::{
    CENTER_SUFFIX, DEFAULT_IMAGE_SIZE, DEFAULT_NUM_CORNERS, DEFAULT_NUM_POINTS, DEFAULT_OUTPUT,
    DEFAULT_SCALE, POLYGON_SUFFIX, Preset, PresetConfig,
};
use crate::io::error::Result;
use crate::io::image::{PngRenderer, Renderer};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "chaosgame")]
#[command(
    author,
    version,
    about = "Render weighted chaos game attractors of regular polygons"
)]
/// Command-line arguments for the fractal generator
pub struct Cli {
    /// Number of polygon corners, including the center corner if placed
    #[arg(short, long, default_value_t = DEFAULT_NUM_CORNERS)]
    pub corners: usize,

    /// Fraction of the remaining distance kept at each step, in (0, 1]
    #[arg(short, long, default_value_t = DEFAULT_SCALE)]
    pub scale: f64,

    /// Comma separated corner probabilities (empty for uniform, one short to derive the last)
    #[arg(short, long, value_delimiter = ',')]
    pub probabilities: Vec<f64>,

    /// Number of points making up the fractal
    #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_POINTS)]
    pub points: usize,

    /// Starting position as X,Y
    #[arg(long, value_name = "X,Y", default_value = "0,0", value_parser = parse_point, allow_hyphen_values = true)]
    pub start: [f64; 2],

    /// Place the last corner at the center of the board
    #[arg(long)]
    pub corner_at_center: bool,

    /// Render both the plain polygon and the corner-at-center variant
    #[arg(short, long)]
    pub both: bool,

    /// Random seed for reproducible generation (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Named combination overriding corners, scale, probabilities and center placement
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Image side length in pixels
    #[arg(long, default_value_t = DEFAULT_IMAGE_SIZE)]
    pub size: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parse an `X,Y` pair
///
/// # Errors
///
/// Returns a message if the input is not two comma separated numbers
pub fn parse_point(input: &str) -> std::result::Result<[f64; 2], String> {
    let mut parts = input.split(',').map(str::trim);
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected X,Y but got '{input}'"));
    };
    let x = x.parse::<f64>().map_err(|e| format!("invalid X '{x}': {e}"))?;
    let y = y.parse::<f64>().map_err(|e| format!("invalid Y '{y}': {e}"))?;
    Ok([x, y])
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Game setup after applying the preset, if any
    pub fn game_config(&self) -> PresetConfig {
        self.preset.map_or_else(
            || PresetConfig {
                num_corners: self.corners,
                scale: self.scale,
                probabilities: self.probabilities.clone(),
                corner_at_center: self.corner_at_center,
            },
            Preset::config,
        )
    }

    /// Center placements to render, each with its output path
    pub fn variants(&self) -> Vec<(bool, PathBuf)> {
        if self.both {
            vec![
                (false, suffixed_path(&self.output, POLYGON_SUFFIX)),
                (true, suffixed_path(&self.output, CENTER_SUFFIX)),
            ]
        } else {
            vec![(self.game_config().corner_at_center, self.output.clone())]
        }
    }
}

/// Insert `suffix` between the file stem and extension of `path`
pub fn suffixed_path(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default();
    let extension = path.extension().unwrap_or_default();
    let name = if extension.is_empty() {
        format!("{}{suffix}", stem.to_string_lossy())
    } else {
        format!(
            "{}{suffix}.{}",
            stem.to_string_lossy(),
            extension.to_string_lossy()
        )
    };

    path.parent()
        .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
}

/// Runs the generation and rendering requested on the command line
pub struct FractalRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FractalRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and render every requested variant
    ///
    /// Returns the paths written, in render order
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the probabilities
    /// are rejected, or an image cannot be written
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let config = self.cli.game_config();
        let mut game = ChaosGame::new(config.num_corners, config.scale, self.cli.seed)?;
        let mut written = Vec::new();

        for (corner_at_center, output_path) in self.cli.variants() {
            let start_time = Instant::now();
            let params = FractalParams {
                probabilities: config.probabilities.clone(),
                num_points: self.cli.points,
                starting_pos: self.cli.start,
                corner_at_center,
            };

            let label = if corner_at_center { "center" } else { "polygon" };
            let bar = self
                .progress_manager
                .as_mut()
                .map(|pm| pm.start_variant(label, params.num_points));

            let progress = self.progress_manager.as_ref();
            let fractal = game.generate_fractal_with(&params, |produced| {
                if let (Some(pm), Some(index)) = (progress, bar) {
                    pm.update(index, produced);
                }
            })?;

            let mut renderer = PngRenderer::new(output_path.clone(), self.cli.size)?;
            renderer.render(&fractal)?;

            if let (Some(pm), Some(index)) = (self.progress_manager.as_ref(), bar) {
                pm.complete_variant(index, fractal.len());
            }

            log::info!(
                "{} cornered chaos game ({label}), scale factor = {:.2}: {} points in {:?} -> {}",
                game.num_corners(),
                game.scale(),
                fractal.len(),
                start_time.elapsed(),
                output_path.display()
            );
            written.push(output_path);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }
}
