//! PNG rendering of generated attractors

use crate::algorithm::executor::Fractal;
use crate::io::configuration::{
    BACKGROUND_COLOR, CORNER_COLOR, CORNER_MARKER_SIZE, POINT_COLOR, VIEW_EXTENT,
};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Consumer of a finished fractal
///
/// Generation never draws anything itself; the caller hands the result to a
/// renderer explicitly.
pub trait Renderer {
    /// Present the point cloud and its corners
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be produced
    fn render(&mut self, fractal: &Fractal) -> Result<()>;
}

/// Renders fractals as square PNG scatter plots
#[derive(Clone, Debug)]
pub struct PngRenderer {
    output_path: PathBuf,
    size: u32,
}

impl PngRenderer {
    /// Create a renderer writing `size` by `size` images to `output_path`
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero
    pub fn new(output_path: impl Into<PathBuf>, size: u32) -> Result<Self> {
        if size == 0 {
            return Err(invalid_parameter("size", &size, &"must be positive"));
        }
        Ok(Self {
            output_path: output_path.into(),
            size,
        })
    }

    /// Destination of the rendered image
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Map world coordinates in the view window to a pixel, y pointing up
    pub fn to_pixel(&self, point: [f64; 2]) -> Option<(u32, u32)> {
        let span = 2.0 * VIEW_EXTENT;
        let last = f64::from(self.size - 1);
        let x = ((point[0] + VIEW_EXTENT) / span * last).round();
        let y = ((VIEW_EXTENT - point[1]) / span * last).round();

        let inside = |v: f64| v.is_finite() && (0.0..=last).contains(&v);
        (inside(x) && inside(y)).then(|| (x as u32, y as u32))
    }

    /// Draw the fractal into an image buffer
    pub fn rasterize(&self, fractal: &Fractal) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(self.size, self.size, Rgba(BACKGROUND_COLOR));

        let mut skipped = 0_usize;
        for row in fractal.points.rows() {
            let (Some(&x), Some(&y)) = (row.get(0), row.get(1)) else {
                continue;
            };
            match self.to_pixel([x, y]) {
                Some((px, py)) => img.put_pixel(px, py, Rgba(POINT_COLOR)),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            log::debug!("{skipped} points fell outside the view window");
        }

        let half = (CORNER_MARKER_SIZE / 2) as i64;
        for corner in fractal.vertices.corners() {
            let Some((cx, cy)) = self.to_pixel(corner) else {
                continue;
            };
            for dy in -half..=half {
                for dx in -half..=half {
                    let px = i64::from(cx) + dx;
                    let py = i64::from(cy) + dy;
                    if let (Ok(px), Ok(py)) = (u32::try_from(px), u32::try_from(py)) {
                        if px < self.size && py < self.size {
                            img.put_pixel(px, py, Rgba(CORNER_COLOR));
                        }
                    }
                }
            }
        }

        img
    }
}

impl Renderer for PngRenderer {
    fn render(&mut self, fractal: &Fractal) -> Result<()> {
        let img = self.rasterize(fractal);

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
                    path: parent.to_path_buf(),
                    operation: "create directory",
                    source: e,
                })?;
            }
        }

        img.save(&self.output_path)
            .map_err(|e| AlgorithmError::ImageExport {
                path: self.output_path.clone(),
                source: e,
            })?;

        log::debug!(
            "Rendered {} points to '{}'",
            fractal.len(),
            self.output_path.display()
        );
        Ok(())
    }
}
