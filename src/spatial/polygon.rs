//! Regular polygon boards inscribed in the unit circle

use crate::io::configuration::MIN_CORNERS;
use crate::io::error::{Result, invalid_parameter};
use ndarray::{Array2, ArrayView2};
use std::f64::consts::TAU;

/// Corner coordinates of a chaos game board
///
/// Stores `num_corners + 1` rows of `(x, y)`. Rows that no corner index refers
/// to are zero-filled. When the last corner sits at the center it is the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    coordinates: Array2<f64>,
    num_corners: usize,
    corner_at_center: bool,
}

impl Polygon {
    /// Build the board for `num_corners` corners
    ///
    /// Without a center corner all `num_corners` corners lie on the unit circle
    /// at angles `2πk / num_corners`. With a center corner the first
    /// `num_corners - 1` are spread evenly over the circle and corner
    /// `num_corners` is the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_corners` is less than three
    pub fn generate(num_corners: usize, corner_at_center: bool) -> Result<Self> {
        if num_corners < MIN_CORNERS {
            return Err(invalid_parameter(
                "num_corners",
                &num_corners,
                &format!("a board needs at least {MIN_CORNERS} corners"),
            ));
        }

        let on_circle = if corner_at_center {
            num_corners - 1
        } else {
            num_corners
        };
        let step = TAU / on_circle as f64;

        let mut coordinates = Array2::zeros((num_corners + 1, 2));
        for (k, mut row) in coordinates.rows_mut().into_iter().take(on_circle).enumerate() {
            let angle = step * k as f64;
            row.assign(&ndarray::arr1(&[angle.cos(), angle.sin()]));
        }

        log::trace!(
            "Generated board with {num_corners} corners ({on_circle} on circle, center: {corner_at_center})"
        );

        Ok(Self {
            coordinates,
            num_corners,
            corner_at_center,
        })
    }

    /// Number of logical corners, including the center corner if present
    pub const fn num_corners(&self) -> usize {
        self.num_corners
    }

    /// Whether the last corner is placed at the origin
    pub const fn corner_at_center(&self) -> bool {
        self.corner_at_center
    }

    /// Coordinates of a corner by its 1-based index
    pub fn corner(&self, index: usize) -> Option<[f64; 2]> {
        if index == 0 || index > self.num_corners {
            return None;
        }
        let x = self.coordinates.get([index - 1, 0])?;
        let y = self.coordinates.get([index - 1, 1])?;
        Some([*x, *y])
    }

    /// Iterate over the logical corners in index order
    pub fn corners(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        (1..=self.num_corners).filter_map(|index| self.corner(index))
    }

    /// Full coordinate table including the zero-filled trailing row
    pub fn coordinates(&self) -> ArrayView2<'_, f64> {
        self.coordinates.view()
    }
}
