//! Chaos game recurrence turning a corner stream into a point cloud

use crate::algorithm::sampler::CornerSequence;
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::spatial::polygon::Polygon;
use ndarray::Array2;

/// Walks the contraction recurrence one corner index at a time
///
/// Yields the starting position first, then
/// `pos[i] = scale * pos[i - 1] + (1 - scale) * corner(index[i])`
/// for every following index. The first index only accounts for the starting
/// point, so the walk yields exactly one point per index. Every index is
/// checked against the board before the walk starts.
pub struct AttractorIterator<'a> {
    indices: std::slice::Iter<'a, usize>,
    vertices: &'a Polygon,
    scale: f64,
    position: [f64; 2],
    started: bool,
}

impl<'a> AttractorIterator<'a> {
    /// Start a walk at `starting_pos`
    ///
    /// # Errors
    ///
    /// Returns an error if any index does not name a corner of `vertices`
    pub fn new(
        sequence: &'a CornerSequence,
        vertices: &'a Polygon,
        scale: f64,
        starting_pos: [f64; 2],
    ) -> Result<Self> {
        if let Some(&index) = sequence
            .as_slice()
            .iter()
            .find(|&&index| vertices.corner(index).is_none())
        {
            return Err(invalid_parameter(
                "corner_index",
                &index,
                &format!("must lie in 1..={}", vertices.num_corners()),
            ));
        }

        Ok(Self {
            indices: sequence.as_slice().iter(),
            vertices,
            scale,
            position: starting_pos,
            started: false,
        })
    }

    /// Move a fraction `1 - scale` of the way from `from` toward `corner`
    #[allow(clippy::suboptimal_flops)]
    pub fn contract(from: [f64; 2], corner: [f64; 2], scale: f64) -> [f64; 2] {
        let pull = 1.0 - scale;
        [
            scale * from[0] + pull * corner[0],
            scale * from[1] + pull * corner[1],
        ]
    }
}

impl Iterator for AttractorIterator<'_> {
    type Item = [f64; 2];

    fn next(&mut self) -> Option<Self::Item> {
        let index = *self.indices.next()?;
        if !self.started {
            self.started = true;
            return Some(self.position);
        }

        let corner = self.vertices.corner(index)?;
        self.position = Self::contract(self.position, corner, self.scale);
        Some(self.position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for AttractorIterator<'_> {}

/// Run the whole walk and collect the points into an `(n, 2)` array
///
/// `observer` receives the number of points produced so far every `chunk`
/// points and once more at the end.
///
/// # Errors
///
/// Returns an error if an index is off the board or the collected points
/// cannot be shaped into an array
pub fn generate_point_cloud(
    sequence: &CornerSequence,
    vertices: &Polygon,
    scale: f64,
    starting_pos: [f64; 2],
    chunk: usize,
    mut observer: impl FnMut(usize),
) -> Result<Array2<f64>> {
    let walk = AttractorIterator::new(sequence, vertices, scale, starting_pos)?;
    let len = walk.len();
    let mut flat = Vec::with_capacity(len * 2);

    for (produced, point) in walk.enumerate() {
        flat.extend_from_slice(&point);
        if chunk > 0 && (produced + 1) % chunk == 0 {
            observer(produced + 1);
        }
    }
    observer(len);

    Array2::from_shape_vec((len, 2), flat)
        .map_err(|e| computation_error("point cloud assembly", &e))
}
