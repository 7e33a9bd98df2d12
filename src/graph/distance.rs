//! Pairwise Euclidean distance matrix.

use crate::point::Point;
use ndarray::Array2;

/// Symmetric N×N matrix of pairwise Euclidean distances.
///
/// Invariants: the diagonal is zero, `d[i][j] == d[j][i]`, and every entry
/// is finite and non-negative (points are validated before they get here).
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    d: Array2<f64>,
}

impl DistanceMatrix {
    /// Compute the distance matrix for an ordered sequence of points.
    ///
    /// N=0 yields an empty 0×0 matrix; there are no error conditions.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut d = Array2::<f64>::zeros((n, n));
        Self::fill(points, &mut d);
        Self { d }
    }

    /// Each unordered pair is computed once and mirrored.
    #[cfg(not(feature = "parallel"))]
    fn fill(points: &[Point], d: &mut Array2<f64>) {
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let dist = Point::distance(points[i], points[j]);
                d[[i, j]] = dist;
                d[[j, i]] = dist;
            }
        }
    }

    /// Row-parallel fill. Squaring makes `(a-b)²` insensitive to operand
    /// order, so every cell is bitwise identical to the serial fill.
    #[cfg(feature = "parallel")]
    fn fill(points: &[Point], d: &mut Array2<f64>) {
        use ndarray::parallel::prelude::*;
        use ndarray::Axis;

        d.axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(i, mut row)| {
                for (j, cell) in row.iter_mut().enumerate() {
                    if i != j {
                        *cell = Point::distance(points[i], points[j]);
                    }
                }
            });
    }

    /// Number of points the matrix covers.
    pub fn len(&self) -> usize {
        self.d.nrows()
    }

    /// True for the 0×0 matrix.
    pub fn is_empty(&self) -> bool {
        self.d.nrows() == 0
    }

    /// Distance between points `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.d[[i, j]]
    }

    /// Borrow the underlying array.
    pub fn as_array(&self) -> &Array2<f64> {
        &self.d
    }
}
