//! 2-D coordinate value type.
//!
//! Detections arrive as raw coordinate pairs (longitude/latitude degrees in
//! the observed feeds). `Point` keeps the planar reading of those values:
//! distance is straight Euclidean in coordinate units, not geodesic. That
//! approximation is inherited from upstream usage and left intact so
//! clustering results stay comparable across deployments.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2-D point.
///
/// Plain value type with structural equality. Clustering never uses that
/// equality for membership, because duplicate coordinates are legal input;
/// membership is tracked by index throughout.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Horizontal coordinate (longitude in the observed feeds).
    pub x: f64,
    /// Vertical coordinate (latitude in the observed feeds).
    pub y: f64,
}

impl Point {
    /// Create a point from explicit coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a point from a raw coordinate slice, validating its shape.
    ///
    /// Exactly two finite values are required. This is the fail-fast
    /// boundary for records coming out of a data-access layer; nothing
    /// downstream re-checks coordinates.
    pub fn from_coords(coords: &[f64]) -> Result<Self> {
        if coords.len() != 2 {
            return Err(Error::DimensionMismatch {
                expected: 2,
                found: coords.len(),
            });
        }
        if !coords[0].is_finite() {
            return Err(Error::NonFiniteCoordinate { axis: "x" });
        }
        if !coords[1].is_finite() {
            return Err(Error::NonFiniteCoordinate { axis: "y" });
        }
        Ok(Self {
            x: coords[0],
            y: coords[1],
        })
    }

    /// Euclidean distance between two points.
    ///
    /// Symmetric, and zero exactly when the coordinates match. A named
    /// function rather than an operator, so call sites read as distance
    /// computations, not subtraction.
    #[inline]
    pub fn distance(a: Point, b: Point) -> f64 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// This point scaled by `k` on both axes.
    #[inline]
    pub fn scaled(self, k: f64) -> Point {
        Point {
            x: self.x * k,
            y: self.y * k,
        }
    }

    /// Arithmetic mean of a slice of points, `None` when the slice is empty.
    pub fn centroid(points: &[Point]) -> Option<Point> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let (sx, sy) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(Point {
            x: sx / n,
            y: sy / n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_symmetric() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(Point::distance(a, b), 5.0);
        assert_eq!(Point::distance(b, a), 5.0);
    }

    #[test]
    fn test_distance_zero_iff_equal() {
        let a = Point::new(2.5, -1.0);
        assert_eq!(Point::distance(a, a), 0.0);

        let b = Point::new(2.5, -1.0 + 1e-9);
        assert!(Point::distance(a, b) > 0.0);
    }

    #[test]
    fn test_from_coords_valid() {
        let p = Point::from_coords(&[24.93, 60.17]).unwrap();
        assert_eq!(p.x, 24.93);
        assert_eq!(p.y, 60.17);
    }

    #[test]
    fn test_from_coords_wrong_arity() {
        let err = Point::from_coords(&[1.0]).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                found: 1
            }
        );

        let err = Point::from_coords(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_from_coords_non_finite() {
        let err = Point::from_coords(&[f64::NAN, 0.0]).unwrap_err();
        assert_eq!(err, Error::NonFiniteCoordinate { axis: "x" });

        let err = Point::from_coords(&[0.0, f64::INFINITY]).unwrap_err();
        assert_eq!(err, Error::NonFiniteCoordinate { axis: "y" });
    }

    #[test]
    fn test_scaled() {
        let p = Point::new(1.5, -2.0).scaled(2.0);
        assert_eq!(p, Point::new(3.0, -4.0));
    }

    #[test]
    fn test_centroid() {
        let points = [Point::new(0.0, 0.0), Point::new(0.0, 0.1)];
        let c = Point::centroid(&points).unwrap();
        assert!((c.x - 0.0).abs() < 1e-12);
        assert!((c.y - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_centroid_empty() {
        assert!(Point::centroid(&[]).is_none());
    }

    #[test]
    fn test_centroid_single() {
        let c = Point::centroid(&[Point::new(10.0, 10.0)]).unwrap();
        assert_eq!(c, Point::new(10.0, 10.0));
    }
}
