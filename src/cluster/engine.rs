//! Clustering engine over raw detection records.

use super::partition::cut_at_distance;
use crate::error::Result;
use crate::graph::{DistanceMatrix, SpanningTree};
use crate::point::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default cut threshold, in input coordinate units.
///
/// The observed feeds carry longitude/latitude degrees, so this is half a
/// degree. Euclidean distance over degrees is a known approximation kept
/// for compatibility with existing deployments.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// One raw detection record from the data-access layer.
///
/// The identifier is opaque to the engine; it is carried through and handed
/// back in [`Cluster::member_ids`]. Coordinates arrive unvalidated and are
/// checked at clustering time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Detection<I> {
    /// Opaque record identifier.
    pub id: I,
    /// Raw coordinate values, expected to be exactly `[x, y]`.
    pub coords: Vec<f64>,
}

impl<I> Detection<I> {
    /// Create a detection record.
    pub fn new(id: I, coords: Vec<f64>) -> Self {
        Self { id, coords }
    }
}

/// One fire event: a group of detections collapsed to a single marker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cluster<I> {
    /// Arithmetic mean of the member positions.
    pub center: Point,
    /// Identifiers of the subsumed detections, in input order.
    pub member_ids: Vec<I>,
    /// Original positions of the subsumed detections, in input order.
    pub positions: Vec<Point>,
}

/// MST threshold clustering.
///
/// Holds only the configured threshold; every invocation builds its own
/// matrix, tree, and union-find, so one value can serve concurrent callers
/// without coordination.
#[derive(Debug, Clone, Copy)]
pub struct MstClustering {
    threshold: f64,
}

impl Default for MstClustering {
    fn default() -> Self {
        Self::new()
    }
}

impl MstClustering {
    /// Create an engine with [`DEFAULT_THRESHOLD`].
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Set the cut threshold, in input coordinate units.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// The configured cut threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Cluster raw detection records into fire events.
    ///
    /// Validates every record's coordinates first; a malformed record fails
    /// the whole call before any matrix or tree work begins. An empty input
    /// is not an error and yields an empty result. Group order follows the
    /// first member's input position; it is stable across runs but not a
    /// contract.
    pub fn cluster<I: Clone>(&self, detections: &[Detection<I>]) -> Result<Vec<Cluster<I>>> {
        let points = detections
            .iter()
            .map(|d| Point::from_coords(&d.coords))
            .collect::<Result<Vec<_>>>()?;

        let groups = self.partition(&points);
        log::debug!(
            "clustered {} detections into {} groups at threshold {}",
            detections.len(),
            groups.len(),
            self.threshold
        );

        Ok(groups
            .into_iter()
            .map(|members| {
                let positions: Vec<Point> = members.iter().map(|&i| points[i]).collect();
                // Groups are non-empty by construction.
                let center = Point::centroid(&positions).unwrap_or(Point::new(0.0, 0.0));
                let member_ids = members.iter().map(|&i| detections[i].id.clone()).collect();
                Cluster {
                    center,
                    member_ids,
                    positions,
                }
            })
            .collect())
    }

    /// Partition already-validated points into index groups.
    pub fn partition(&self, points: &[Point]) -> Vec<Vec<usize>> {
        let matrix = DistanceMatrix::from_points(points);
        let tree = SpanningTree::build(&matrix);
        log::debug!(
            "spanning tree over {} points has {} edges",
            tree.n_vertices(),
            tree.len()
        );
        cut_at_distance(&tree, self.threshold)
    }

    /// Flat cluster label per point.
    ///
    /// Labels are consecutive integers starting at 0, numbered in the order
    /// groups first appear while scanning points by input position.
    pub fn labels(&self, points: &[Point]) -> Vec<usize> {
        let groups = self.partition(points);
        let mut labels = vec![0usize; points.len()];
        for (label, members) in groups.iter().enumerate() {
            for &i in members {
                labels[i] = label;
            }
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_two_events_and_an_outlier() {
        let detections = vec![
            Detection::new(1, vec![0.0, 0.0]),
            Detection::new(2, vec![0.0, 0.1]),
            Detection::new(3, vec![10.0, 10.0]),
        ];
        let clusters = MstClustering::new().cluster(&detections).unwrap();

        assert_eq!(clusters.len(), 2);

        assert_eq!(clusters[0].member_ids, vec![1, 2]);
        assert!((clusters[0].center.x - 0.0).abs() < 1e-12);
        assert!((clusters[0].center.y - 0.05).abs() < 1e-12);
        assert_eq!(
            clusters[0].positions,
            vec![Point::new(0.0, 0.0), Point::new(0.0, 0.1)]
        );

        assert_eq!(clusters[1].member_ids, vec![3]);
        assert_eq!(clusters[1].center, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        let clusters = MstClustering::new()
            .cluster::<u32>(&[])
            .unwrap();
        assert!(clusters.is_empty());
    }

    #[test]
    fn test_single_detection() {
        let detections = vec![Detection::new("r-17", vec![24.93, 60.17])];
        let clusters = MstClustering::new().cluster(&detections).unwrap();

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].member_ids, vec!["r-17"]);
        assert_eq!(clusters[0].center, Point::new(24.93, 60.17));
        assert_eq!(clusters[0].positions, vec![Point::new(24.93, 60.17)]);
    }

    #[test]
    fn test_duplicate_coordinates_keep_distinct_ids() {
        let detections = vec![
            Detection::new(7, vec![5.0, 5.0]),
            Detection::new(8, vec![5.0, 5.0]),
        ];
        let clusters = MstClustering::new()
            .with_threshold(0.1)
            .cluster(&detections)
            .unwrap();

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].member_ids, vec![7, 8]);
        assert_eq!(clusters[0].center, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_malformed_record_fails_whole_call() {
        let detections = vec![
            Detection::new(1, vec![0.0, 0.0]),
            Detection::new(2, vec![1.0]),
        ];
        let err = MstClustering::new().cluster(&detections).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_non_finite_coordinate_fails() {
        let detections = vec![Detection::new(1, vec![0.0, f64::NAN])];
        let err = MstClustering::new().cluster(&detections).unwrap_err();
        assert_eq!(err, Error::NonFiniteCoordinate { axis: "y" });
    }

    #[test]
    fn test_labels_renumbered_in_first_appearance_order() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 0.1),
            Point::new(10.0, 10.1),
        ];
        let labels = MstClustering::new().labels(&points);
        assert_eq!(labels, vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(
            MstClustering::default().threshold(),
            MstClustering::new().threshold()
        );
        assert_eq!(MstClustering::new().threshold(), DEFAULT_THRESHOLD);
    }
}
