//! Threshold clustering over a spanning tree.
//!
//! Cutting a minimum spanning tree at a distance threshold leaves connected
//! components; each component is one cluster. Over Euclidean distances this
//! is exactly single-linkage clustering cut at a fixed height: a group
//! extends as far as a chain of sub-threshold hops extends, so elongated
//! fire fronts stay one event while an isolated detection stays alone.
//!
//! Two halves:
//!
//! - [`cut_at_distance`] partitions tree vertices into index groups with a
//!   union-find over point indices.
//! - [`MstClustering`] runs the whole pipeline on raw detection records and
//!   folds each group back into a centroid, member ids, and positions.
//!
//! ## Usage
//!
//! ```rust
//! use ember::{Detection, MstClustering};
//!
//! let detections = vec![
//!     Detection::new(1, vec![0.0, 0.0]),
//!     Detection::new(2, vec![0.0, 0.1]),
//!     Detection::new(3, vec![10.0, 10.0]),
//! ];
//!
//! let clusters = MstClustering::new().cluster(&detections).unwrap();
//!
//! assert_eq!(clusters.len(), 2);
//! assert_eq!(clusters[0].member_ids, vec![1, 2]);
//! assert_eq!(clusters[1].member_ids, vec![3]);
//! ```

mod engine;
mod partition;

pub use engine::{Cluster, Detection, MstClustering, DEFAULT_THRESHOLD};
pub use partition::cut_at_distance;
