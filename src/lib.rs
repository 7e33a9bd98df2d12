//! # ember
//!
//! Groups raw point detections (wildfire hotspots, user reports) into fire
//! events by cutting a minimum spanning tree at a distance threshold.
//!
//! The pipeline is strictly linear and stateless: records → points →
//! pairwise distance matrix → Prim spanning tree → threshold cut →
//! clusters. Each invocation owns its working set, so concurrent callers
//! need no coordination.
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
//! let clusters = MstClustering::new().cluster(&detections)?;
//! assert_eq!(clusters.len(), 2);
//! # Ok::<(), ember::Error>(())
//! ```
//!
//! **Default build** has no optional dependencies. The `parallel` feature
//! parallelizes the distance-matrix fill; `serde` adds derives on the
//! public data types.

pub mod cluster;
/// Error types used across `ember`.
pub mod error;
pub mod graph;
pub mod point;


pub use cluster::{cut_at_distance, Cluster, Detection, MstClustering, DEFAULT_THRESHOLD};
pub use error::{Error, Result};
pub use graph::{DistanceMatrix, Edge, SpanningTree};
pub use point::Point;
