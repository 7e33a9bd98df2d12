//! Distance matrix and spanning tree construction.
//!
//! Two stages feed the clustering cut: an N×N matrix of pairwise Euclidean
//! distances over the input points, then a minimum spanning tree grown over
//! that matrix. Both are O(N²), which is the natural budget here; N is the
//! number of detections in one day and bounding region, tens to low
//! hundreds in practice.

mod distance;
mod mst;

pub use distance::DistanceMatrix;
pub use mst::{Edge, SpanningTree};
