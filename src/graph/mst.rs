//! Minimum spanning tree construction.
//!
//! # The Algorithm (Prim, 1957)
//!
//! Grow a single tree from vertex 0. Each step pulls in the cheapest vertex
//! not yet in the tree, then relaxes its neighbors' candidate edges. With a
//! dense distance matrix the scan-based form is O(N²), the same budget as
//! building the matrix itself, so a priority queue buys nothing at the
//! input sizes this crate targets.
//!
//! ## Determinism
//!
//! Vertex selection scans in increasing index order and keeps the first
//! vertex achieving the minimum key, so ties always resolve to the lowest
//! index. Repeated runs over identical input produce identical trees, and
//! the threshold cut downstream inherits that stability. Callers may rely
//! on it.
//!
//! ## References
//!
//! Prim (1957). "Shortest Connection Networks and Some Generalizations."
//! Bell System Technical Journal 36(6).

use super::distance::DistanceMatrix;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One edge of a spanning tree.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    /// Parent vertex, already in the tree when the edge was chosen.
    pub source: usize,
    /// Child vertex attached by this edge.
    pub target: usize,
    /// Distance between the two endpoints.
    pub weight: f64,
}

/// A minimum spanning tree over a set of points.
///
/// Edges are stored in emission order: one per vertex `1..n`, by increasing
/// child-vertex index. For `n` vertices there are exactly `n - 1` edges;
/// the empty and single-point cases have none.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    n_vertices: usize,
}

impl SpanningTree {
    /// Build the minimum spanning tree for `matrix` with Prim's algorithm.
    pub fn build(matrix: &DistanceMatrix) -> Self {
        let n = matrix.len();
        if n == 0 {
            return Self {
                edges: Vec::new(),
                n_vertices: 0,
            };
        }

        // key[v] is the best known edge weight connecting v to the tree;
        // parent[v] is the tree vertex offering it.
        let mut key = vec![f64::INFINITY; n];
        let mut parent = vec![0usize; n];
        let mut in_tree = vec![false; n];
        key[0] = 0.0;

        for _ in 0..n {
            // min_by keeps the first minimum: ties resolve to the lowest
            // index.
            let u = match (0..n)
                .filter(|&v| !in_tree[v])
                .min_by(|&a, &b| key[a].total_cmp(&key[b]))
            {
                Some(u) => u,
                None => break,
            };
            in_tree[u] = true;

            for v in 0..n {
                if !in_tree[v] && matrix.get(u, v) < key[v] {
                    key[v] = matrix.get(u, v);
                    parent[v] = u;
                }
            }
        }

        let edges = (1..n)
            .map(|v| Edge {
                source: parent[v],
                target: v,
                weight: matrix.get(parent[v], v),
            })
            .collect();

        Self {
            edges,
            n_vertices: n,
        }
    }

    /// Edges in emission order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of vertices the tree spans.
    pub fn n_vertices(&self) -> usize {
        self.n_vertices
    }

    /// Number of edges, `max(n_vertices - 1, 0)`.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True when the tree has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
