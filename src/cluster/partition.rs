//! Threshold cut over spanning-tree edges.

use crate::graph::SpanningTree;
use petgraph::unionfind::UnionFind;
use std::collections::HashMap;

/// Partition the tree's vertices into groups by cutting at `threshold`.
///
/// Walks the edges in emission order and unions the endpoints of every edge
/// with `weight < threshold` (strict); heavier edges stay cut. The result
/// is the connected components of the retained edges: members within a
/// group ascend by index, and groups appear in order of their first member.
///
/// Membership is tracked by vertex index in a union-find arena, never by
/// coordinate value, so duplicate coordinates land in the right group. The
/// traversal order of the edges does not matter: on a tree, each edge's
/// union decision is independent of the others, so any order yields the
/// same partition.
pub fn cut_at_distance(tree: &SpanningTree, threshold: f64) -> Vec<Vec<usize>> {
    let n = tree.n_vertices();
    if n == 0 {
        return Vec::new();
    }

    let mut uf = UnionFind::<usize>::new(n);
    for edge in tree.edges() {
        if edge.weight < threshold {
            uf.union(edge.source, edge.target);
        }
    }

    // Read out components in first-seen-root order, scanning ascending.
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut root_to_group: HashMap<usize, usize> = HashMap::new();
    for v in 0..n {
        let root = uf.find(v);
        let slot = *root_to_group.entry(root).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(v);
    }
    groups
}
