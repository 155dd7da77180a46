// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Minimum spanning tree via Prim's algorithm with a lazy-deletion heap
//!
//! The tree is grown from vertex 0 along directed edges. Candidates are kept
//! in a binary min-heap ordered by `(weight, vertex)`; instead of a
//! decrease-key operation, superseded candidates stay in the heap and are
//! skipped when popped for a vertex that is already in the tree.

use crate::graph::Graph;
use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use tracing::trace;

/// Vertex the tree is grown from
pub const ROOT: usize = 0;

/// Edge that admitted `vertex` into the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TreeEdge {
    /// Admitted vertex
    pub vertex: usize,
    /// Weight of the admitting edge
    pub weight: i64,
}

impl Ord for TreeEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.vertex
            .cmp(&other.vertex)
            .then(self.weight.cmp(&other.weight))
    }
}

impl PartialOrd for TreeEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Spanning tree of the component reachable from [`ROOT`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MstResult {
    /// Sum of the admitting edge weights, widened so that no sum of `i64`
    /// edge weights can overflow
    pub total_weight: i128,
    /// Admitting edges sorted by `(vertex, weight)`; the root has none
    pub edges: Vec<TreeEdge>,
}

impl MstResult {
    /// Number of tree edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the tree reaches every one of `vertex_count` vertices
    #[must_use]
    pub fn spans(&self, vertex_count: usize) -> bool {
        self.edges.len() + 1 == vertex_count
    }
}

/// Frontier entry: ordered by weight, ties broken by vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    weight: i64,
    vertex: usize,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes minimum spanning trees rooted at vertex 0
#[derive(Debug, Clone, Copy, Default)]
pub struct MstEngine;

impl MstEngine {
    /// Create an engine
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Grow the minimum spanning tree of the part of `graph` reachable from
    /// vertex 0.
    ///
    /// Vertices with no directed path from the root are left out without
    /// error, so the result may hold fewer than `V - 1` edges.
    ///
    /// # Time complexity
    ///
    /// - *O*(*E* log *E*) over the edges of the reachable component
    #[must_use]
    pub fn compute(&self, graph: &Graph) -> MstResult {
        let mut in_tree = vec![false; graph.vertex_count()];
        let mut frontier = BinaryHeap::new();
        let mut result = MstResult::default();

        frontier.push(Reverse(Candidate {
            weight: 0,
            vertex: ROOT,
        }));

        while let Some(Reverse(Candidate { weight, vertex })) = frontier.pop() {
            if in_tree[vertex] {
                trace!(vertex, weight, "skipping stale candidate");
                continue;
            }

            trace!(vertex, weight, "admitting vertex");
            in_tree[vertex] = true;
            result.total_weight += i128::from(weight);

            if vertex != ROOT {
                result.edges.push(TreeEdge { vertex, weight });
            }

            for edge in graph.edges_from(vertex) {
                if !in_tree[edge.target] {
                    frontier.push(Reverse(Candidate {
                        weight: edge.weight,
                        vertex: edge.target,
                    }));
                }
            }
        }

        result.edges.sort_unstable();
        result
    }
}
