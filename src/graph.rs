// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Adjacency-list graph of weighted directed edges

use crate::error::{BatchError, BatchResult};
use serde::Serialize;

/// Outgoing edge stored in a vertex's adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Vertex the edge points to
    pub target: usize,
    /// Edge weight
    pub weight: i64,
}

/// Immutable weighted directed graph over vertices `0..vertex_count()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Build a graph from `(from, to, weight)` triples.
    ///
    /// Fails with [`BatchError::Format`] when `vertex_count` is zero and with
    /// [`BatchError::InvalidEdge`] on the first edge whose endpoints are not
    /// below `vertex_count`.
    pub fn build<I>(vertex_count: usize, edges: I) -> BatchResult<Self>
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut builder = GraphBuilder::new(vertex_count)?;
        for (from, to, weight) in edges {
            builder.add_edge(from, to, weight)?;
        }
        Ok(builder.build())
    }

    /// Number of vertices
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of directed edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Outgoing edges of `vertex`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex >= self.vertex_count()`.
    #[must_use]
    pub fn edges_from(&self, vertex: usize) -> &[Edge] {
        &self.adjacency[vertex]
    }

    /// Iterate over `(vertex, outgoing edges)` in vertex order
    pub fn vertices(&self) -> impl Iterator<Item = (usize, &[Edge])> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(vertex, edges)| (vertex, edges.as_slice()))
    }

    /// Export to DOT format for Graphviz
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph batch {\n");
        dot.push_str("  node [shape=circle];\n\n");

        for (vertex, _) in self.vertices() {
            dot.push_str(&format!("  {vertex};\n"));
        }

        dot.push('\n');

        for (vertex, edges) in self.vertices() {
            for edge in edges {
                dot.push_str(&format!(
                    "  {} -> {} [label=\"{}\"];\n",
                    vertex, edge.target, edge.weight
                ));
            }
        }

        dot.push_str("}\n");
        dot
    }
}

/// Incremental, validating constructor for [`Graph`]
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    adjacency: Vec<Vec<Edge>>,
}

impl GraphBuilder {
    /// Start a graph with `vertex_count` isolated vertices
    pub fn new(vertex_count: usize) -> BatchResult<Self> {
        if vertex_count == 0 {
            return Err(BatchError::format("a graph needs at least one vertex"));
        }
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| BatchError::format(format!("too many vertices: {vertex_count}")))?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(Self { adjacency })
    }

    /// Add the directed edge `from -> to`
    pub fn add_edge(&mut self, from: usize, to: usize, weight: i64) -> BatchResult<&mut Self> {
        let vertex_count = self.adjacency.len();
        if from >= vertex_count || to >= vertex_count {
            return Err(BatchError::InvalidEdge {
                from: index_as_i64(from),
                to: index_as_i64(to),
                vertex_count,
            });
        }
        self.adjacency[from].push(Edge { target: to, weight });
        Ok(self)
    }

    /// Freeze the builder into an immutable graph
    #[must_use]
    pub fn build(self) -> Graph {
        Graph {
            adjacency: self.adjacency,
        }
    }
}

fn index_as_i64(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}
