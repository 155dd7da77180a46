// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Batch file reader
//!
//! A batch is a stream of whitespace-separated integers:
//!
//! ```text
//! <numGraphs>
//! <numVertices> <numEdges>
//! <u> <v> <w>      (numEdges times)
//! ...              (numGraphs times)
//! ```
//!
//! Line breaks carry no meaning; only token order does.

use crate::error::{BatchError, BatchResult};
use crate::graph::{Graph, GraphBuilder};
use std::fs;
use std::path::Path;
use std::str::SplitAsciiWhitespace;
use tracing::{debug, warn};

/// Largest vertex count a batch graph may declare
pub const MAX_VERTICES: i64 = 1 << 24;

/// Read and parse a batch file
pub fn read_batch(path: &Path) -> BatchResult<Vec<Graph>> {
    let text = fs::read_to_string(path).map_err(|source| BatchError::io(path, source))?;
    debug!("Read {} bytes from {}", text.len(), path.display());
    parse_batch(&text)
}

/// Parse every graph of a batch held in memory
pub fn parse_batch(text: &str) -> BatchResult<Vec<Graph>> {
    let mut tokens = Tokens::new(text);

    let graph_count = match tokens.next_int() {
        Some(Ok(count)) if count > 0 => count,
        Some(Ok(count)) => {
            return Err(BatchError::format(format!(
                "number of graphs must be positive, got {count}"
            )))
        }
        Some(Err(token)) => {
            return Err(BatchError::format(format!(
                "number of graphs is not an integer: {token:?}"
            )))
        }
        None => return Err(BatchError::format("missing number of graphs")),
    };

    let mut graphs = Vec::new();
    for index in 1..=graph_count {
        let graph = parse_graph(&mut tokens).map_err(|e| e.in_graph(to_usize(index)))?;
        debug!(
            "Parsed graph {}: {} vertices, {} edges",
            index,
            graph.vertex_count(),
            graph.edge_count()
        );
        graphs.push(graph);
    }

    let leftover = tokens.remaining();
    if leftover > 0 {
        warn!(
            "Ignoring {} trailing token(s) after the {} declared graph(s)",
            leftover, graph_count
        );
    }

    Ok(graphs)
}

fn parse_graph(tokens: &mut Tokens<'_>) -> BatchResult<Graph> {
    let vertex_count = tokens.expect_int("number of vertices")?;
    let edge_count = tokens.expect_int("number of edges")?;

    if vertex_count <= 0 {
        return Err(BatchError::format(format!(
            "number of vertices must be positive, got {vertex_count}"
        )));
    }
    if vertex_count > MAX_VERTICES {
        return Err(BatchError::format(format!(
            "too many vertices: {vertex_count} (limit {MAX_VERTICES})"
        )));
    }
    if edge_count < 0 {
        return Err(BatchError::format(format!(
            "number of edges must not be negative, got {edge_count}"
        )));
    }

    let vertex_count = usize::try_from(vertex_count)
        .map_err(|_| BatchError::format(format!("too many vertices: {vertex_count}")))?;
    let mut builder = GraphBuilder::new(vertex_count)?;

    for edge in 1..=edge_count {
        let what = |field: &str| format!("{field} of edge {edge}");
        let from = tokens.expect_int(&what("source vertex"))?;
        let to = tokens.expect_int(&what("target vertex"))?;
        let weight = tokens.expect_int(&what("weight"))?;

        let (Ok(from_index), Ok(to_index)) = (usize::try_from(from), usize::try_from(to)) else {
            return Err(BatchError::InvalidEdge {
                from,
                to,
                vertex_count,
            });
        };

        if weight < 0 {
            warn!("Edge {} -> {} has negative weight {}", from, to, weight);
        }

        builder.add_edge(from_index, to_index, weight)?;
    }

    Ok(builder.build())
}

fn to_usize(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Integer token stream over the batch text
struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_ascii_whitespace(),
        }
    }

    /// Next token as an integer; `Err` carries the offending token
    fn next_int(&mut self) -> Option<Result<i64, &'a str>> {
        self.inner
            .next()
            .map(|token| token.parse::<i64>().map_err(|_| token))
    }

    fn expect_int(&mut self, what: &str) -> BatchResult<i64> {
        match self.next_int() {
            Some(Ok(value)) => Ok(value),
            Some(Err(token)) => Err(BatchError::format(format!(
                "{what} is not an integer: {token:?}"
            ))),
            None => Err(BatchError::format(format!(
                "unexpected end of input while reading {what}"
            ))),
        }
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}
