// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for graph construction and batch I/O
//!
//! The spanning tree computation itself cannot fail; every error here comes
//! from reading a batch, building a graph, or writing results.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for batch operations
pub type BatchResult<T> = Result<T, BatchError>;

/// Errors that can occur while building graphs or moving batches in and out
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BatchError {
    /// A file could not be opened, read or written
    #[error("I/O error on {}", .path.display())]
    Io {
        /// The file involved
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The batch header or counts are missing or malformed
    #[error("invalid batch format: {0}")]
    Format(String),

    /// An edge endpoint lies outside the declared vertex range
    #[error("edge {from} -> {to} is outside the {vertex_count} declared vertices")]
    InvalidEdge {
        /// Source vertex as written
        from: i64,
        /// Target vertex as written
        to: i64,
        /// Number of vertices the graph declared
        vertex_count: usize,
    },

    /// An error attributed to a specific graph of the batch (1-based)
    #[error("graph {index}: {error}")]
    InGraph {
        /// Position of the graph in the batch, starting at 1
        index: usize,
        /// The underlying error
        error: Box<BatchError>,
    },
}

impl BatchError {
    /// Creates a format error from any displayable message
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    /// Creates an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attributes this error to the graph at `index` (1-based)
    #[must_use]
    pub fn in_graph(self, index: usize) -> Self {
        Self::InGraph {
            index,
            error: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping graph attribution layers
    #[must_use]
    pub fn root(&self) -> &BatchError {
        match self {
            Self::InGraph { error, .. } => error.root(),
            other => other,
        }
    }

    /// Whether this error (or its root) is an out-of-range edge
    #[must_use]
    pub fn is_invalid_edge(&self) -> bool {
        matches!(self.root(), Self::InvalidEdge { .. })
    }

    /// Whether this error (or its root) is a format error
    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self.root(), Self::Format(_))
    }
}
