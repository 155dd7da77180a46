// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! mstbatch library - minimum spanning trees for batches of directed graphs
//!
//! A batch file holds any number of weighted directed graphs. Each one is
//! solved independently with Prim's algorithm grown from vertex 0, and the
//! resulting tree weight and edges are written out per graph.
//!
//! ```
//! use mstbatch::graph::Graph;
//! use mstbatch::mst::MstEngine;
//!
//! let graph = Graph::build(3, [(0, 1, 10), (0, 1, 3)]).unwrap();
//! let tree = MstEngine::new().compute(&graph);
//!
//! assert_eq!(tree.total_weight, 3);
//! assert_eq!(tree.edge_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod display;
pub mod error;
pub mod graph;
pub mod mst;
pub mod process;
pub mod reader;
pub mod writer;

pub use error::{BatchError, BatchResult};
pub use graph::{Edge, Graph, GraphBuilder};
pub use mst::{MstEngine, MstResult, TreeEdge};
