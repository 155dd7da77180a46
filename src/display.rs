// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Console rendering of input graphs

use crate::graph::Graph;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

/// Which graphs of a batch are printed before solving
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// Print nothing
    #[default]
    None,
    /// Print only the first graph
    First,
    /// Print every graph
    All,
}

impl DisplayMode {
    /// Number of leading graphs to print out of `graph_count`
    #[must_use]
    pub fn limit(self, graph_count: usize) -> usize {
        match self {
            Self::None => 0,
            Self::First => graph_count.min(1),
            Self::All => graph_count,
        }
    }
}

/// How a displayed graph is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayFormat {
    /// Adjacency lists, one vertex per line
    #[default]
    Text,
    /// Graphviz DOT
    Dot,
}

/// Render graph number `index` (1-based) in `format`
#[must_use]
pub fn render(graph: &Graph, index: usize, format: DisplayFormat, color: bool) -> String {
    match format {
        DisplayFormat::Text => render_graph(graph, index, color),
        DisplayFormat::Dot => graph.to_dot(),
    }
}

/// Render adjacency lists as `Vertex i connects to: (target, weight) ...`
#[must_use]
pub fn render_graph(graph: &Graph, index: usize, color: bool) -> String {
    let mut out = String::new();

    let header = format!(
        "Graph {} ({} vertices, {} edges)",
        index,
        graph.vertex_count(),
        graph.edge_count()
    );
    if color {
        out.push_str(&format!("{}\n", header.bold()));
    } else {
        out.push_str(&format!("{header}\n"));
    }

    for (vertex, edges) in graph.vertices() {
        let label = format!("Vertex {vertex}");
        if color {
            out.push_str(&format!("{} connects to:", label.cyan()));
        } else {
            out.push_str(&format!("{label} connects to:"));
        }
        for edge in edges {
            out.push_str(&format!(" ({}, {})", edge.target, edge.weight));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        let graph = Graph::build(3, [(0, 1, 4), (0, 2, 1), (2, 1, 7)]).unwrap();

        let text = render_graph(&graph, 1, false);

        assert_eq!(
            text,
            "Graph 1 (3 vertices, 3 edges)\n\
             Vertex 0 connects to: (1, 4) (2, 1)\n\
             Vertex 1 connects to:\n\
             Vertex 2 connects to: (1, 7)\n"
        );
    }

    #[test]
    fn test_render_colored_keeps_content() {
        let graph = Graph::build(1, []).unwrap();

        let text = render_graph(&graph, 2, true);

        assert!(text.contains("Graph 2"));
        assert!(text.contains("\u{1b}["));
    }

    #[test]
    fn test_render_dot() {
        let graph = Graph::build(2, [(0, 1, 3)]).unwrap();

        let dot = render(&graph, 1, DisplayFormat::Dot, false);

        assert!(dot.starts_with("digraph batch"));
    }

    #[test]
    fn test_display_limit() {
        assert_eq!(DisplayMode::None.limit(3), 0);
        assert_eq!(DisplayMode::First.limit(3), 1);
        assert_eq!(DisplayMode::All.limit(3), 3);
    }
}
