// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Batch pipeline - read graphs, solve each one, write the results

use crate::config::Config;
use crate::display;
use crate::mst::{MstEngine, MstResult};
use crate::reader;
use crate::writer;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Number of graphs in the batch
    pub graph_count: usize,
    /// One spanning tree per graph, in batch order
    pub results: Vec<MstResult>,
    /// Files the results were written to
    pub outputs: Vec<PathBuf>,
}

/// Options that only affect console output
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOptions {
    /// Colorize displayed graphs
    pub color: bool,
}

/// Run the whole batch.
///
/// Reading is completed before anything is solved or written, so a malformed
/// batch leaves the output untouched.
pub fn run(
    input: &Path,
    output: &Path,
    config: &Config,
    console: ConsoleOptions,
) -> Result<BatchSummary> {
    info!("Reading batch from {}", input.display());

    let graphs = reader::read_batch(input)
        .with_context(|| format!("Failed to read batch from {}", input.display()))?;

    for (index, graph) in graphs
        .iter()
        .enumerate()
        .take(config.display.limit(graphs.len()))
    {
        print!(
            "{}",
            display::render(graph, index + 1, config.display_format, console.color)
        );
    }

    let engine = MstEngine::new();
    let results: Vec<MstResult> = graphs
        .iter()
        .enumerate()
        .map(|(index, graph)| {
            let result = engine.compute(graph);
            debug!(
                "Graph {}: weight {} with {} edge(s)",
                index + 1,
                result.total_weight,
                result.edge_count()
            );
            if !result.spans(graph.vertex_count()) {
                info!(
                    "Graph {} is not fully reachable from vertex 0: {} of {} vertices in tree",
                    index + 1,
                    result.edge_count() + 1,
                    graph.vertex_count()
                );
            }
            result
        })
        .collect();

    let outputs = writer::write_batch(output, &results, config.output_layout)
        .with_context(|| format!("Failed to write results to {}", output.display()))?;

    info!(
        "Solved {} graph(s), results written to {}",
        graphs.len(),
        outputs
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(BatchSummary {
        graph_count: graphs.len(),
        results,
        outputs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::OutputLayout;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_single_graph() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "1\n4 5\n0 1 1\n0 2 4\n1 2 2\n1 3 5\n2 3 1\n").unwrap();

        let summary = run(&input, &output, &Config::default(), ConsoleOptions::default()).unwrap();

        assert_eq!(summary.graph_count, 1);
        assert_eq!(summary.results[0].total_weight, 4);
        assert_eq!(fs::read_to_string(&output).unwrap(), "4\n1 1\n2 2\n3 1\n");
    }

    #[test]
    fn test_run_per_graph_layout() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "2\n3 2\n0 1 10\n0 1 3\n2 0\n").unwrap();
        let config = Config {
            output_layout: OutputLayout::PerGraph,
            ..Config::default()
        };

        let summary = run(&input, &output, &config, ConsoleOptions::default()).unwrap();

        assert_eq!(summary.outputs.len(), 2);
        assert_eq!(fs::read_to_string(&summary.outputs[0]).unwrap(), "3\n1 3\n");
        assert_eq!(fs::read_to_string(&summary.outputs[1]).unwrap(), "0\n");
    }

    #[test]
    fn test_bad_batch_leaves_output_untouched() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "2\n2 1\n0 1 1\n2 1\n0 5 1\n").unwrap();
        fs::write(&output, "previous\n").unwrap();

        let err = run(&input, &output, &Config::default(), ConsoleOptions::default()).unwrap_err();

        assert!(format!("{err:#}").contains("graph 2"));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");
    }
}
