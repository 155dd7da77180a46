// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Result writer - serializes spanning trees to the output destination

use crate::error::{BatchError, BatchResult};
use crate::mst::MstResult;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// How a multi-graph batch is laid out on disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputLayout {
    /// One file, one section per graph separated by a blank line
    #[default]
    Sectioned,
    /// One file per graph, numbered from 1
    PerGraph,
}

/// Write one result section: the total weight, then one `vertex weight` line
/// per tree edge
pub fn write_result<W: Write>(out: &mut W, result: &MstResult) -> io::Result<()> {
    writeln!(out, "{}", result.total_weight)?;
    for edge in &result.edges {
        writeln!(out, "{} {}", edge.vertex, edge.weight)?;
    }
    Ok(())
}

/// Write every result of a batch to `path` using `layout`.
///
/// Returns the files written, in batch order. A single-result batch always
/// goes to `path` itself.
pub fn write_batch(
    path: &Path,
    results: &[MstResult],
    layout: OutputLayout,
) -> BatchResult<Vec<PathBuf>> {
    if results.len() <= 1 || layout == OutputLayout::Sectioned {
        write_sections(path, results)?;
        return Ok(vec![path.to_path_buf()]);
    }

    let mut written = Vec::with_capacity(results.len());
    for (index, result) in results.iter().enumerate() {
        let target = numbered_path(path, index + 1);
        write_sections(&target, std::slice::from_ref(result))?;
        written.push(target);
    }
    Ok(written)
}

fn write_sections(path: &Path, results: &[MstResult]) -> BatchResult<()> {
    let file = File::create(path).map_err(|source| BatchError::io(path, source))?;
    write_separated(BufWriter::new(file), results)
        .map_err(|source| BatchError::io(path, source))?;

    debug!("Wrote {} section(s) to {}", results.len(), path.display());
    Ok(())
}

fn write_separated<W: Write>(mut out: W, results: &[MstResult]) -> io::Result<()> {
    for (index, result) in results.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        write_result(&mut out, result)?;
    }
    out.flush()
}

/// `out.txt` -> `out-3.txt`; `out` -> `out-3`
fn numbered_path(path: &Path, number: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}-{number}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{number}"),
    };
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mst::TreeEdge;
    use std::fs;
    use tempfile::TempDir;

    fn sample(total_weight: i128, edges: &[(usize, i64)]) -> MstResult {
        MstResult {
            total_weight,
            edges: edges
                .iter()
                .map(|&(vertex, weight)| TreeEdge { vertex, weight })
                .collect(),
        }
    }

    #[test]
    fn test_write_result_format() {
        let mut buf = Vec::new();
        write_result(&mut buf, &sample(4, &[(1, 1), (2, 2), (3, 1)])).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "4\n1 1\n2 2\n3 1\n");
    }

    #[test]
    fn test_write_empty_result() {
        let mut buf = Vec::new();
        write_result(&mut buf, &MstResult::default()).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "0\n");
    }

    #[test]
    fn test_sectioned_batch() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "stale content that must disappear\n").unwrap();

        let written = write_batch(
            &path,
            &[sample(3, &[(1, 3)]), sample(0, &[])],
            OutputLayout::Sectioned,
        )
        .unwrap();

        assert_eq!(written, vec![path.clone()]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "3\n1 3\n\n0\n");
    }

    #[test]
    fn test_per_graph_batch() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        let written = write_batch(
            &path,
            &[sample(3, &[(1, 3)]), sample(5, &[(1, 5)])],
            OutputLayout::PerGraph,
        )
        .unwrap();

        assert_eq!(
            written,
            vec![dir.path().join("out-1.txt"), dir.path().join("out-2.txt")]
        );
        assert_eq!(fs::read_to_string(&written[1]).unwrap(), "5\n1 5\n");
        assert!(!path.exists());
    }

    #[test]
    fn test_per_graph_single_result_uses_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        let written = write_batch(&path, &[sample(1, &[(1, 1)])], OutputLayout::PerGraph).unwrap();

        assert_eq!(written, vec![path]);
    }

    #[test]
    fn test_numbered_path_without_extension() {
        assert_eq!(numbered_path(Path::new("dir/result"), 2), PathBuf::from("dir/result-2"));
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = write_batch(&path, &[MstResult::default()], OutputLayout::Sectioned).unwrap_err();

        assert!(matches!(err, BatchError::Io { .. }));
    }
}
