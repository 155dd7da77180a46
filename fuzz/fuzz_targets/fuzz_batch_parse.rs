// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
//! Arbitrary batch text must either parse or fail cleanly, and every parsed
//! graph must solve without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mstbatch::mst::MstEngine;
use mstbatch::reader::parse_batch;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(graphs) = parse_batch(text) {
        let engine = MstEngine::new();
        for graph in &graphs {
            let result = engine.compute(graph);
            assert!(result.edge_count() < graph.vertex_count());
        }
    }
});
