//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use mode_order::{ModeOrderReport, ParseConfig, open_report};
use std::path::PathBuf;

pub const MARKER: &str = "=== Reading the parallel approximation job parameters ===";

pub fn fixture_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../fixtures");
    path.push(filename);
    path
}

pub fn open_fixture_report(name: &str) -> ModeOrderReport {
    let path = fixture_path(name);
    open_report(&path, &ParseConfig::default()).unwrap_or_else(|e| {
        panic!("failed to analyze fixture {}: {e}", path.display());
    })
}

/// Wrap matrix lines in a minimal report: preamble, marker, a caption, then the block.
pub fn synthetic_report(header: &str, rows: &[&str]) -> String {
    let mut text = String::from("ezFCF  ver. 2.2\n\n");
    text.push_str(MARKER);
    text.push_str("\n\nOverlap matrix:\n");
    text.push_str(header);
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}
