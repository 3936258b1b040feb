//! Mode Order: derive a normal-mode mapping from ezFCF report output.
//!
//! This crate provides functionality for:
//! - Locating the parallel approximation section of an ezFCF text report
//! - Parsing the mode overlap matrix that follows it, including `--` placeholders
//! - Reducing the matrix to a per-column dominant-row order
//! - Checking whether that order is a permutation
//!
//! # Quick Start
//!
//! ```no_run
//! use mode_order::{ParseConfig, open_report};
//!
//! let report = open_report("ezfcf_output.txt", &ParseConfig::default())?;
//! println!("{:?}", report.order);
//! if report.is_permutation() == Some(false) {
//!     eprintln!("not a one-to-one mapping");
//! }
//! # Ok::<(), mode_order::ReportError>(())
//! ```

mod config;
mod matrix;
mod order;
mod permutation;
mod report;
mod report_parser;

pub use config::{
    ConfigError, DEFAULT_MARKER, DEFAULT_MISSING_TOKEN, ParseConfig, ParseConfigBuilder,
};
pub use matrix::SquareMatrix;
pub use order::new_mode_order;
pub use permutation::{PermutationCheck, validate_permutation};
pub use report::{ModeOrderReport, ReportError, analyze_report, open_report};
pub use report_parser::{
    ReportLayout, ReportParseError, find_header, find_marker, locate, parse_header_labels,
    parse_matrix, read_mode_matrix,
};
