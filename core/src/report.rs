//! End-to-end analysis of one ezFCF report.

use crate::config::ParseConfig;
use crate::matrix::SquareMatrix;
use crate::order::new_mode_order;
use crate::permutation::{PermutationCheck, validate_permutation};
use crate::report_parser::{ReportLayout, ReportParseError, read_mode_matrix};
use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read report")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ReportParseError),
}

/// Everything derived from a report: where the block was, the matrix, the
/// mode order and, unless disabled, the permutation check.
#[derive(Debug, Clone, Serialize)]
pub struct ModeOrderReport {
    #[serde(flatten)]
    pub layout: ReportLayout,
    #[serde(skip)]
    pub matrix: SquareMatrix,
    pub order: Vec<usize>,
    pub validation: Option<PermutationCheck>,
}

impl ModeOrderReport {
    pub fn n(&self) -> usize {
        self.matrix.n()
    }

    /// `None` when validation was skipped.
    pub fn is_permutation(&self) -> Option<bool> {
        self.validation.as_ref().map(PermutationCheck::is_permutation)
    }
}

pub fn analyze_report(
    text: &str,
    config: &ParseConfig,
) -> Result<ModeOrderReport, ReportParseError> {
    let (layout, matrix) = read_mode_matrix(text, config)?;
    let order = new_mode_order(&matrix);

    let validation = config.validate_permutation.then(|| {
        let check = validate_permutation(&order, matrix.n());
        if !check.is_permutation() {
            info!(
                missing = ?check.missing,
                duplicates = ?check.duplicates,
                "mode order is not a permutation"
            );
        }
        check
    });

    Ok(ModeOrderReport {
        layout,
        matrix,
        order,
        validation,
    })
}

pub fn open_report(
    path: impl AsRef<Path>,
    config: &ParseConfig,
) -> Result<ModeOrderReport, ReportError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read report");
    Ok(analyze_report(&text, config)?)
}
