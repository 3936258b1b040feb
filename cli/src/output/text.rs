use anyhow::Result;
use mode_order::{ModeOrderReport, PermutationCheck};
use std::io::Write;

pub fn write_text_report<W: Write>(
    w: &mut W,
    report: &ModeOrderReport,
    verbose: bool,
) -> Result<()> {
    if verbose {
        write_layout(w, report)?;
    }

    writeln!(w, "New mode order:")?;
    writeln!(w, "{}", join_indices(&report.order))?;

    if let Some(check) = &report.validation {
        writeln!(w)?;
        write_validation(w, check)?;
    }

    Ok(())
}

fn write_layout<W: Write>(w: &mut W, report: &ModeOrderReport) -> Result<()> {
    let layout = &report.layout;
    writeln!(w, "Marker found on line {}", layout.marker_line)?;
    writeln!(
        w,
        "Column header on line {} ({} labels)",
        layout.header_line,
        layout.labels.len()
    )?;
    writeln!(w, "Matrix size: {}x{}", layout.n, layout.n)?;
    writeln!(w)?;
    Ok(())
}

fn write_validation<W: Write>(w: &mut W, check: &PermutationCheck) -> Result<()> {
    if check.is_permutation() {
        writeln!(w, "✔ Mode mapping is a valid one-to-one permutation.")?;
        return Ok(());
    }

    writeln!(w, "⚠ WARNING: Mode mapping is NOT a proper permutation!")?;
    if !check.missing.is_empty() {
        writeln!(w, "Missing indices: {}", join_indices(&check.missing))?;
    }
    if !check.duplicates.is_empty() {
        writeln!(w, "Repeated indices: {}", join_indices(&check.duplicates))?;
    }
    Ok(())
}

fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
