use anyhow::Result;
use mode_order::ModeOrderReport;
use std::io::Write;

pub fn write_json_report<W: Write>(w: &mut W, report: &ModeOrderReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, report)?;
    writeln!(w)?;
    Ok(())
}
