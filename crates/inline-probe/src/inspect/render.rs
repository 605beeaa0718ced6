//! Report rendering

use std::io::Write;

use crate::error::Result;

use super::Probe;

/// Render one stanza: the name and a colon, then the value indented.
///
/// Every line of a multi-line value gets the same indentation, so the
/// value reads as one block under its name.
pub fn render_stanza(probe: &Probe, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let body = probe
        .value
        .split('\n')
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}:\n{}\n", probe.name, body)
}

/// Write the plain-text report.
///
/// # Errors
///
/// Returns `ProbeError::Write` if the writer fails.
pub fn render_text<W: Write>(probes: &[Probe], indent: usize, out: &mut W) -> Result<()> {
    for probe in probes {
        out.write_all(render_stanza(probe, indent).as_bytes())?;
    }
    Ok(())
}

/// Write the report as a JSON array, followed by a newline.
///
/// # Errors
///
/// Returns `ProbeError::Json` or `ProbeError::Write` on failure.
pub fn render_json<W: Write>(probes: &[Probe], out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, probes)?;
    writeln!(out)?;
    Ok(())
}
