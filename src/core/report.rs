// Testmode - core/report.rs
//
// Text and JSON rendering of filter decisions.
// Core layer: writes to any Write trait object.

use crate::core::model::LabelDecision;
use crate::util::error::ReportError;
use std::io::Write;

/// Write the retained labels, one per line, in decision order.
///
/// This is the plain listing a filtered run produces on stdout; dropped
/// labels do not appear. Returns the number of labels written.
pub fn write_text<W: Write>(
    decisions: &[LabelDecision],
    mut writer: W,
) -> Result<usize, ReportError> {
    let mut count = 0;
    for decision in decisions {
        if decision.retained {
            writeln!(writer, "{}", decision.label).map_err(|e| ReportError::Io { source: e })?;
            count += 1;
        }
    }
    writer.flush().map_err(|e| ReportError::Io { source: e })?;
    Ok(count)
}

/// Write the full decision list as pretty JSON (array of objects).
///
/// Dropped labels are included with `retained = false` so the output
/// records why the listing looks the way it does. Returns the number of
/// retained labels.
pub fn write_json<W: Write>(
    decisions: &[LabelDecision],
    mut writer: W,
) -> Result<usize, ReportError> {
    serde_json::to_writer_pretty(&mut writer, decisions)
        .map_err(|e| ReportError::Json { source: e })?;
    writeln!(writer).map_err(|e| ReportError::Io { source: e })?;
    Ok(decisions.iter().filter(|d| d.retained).count())
}
