//! Plain-text classification report

use std::io::{self, Write};

use super::Classification;

/// Write the two report sections, plus a skipped section when needed
pub fn write_report(out: &mut dyn Write, classification: &Classification) -> io::Result<()> {
    let requested = classification.requested;

    writeln!(
        out,
        "\n\n{}/{requested} Objects NOT IN HEAD:",
        classification.not_in_head.len()
    )?;
    for entry in &classification.not_in_head {
        writeln!(out, "{entry}")?;
    }

    writeln!(
        out,
        "\n\n{}/{requested} Objects IN HEAD:",
        classification.in_head.len()
    )?;
    for entry in &classification.in_head {
        writeln!(out, "{entry}")?;
    }

    if !classification.skipped.is_empty() {
        writeln!(
            out,
            "\n\n{}/{requested} Objects SKIPPED (no path in reachability listing):",
            classification.skipped.len()
        )?;
        for record in &classification.skipped {
            writeln!(out, "{} ({}, {} MiB)", record.hash, record.kind, record.size_mib())?;
        }
    }

    out.flush()
}
