//! Summary writers for `locale-merge`.

use std::io::Write;

use locale_merge::MergeReport;

/// Writes one human-readable summary line per merged locale.
///
/// # Errors
///
/// Propagates any I/O error raised by `writer`.
pub fn write_summary<W: Write>(writer: &mut W, reports: &[MergeReport]) -> std::io::Result<()> {
    for report in reports {
        writeln!(
            writer,
            "{}: {} translation keys after merge ({} added)",
            report.locale, report.leaf_keys, report.added_keys
        )?;
    }
    Ok(())
}
