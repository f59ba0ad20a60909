//! Annotation CSV export.
//!
//! One row per subtitle that carries annotation text, in subtitle-number
//! order, under a fixed three-column header. Fields are quoted per RFC 4180,
//! so commas and quotes inside caption or note text round-trip through
//! spreadsheet tools. The output starts with a UTF-8 BOM; Excel needs it to
//! detect the encoding for non-Latin scripts.

use crate::{errors::ConvertError, subtitle::Subtitle, Result};

/// Byte-order mark prefixed to the CSV output.
const UTF8_BOM: &str = "\u{feff}";

/// Column headers for the annotation table.
const HEADER: [&str; 3] = ["Subtitle Number", "Subtitle Text", "Annotation"];

/// Render the annotation CSV for an ordered subtitle list.
///
/// Subtitles whose annotation string is empty are omitted entirely.
///
/// # Errors
///
/// Returns [`ConvertError::Csv`] if the writer fails; with an in-memory
/// buffer this only happens on internal writer errors.
pub fn render_csv(subtitles: &[Subtitle]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER).map_err(ConvertError::csv)?;

    for subtitle in subtitles.iter().filter(|s| !s.annotations().is_empty()) {
        writer
            .write_record([
                subtitle.number().to_string().as_str(),
                subtitle.text(),
                subtitle.annotations(),
            ])
            .map_err(ConvertError::csv)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ConvertError::csv(e.into_error()))?;
    // The writer only ever received &str fields, so the buffer is UTF-8.
    let body = String::from_utf8(bytes).map_err(ConvertError::csv)?;

    Ok(format!("{UTF8_BOM}{body}"))
}
