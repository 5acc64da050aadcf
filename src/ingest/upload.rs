//! Reading uploaded files into text

use std::io::Read;

use crate::types::*;

/// Extension accepted for table uploads
pub const TABLE_EXTENSION: &str = ".csv";

/// Read an uploaded table file into text.
///
/// The name must end in `.csv`. Bytes that are not valid UTF-8 are replaced
/// rather than rejected, so a stray byte in a bank export does not block the
/// whole upload.
pub fn read_table_upload<R: Read>(file_name: &str, mut reader: R) -> IngestResult<String> {
    if !file_name.ends_with(TABLE_EXTENSION) {
        return Err(IngestError::InvalidFile(
            "Please upload a CSV file".to_string(),
        ));
    }

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let text = String::from_utf8_lossy(&bytes);
    // BOM from spreadsheet exports would otherwise stick to the first header cell
    Ok(text.trim_start_matches('\u{feff}').to_string())
}
