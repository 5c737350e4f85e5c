//! CSV text to rows

use std::io::Read;

use tracing::trace;

use super::{Record, RecordResult};

/// Parse CSV text into rows of fields
///
/// Rows may have any number of fields; checking arity is left to the
/// extractor so a single short row does not fail the whole stream.
/// Blank lines produce no row. An `Err` means the text could not be parsed
/// at all, which is distinct from `Ok` with zero rows.
pub fn parse_records(input: &str) -> RecordResult<Vec<Record>> {
    read_records(input.as_bytes())
}

/// Read rows of fields from any CSV source
///
/// Fields are not required to be UTF-8; invalid sequences are replaced with
/// U+FFFD so one bad value does not lose the rest of the stream. Only a
/// failing source is an error.
pub fn read_records<R: Read>(source: R) -> RecordResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut rows = Vec::new();
    for result in reader.byte_records() {
        let record = result?;
        rows.push(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        );
    }

    trace!(rows = rows.len(), "parsed CSV records");
    Ok(rows)
}
