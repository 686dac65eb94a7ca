use std::{fs, path::Path};

use csv::ReaderBuilder;
use encoding_rs::Encoding;
use tracing::debug;

use crate::error::{CleanError, Result};
use crate::table::Table;

/// Load a CSV file under the declared encoding and normalize every cell.
///
/// The decode is strict: any byte sequence that is malformed under the
/// declared encoding fails the run instead of being replaced. Ragged rows
/// are accepted here; width is enforced by the reshape pass.
pub fn load_table(path: &Path, encoding: &str) -> Result<Table> {
    let text = decode_file(path, encoding)?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let cells: Vec<String> = record.iter().map(normalize_cell).collect();
        match headers {
            None => headers = Some(cells),
            Some(_) => rows.push(cells),
        }
    }

    let headers = headers.unwrap_or_default();
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "loaded table"
    );
    Ok(Table::new(headers, rows))
}

/// Read the whole file and decode it strictly under `encoding`.
pub fn decode_file(path: &Path, encoding: &str) -> Result<String> {
    let enc = Encoding::for_label(encoding.as_bytes())
        .ok_or_else(|| CleanError::Encoding(format!("unknown encoding label {:?}", encoding)))?;

    let bytes = fs::read(path).map_err(|e| CleanError::io(path, e))?;

    enc.decode_without_bom_handling_and_without_replacement(&bytes)
        .map(|cow| cow.into_owned())
        .ok_or_else(|| {
            CleanError::Encoding(format!(
                "{} is not valid {}",
                path.display(),
                enc.name()
            ))
        })
}

/// Trim surrounding whitespace and blank out missing-value tokens
/// (NaN and ±inf remnants of an upstream numeric export). Idempotent.
pub fn normalize_cell(raw: &str) -> String {
    let trimmed = raw.trim();
    if is_missing_token(trimmed) {
        String::new()
    } else {
        trimmed.to_string()
    }
}

fn is_missing_token(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "nan" | "inf" | "-inf" | "+inf"
    )
}
