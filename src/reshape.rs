use tracing::debug;

use crate::error::{CleanError, Result};
use crate::table::Table;

/// One explicit old-name → new-name mapping, applied once. The two new
/// slots created by the ID split become the output's "ID" and "Segment".
const FIELD_MAP: [(&str, &str); 3] = [
    ("ID", "Requirement Type"),
    ("Segment", "Requirement"),
    ("Functional Requirements", "Verification Method"),
];

/// Columns the reshape consumes, in source order.
pub const SOURCE_COLUMNS: [&str; 3] = [FIELD_MAP[0].0, FIELD_MAP[1].0, FIELD_MAP[2].0];

/// Columns the reshape produces, in output order.
pub const TARGET_COLUMNS: [&str; 5] = [
    "ID",
    "Segment",
    FIELD_MAP[0].1,
    FIELD_MAP[1].1,
    FIELD_MAP[2].1,
];

/// Split rows whose ID contains a digit into a fresh ID/Segment pair, then
/// rename and reorder into the 5-column target layout.
///
/// A "numeric" row (ID contains at least one digit) carries its original ID
/// and Segment into the new slots and clears both source cells, so numeric
/// rows never retain a Requirement Type. Non-numeric rows keep their cells
/// under the renamed columns and leave the new slots empty.
pub fn add_information_based_on_id(table: &Table) -> Result<Table> {
    let id_col = table.column_index(FIELD_MAP[0].0)?;
    let seg_col = table.column_index(FIELD_MAP[1].0)?;
    let fr_col = table.column_index(FIELD_MAP[2].0)?;

    let width = table.headers.len();
    let mut rows = Vec::with_capacity(table.num_rows());
    let mut numeric_rows = 0usize;

    for (i, row) in table.rows.iter().enumerate() {
        if row.len() != width {
            return Err(CleanError::MalformedRow {
                row: i,
                expected: width,
                actual: row.len(),
            });
        }

        let id = &row[id_col];
        let segment = &row[seg_col];
        let verification = row[fr_col].clone();

        let out = if has_digit(id) {
            numeric_rows += 1;
            vec![
                id.clone(),
                segment.clone(),
                String::new(),
                String::new(),
                verification,
            ]
        } else {
            vec![
                String::new(),
                String::new(),
                id.clone(),
                segment.clone(),
                verification,
            ]
        };
        rows.push(out);
    }

    debug!(numeric_rows, total = rows.len(), "reshaped by ID");
    Ok(Table::new(
        TARGET_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows,
    ))
}

fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}
