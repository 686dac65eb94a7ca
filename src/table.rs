use std::{fs::File, path::Path};

use crate::error::{CleanError, Result};

/// In-memory table: one header row plus ordered data rows, every cell a
/// string. Column order and row order are significant and preserved by all
/// operations except the explicit reorder in the reshape pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names, from the header row of the source CSV.
    pub headers: Vec<String>,
    /// Each data row, one String per field.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Index of a named column, exact match.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| CleanError::ColumnNotFound(name.to_string()))
    }

    /// Cell at (`row`, `col`), empty string for cells past a short row's end.
    pub fn cell<'a>(&'a self, row: &'a [String], col: usize) -> &'a str {
        row.get(col).map(String::as_str).unwrap_or("")
    }

    /// Project to the named columns, in the given order. Rows shorter than
    /// the header are padded with empty cells rather than rejected; width is
    /// enforced later, by the reshape pass.
    pub fn select(&self, names: &[&str]) -> Result<Table> {
        let indices = names
            .iter()
            .map(|n| self.column_index(n))
            .collect::<Result<Vec<_>>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|&i| self.cell(row, i).to_string())
                    .collect()
            })
            .collect();

        Ok(Table::new(
            names.iter().map(|n| n.to_string()).collect(),
            rows,
        ))
    }

    /// Write as UTF-8 comma-separated CSV with a header row and no index
    /// column.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| CleanError::io(path, e))?;
        let mut wtr = csv::Writer::from_writer(file);

        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush().map_err(|e| CleanError::io(path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["A".into(), "B".into(), "C".into()],
            vec![
                vec!["1".into(), "2".into(), "3".into()],
                vec!["4".into(), "5".into(), "6".into()],
            ],
        )
    }

    #[test]
    fn column_index_finds_exact_name() {
        let t = sample();
        assert_eq!(t.column_index("B").unwrap(), 1);
        assert!(matches!(
            t.column_index("b"),
            Err(CleanError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn select_projects_and_reorders() {
        let t = sample().select(&["C", "A"]).unwrap();
        assert_eq!(t.headers, vec!["C", "A"]);
        assert_eq!(t.rows[0], vec!["3", "1"]);
        assert_eq!(t.rows[1], vec!["6", "4"]);
    }

    #[test]
    fn select_pads_short_rows() {
        let mut t = sample();
        t.rows.push(vec!["7".into()]);
        let t = t.select(&["A", "C"]).unwrap();
        assert_eq!(t.rows[2], vec!["7", ""]);
    }
}
