use clap::ValueEnum;
use tracing::debug;

use crate::error::Result;
use crate::table::Table;

/// How a keyword is compared against a cell. The source system matched by
/// substring, which over-matches ("yes" hits "yesterday"); that stays the
/// default, with whole-cell equality available as an opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MatchMode {
    #[default]
    Substring,
    Exact,
}

/// Drop every row whose `column` cell matches any keyword (case-insensitive,
/// per `mode`), and every row that is blank across all columns. Order among
/// retained rows is preserved.
pub fn remove_unwanted_rows(
    table: &Table,
    column: &str,
    keywords: &[String],
    mode: MatchMode,
) -> Result<Table> {
    let col = table.column_index(column)?;
    let needles: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let kept: Vec<Vec<String>> = table
        .rows
        .iter()
        .filter(|row| {
            let blank = row.iter().all(|cell| cell.trim().is_empty());
            !blank && !matches_any(table.cell(row, col), &needles, mode)
        })
        .cloned()
        .collect();

    debug!(column, dropped = table.num_rows() - kept.len(), "keyword filter");
    Ok(Table::new(table.headers.clone(), kept))
}

fn matches_any(cell: &str, needles: &[String], mode: MatchMode) -> bool {
    let cell = cell.to_lowercase();
    needles.iter().any(|needle| match mode {
        MatchMode::Substring => cell.contains(needle),
        MatchMode::Exact => cell == *needle,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CleanError;

    fn table(rows: &[[&str; 2]]) -> Table {
        Table::new(
            vec!["ID".into(), "Note".into()],
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn removes_keyword_rows_case_insensitively() {
        let t = table(&[["REQ-1", "keep"], ["iam-user", "drop"], ["REQ-2", "keep"]]);
        let out = remove_unwanted_rows(&t, "ID", &kw(&["IAM"]), MatchMode::Substring).unwrap();
        assert_eq!(out.num_rows(), 2);
        assert_eq!(out.rows[0][0], "REQ-1");
        assert_eq!(out.rows[1][0], "REQ-2");
    }

    #[test]
    fn removes_blank_rows_regardless_of_keywords() {
        let t = table(&[["", "  "], ["REQ-1", "x"]]);
        let out = remove_unwanted_rows(&t, "ID", &kw(&[]), MatchMode::Substring).unwrap();
        assert_eq!(out.num_rows(), 1);
        assert_eq!(out.rows[0][0], "REQ-1");
    }

    #[test]
    fn substring_mode_over_matches_by_design() {
        let t = table(&[["yesterday", "x"], ["today", "y"]]);
        let out = remove_unwanted_rows(&t, "ID", &kw(&["yes"]), MatchMode::Substring).unwrap();
        assert_eq!(out.num_rows(), 1);
        assert_eq!(out.rows[0][0], "today");
    }

    #[test]
    fn exact_mode_requires_whole_cell_match() {
        let t = table(&[["yesterday", "x"], ["Yes", "y"], ["today", "z"]]);
        let out = remove_unwanted_rows(&t, "ID", &kw(&["yes"]), MatchMode::Exact).unwrap();
        assert_eq!(out.num_rows(), 2);
        assert_eq!(out.rows[0][0], "yesterday");
        assert_eq!(out.rows[1][0], "today");
    }

    #[test]
    fn preserves_order_of_retained_rows() {
        let t = table(&[["c", "1"], ["drop-me", "2"], ["a", "3"], ["b", "4"]]);
        let out = remove_unwanted_rows(&t, "ID", &kw(&["drop"]), MatchMode::Substring).unwrap();
        let ids: Vec<&str> = out.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn missing_target_column_errors() {
        let t = table(&[["REQ-1", "x"]]);
        let err = remove_unwanted_rows(&t, "Segment", &kw(&["x"]), MatchMode::Substring)
            .unwrap_err();
        assert!(matches!(err, CleanError::ColumnNotFound(name) if name == "Segment"));
    }
}
