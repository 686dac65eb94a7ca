use std::{fs, path::PathBuf};

use tracing::{info, warn};

use crate::error::{CleanError, Result};
use crate::filter::{remove_unwanted_rows, MatchMode};
use crate::load::load_table;
use crate::reshape::{add_information_based_on_id, SOURCE_COLUMNS};
use crate::table::Table;

/// Junk markers inherited from the source export: stray commentary rows,
/// hyperlink rows, spreadsheet error cells, and mojibake from a bad decode.
pub const DEFAULT_KEYWORDS: [&str; 18] = [
    "User",
    "Domain",
    "IAM",
    "Keith",
    "SIEM",
    "Note",
    "https",
    "http",
    "Soft",
    "Commu",
    "yes",
    "Recommend cutting",
    "not all switches",
    "#NAME?",
    "Ã¯",
    "James",
    "Â½",
    "Ã¯Â¿Â½Ã¯Â¿Â½",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Encoding label of the input file, e.g. "windows-1252".
    pub encoding: String,
    pub keywords: Vec<String>,
    pub match_mode: MatchMode,
    /// Path of the transient projection file; removed on the success path.
    pub intermediate: PathBuf,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        let output = output.into();
        let intermediate = output
            .parent()
            .map(|dir| dir.join("tester.csv"))
            .unwrap_or_else(|| PathBuf::from("tester.csv"));
        Self {
            input: input.into(),
            output,
            encoding: "windows-1252".to_string(),
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            match_mode: MatchMode::Substring,
            intermediate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageEvent {
    pub stage: &'static str,
    pub rows: usize,
}

/// Stage-completion events of a finished run, plus where the output landed.
#[derive(Debug, Clone)]
pub struct Report {
    pub stages: Vec<StageEvent>,
    pub output_path: PathBuf,
}

/// Run the whole cleaning pipeline: load and normalize, project the three
/// source columns through the intermediate file, strip unwanted rows,
/// reshape by ID, strip again, write the final CSV.
///
/// The intermediate file is removed best-effort on success. If the run
/// fails after the projection was written, the file is left on disk.
pub fn run(cfg: &Config) -> Result<Report> {
    let mut stages = Vec::new();
    let mut record = |stage: &'static str, table: &Table| {
        info!(stage, rows = table.num_rows(), "stage complete");
        stages.push(StageEvent {
            stage,
            rows: table.num_rows(),
        });
    };

    let raw = load_table(&cfg.input, &cfg.encoding)?;
    record("load", &raw);

    let projected = raw.select(&SOURCE_COLUMNS)?;
    projected.write_csv(&cfg.intermediate)?;
    record("project", &projected);

    let reloaded = load_table(&cfg.intermediate, "utf-8")?;
    record("reload", &reloaded);

    let table = remove_unwanted_rows(&reloaded, "ID", &cfg.keywords, cfg.match_mode)?;
    record("filter ID", &table);

    let table = remove_unwanted_rows(
        &table,
        "Functional Requirements",
        &cfg.keywords,
        cfg.match_mode,
    )?;
    record("filter Functional Requirements", &table);

    let table = add_information_based_on_id(&table)?;
    record("reshape", &table);

    let table = remove_unwanted_rows(&table, "Requirement Type", &cfg.keywords, cfg.match_mode)?;
    record("filter Requirement Type", &table);

    table.write_csv(&cfg.output)?;
    record("write", &table);

    let output_path = fs::canonicalize(&cfg.output).map_err(|e| CleanError::io(&cfg.output, e))?;
    info!(path = %output_path.display(), "cleaned file written");

    remove_intermediate(cfg);

    Ok(Report {
        stages,
        output_path,
    })
}

/// Cleanup is best-effort: a missing file is fine, anything else is logged
/// and ignored.
fn remove_intermediate(cfg: &Config) {
    match fs::remove_file(&cfg.intermediate) {
        Ok(()) => info!(path = %cfg.intermediate.display(), "removed intermediate file"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %cfg.intermediate.display(), "no intermediate file to remove")
        }
        Err(e) => warn!(path = %cfg.intermediate.display(), error = %e, "failed to remove intermediate file"),
    }
}
