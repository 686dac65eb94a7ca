use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use reqsweep::filter::MatchMode;
use reqsweep::pipeline::{run, Config};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Clean a requirements-export CSV: drop junk rows, split requirement type from ID"
)]
struct Args {
    /// Source CSV with ID, Segment and Functional Requirements columns
    #[arg(short, long)]
    input: PathBuf,

    /// Destination for the cleaned CSV
    #[arg(short, long, default_value = "CLEANED_FILE.csv")]
    output: PathBuf,

    /// Text encoding of the source file
    #[arg(long, default_value = "windows-1252")]
    encoding: String,

    /// Keyword marking a row for removal; repeatable. Replaces the built-in
    /// junk list when given.
    #[arg(long = "keyword", value_name = "WORD")]
    keywords: Vec<String>,

    /// How keywords are matched against cells
    #[arg(long, value_enum, default_value = "substring")]
    match_mode: MatchMode,

    /// Where to place the transient projection file
    #[arg(long)]
    intermediate: Option<PathBuf>,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = Args::parse();

    let mut cfg = Config::new(&args.input, &args.output);
    cfg.encoding = args.encoding;
    cfg.match_mode = args.match_mode;
    if !args.keywords.is_empty() {
        cfg.keywords = args.keywords;
    }
    if let Some(intermediate) = args.intermediate {
        cfg.intermediate = intermediate;
    }

    let report = run(&cfg).with_context(|| format!("cleaning {}", args.input.display()))?;

    info!(
        path = %report.output_path.display(),
        "your cleaned file's location"
    );
    Ok(())
}
