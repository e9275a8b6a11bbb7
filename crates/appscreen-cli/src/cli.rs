//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Appscreen: LLM inclusion/exclusion screening for scraped apps
#[derive(Parser)]
#[command(name = "appscreen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file (scraped apps); directory mode is used when absent
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Directory containing CSVs to process (used if --csv not provided)
    #[arg(long, default_value = "data")]
    pub dir: PathBuf,

    /// 1-based start index (inclusive). Default: first row
    #[arg(long)]
    pub start: Option<usize>,

    /// 1-based end index (inclusive). Default: last row
    #[arg(long)]
    pub end: Option<usize>,

    /// Output CSV file (single-file mode)
    #[arg(long, default_value = "llm_assessment_output.csv")]
    pub out: PathBuf,

    /// Gemini model name (e.g., gemini-1.5-flash or gemini-2.5-flash)
    #[arg(long, default_value = "gemini-1.5-flash")]
    pub model: String,

    /// Seconds to sleep between requests to avoid rate limits
    #[arg(long, default_value_t = 0.5)]
    pub sleep: f64,

    /// Retries on rate-limit errors
    #[arg(long, default_value_t = 2)]
    pub retries: u32,

    /// Base backoff seconds for rate-limit retries
    #[arg(long, default_value_t = 10.0)]
    pub backoff: f64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
