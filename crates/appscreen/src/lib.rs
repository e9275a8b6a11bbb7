//! Appscreen: LLM-assisted relevance screening for scraped app metadata.
//!
//! Appscreen reads tables of scraped app records, asks an LLM to decide
//! include/exclude for each row against a fixed rubric, and writes the raw
//! per-row verdicts to a CSV file per input table.
//!
//! # Core behavior
//!
//! - **Sequential**: one table, one row, one in-flight request at a time
//! - **Rate-limit aware**: quota errors retry with linear backoff; every
//!   other failure aborts the run visibly
//! - **Verbatim verdicts**: the service's response text is stored as-is,
//!   with no JSON parsing of `include`/`reason`
//!
//! # Example
//!
//! ```no_run
//! use appscreen::{MockProvider, ScreenTarget, Screener};
//!
//! let screener = Screener::new(MockProvider::new());
//! let target = ScreenTarget {
//!     input: "data/apps.csv".into(),
//!     output: "data/apps_llm.csv".into(),
//! };
//! let report = screener.screen_file(&target, &mut |_| {}).unwrap();
//!
//! if let Some(report) = report {
//!     println!("Wrote {} assessments", report.rows_processed);
//! }
//! ```

pub mod batch;
pub mod error;
pub mod input;
pub mod llm;
pub mod record;
pub mod report;

mod screener;

pub use batch::{Assessment, BatchOptions, Progress, assess_rows, resolve_range};
pub use error::{Result, ScreenError};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use llm::{
    API_KEY_VAR, GeminiProvider, LlmConfig, LlmProvider, MockFailure, MockProvider, RUBRIC,
    RetryPolicy, review_prompt, send_with_retry,
};
pub use record::AppRecord;
pub use report::write_assessments;
pub use screener::{ScreenReport, ScreenTarget, Screener, resolve_targets};
