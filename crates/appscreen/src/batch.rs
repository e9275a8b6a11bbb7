//! Batch driver: sequential row-range screening.

use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::DataTable;
use crate::llm::{LlmProvider, RetryPolicy, review_prompt, send_with_retry};
use crate::record::AppRecord;

/// Options for one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// 1-based inclusive start row (None = first row).
    pub start: Option<usize>,
    /// 1-based inclusive end row (None = last row).
    pub end: Option<usize>,
    /// Fixed pacing delay between requests.
    pub pause: Duration,
    /// Retry budget for rate-limited requests.
    pub retry: RetryPolicy,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            pause: Duration::from_millis(500),
            retry: RetryPolicy::default(),
        }
    }
}

/// One per-row verdict, in output-table column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub index: usize,
    pub title: String,
    pub genre: String,
    pub updated: Option<String>,
    /// Raw response text from the inference service, stored verbatim.
    pub llm_decision: String,
}

/// Progress events emitted while a batch runs.
///
/// The library stays print-free; the CLI renders these.
#[derive(Debug)]
pub enum Progress<'a> {
    /// About to send the request for one row.
    Row {
        index: usize,
        end: usize,
        record: &'a AppRecord,
    },
    /// Rate limit hit; backing off before the next attempt.
    Cooldown { wait: Duration },
}

/// Resolve the inclusive 1-based row range for a table.
///
/// Out-of-bounds requests are clamped to `[1, row_count]`. A clamped start
/// past the clamped end yields an empty range.
pub fn resolve_range(
    start: Option<usize>,
    end: Option<usize>,
    row_count: usize,
) -> (usize, usize) {
    let start_idx = start.map(|s| s.max(1)).unwrap_or(1);
    let end_idx = end.map(|e| e.min(row_count)).unwrap_or(row_count);
    (start_idx, end_idx)
}

/// Screen a contiguous row range sequentially, one request at a time.
///
/// Any propagated request error aborts the whole batch; there is no
/// per-row error isolation.
pub fn assess_rows(
    table: &DataTable,
    provider: &dyn LlmProvider,
    options: &BatchOptions,
    progress: &mut dyn FnMut(Progress),
) -> Result<Vec<Assessment>> {
    let (start_idx, end_idx) = resolve_range(options.start, options.end, table.row_count());

    let mut results = Vec::new();
    if start_idx > end_idx {
        return Ok(results);
    }

    for index in start_idx..=end_idx {
        let record = AppRecord::from_table(table, index);
        progress(Progress::Row {
            index,
            end: end_idx,
            record: &record,
        });

        let prompt = review_prompt(&record);
        let decision = send_with_retry(provider, &prompt, &options.retry, &mut |wait| {
            progress(Progress::Cooldown { wait })
        })?;

        results.push(Assessment {
            index,
            title: record.title,
            genre: record.genre,
            updated: record.updated,
            llm_decision: decision,
        });

        if !options.pause.is_zero() {
            thread::sleep(options.pause);
        }
    }

    Ok(results)
}
