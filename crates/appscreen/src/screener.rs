//! Main Screener struct and run orchestration.

use std::path::{Path, PathBuf};

use crate::batch::{self, BatchOptions, Progress};
use crate::error::{Result, ScreenError};
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::llm::LlmProvider;
use crate::report;

/// Output filename suffix used in directory mode.
const OUTPUT_SUFFIX: &str = "_llm";

/// One (input table, output path) pair to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenTarget {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Summary of one processed table.
#[derive(Debug, Clone)]
pub struct ScreenReport {
    /// Metadata about the parsed source file.
    pub source: SourceMetadata,
    /// First row processed (1-based, inclusive).
    pub start: usize,
    /// Last row processed (1-based, inclusive).
    pub end: usize,
    /// Number of assessments written.
    pub rows_processed: usize,
    /// Where the assessments were written.
    pub output: PathBuf,
}

/// Resolve the tables to process.
///
/// An explicit input file is the single target. Otherwise `dir` is scanned
/// non-recursively for `.csv` files (case-insensitive), sorted by name, each
/// writing next to itself with the `_llm` suffix.
pub fn resolve_targets(
    csv: Option<PathBuf>,
    dir: &Path,
    out: &Path,
) -> Result<Vec<ScreenTarget>> {
    if let Some(input) = csv {
        return Ok(vec![ScreenTarget {
            input,
            output: out.to_path_buf(),
        }]);
    }

    if !dir.is_dir() {
        return Err(ScreenError::Config(format!(
            "Directory not found: {}",
            dir.display()
        )));
    }

    let mut targets = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(|e| ScreenError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ScreenError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if !is_csv {
            continue;
        }

        let stem = path.file_stem().unwrap_or_default().to_string_lossy();
        let output = path.with_file_name(format!("{}{}.csv", stem, OUTPUT_SUFFIX));
        targets.push(ScreenTarget {
            input: path,
            output,
        });
    }

    targets.sort_by(|a, b| a.input.cmp(&b.input));

    if targets.is_empty() {
        return Err(ScreenError::Config(format!(
            "No CSV files to process in {}",
            dir.display()
        )));
    }

    Ok(targets)
}

/// The screening engine: one provider, reused sequentially across tables.
pub struct Screener {
    provider: Box<dyn LlmProvider>,
    options: BatchOptions,
    parser: Parser,
}

impl Screener {
    /// Create a screener with default batch options.
    pub fn new(provider: impl LlmProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
            options: BatchOptions::default(),
            parser: Parser::new(),
        }
    }

    /// Set the batch options.
    pub fn with_options(mut self, options: BatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a custom parser configuration.
    pub fn with_parser_config(mut self, config: ParserConfig) -> Self {
        self.parser = Parser::with_config(config);
        self
    }

    /// The configured batch options.
    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Screen one table and write its assessments.
    ///
    /// Returns `Ok(None)` when the table has no data rows; the caller
    /// reports the skip and moves on. No output file is written in that
    /// case.
    pub fn screen_file(
        &self,
        target: &ScreenTarget,
        progress: &mut dyn FnMut(Progress),
    ) -> Result<Option<ScreenReport>> {
        let (table, source) = self.parser.parse_file(&target.input)?;

        if table.is_empty() {
            return Ok(None);
        }

        let (start, end) =
            batch::resolve_range(self.options.start, self.options.end, table.row_count());
        let assessments = batch::assess_rows(&table, self.provider.as_ref(), &self.options, progress)?;
        report::write_assessments(&target.output, &assessments)?;

        Ok(Some(ScreenReport {
            source,
            start,
            end,
            rows_processed: assessments.len(),
            output: target.output.clone(),
        }))
    }
}
