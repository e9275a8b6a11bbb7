//! Assessment output serialization.

use std::fs::File;
use std::path::Path;

use crate::batch::Assessment;
use crate::error::{Result, ScreenError};

/// Write assessments to a CSV file with a header row.
///
/// Columns: `index,title,genre,updated,llm_decision`. An absent `updated`
/// value serializes to an empty cell. An empty slice still produces the
/// header row.
pub fn write_assessments(path: impl AsRef<Path>, assessments: &[Assessment]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ScreenError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = csv::Writer::from_writer(file);
    if assessments.is_empty() {
        writer.write_record(["index", "title", "genre", "updated", "llm_decision"])?;
    }
    for assessment in assessments {
        writer.serialize(assessment)?;
    }
    writer.flush().map_err(|e| ScreenError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
