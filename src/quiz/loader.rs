//! CSV quiz file loading.
//!
//! Each row is `question,answer`. There is no header row: the first row is
//! a question like any other. Rows with any other number of fields are
//! skipped and never reach the record list.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::QuizError;
use crate::models::QuizRecord;

/// Parse quiz records from any CSV reader.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<QuizRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row?;
        if row.len() != 2 {
            debug!(row = index + 1, fields = row.len(), "skipping malformed quiz row");
            continue;
        }
        records.push(QuizRecord::new(&row[0], &row[1]));
    }
    Ok(records)
}

/// Open and parse a quiz file.
pub fn load_records(path: &Path) -> Result<Vec<QuizRecord>, QuizError> {
    let file = File::open(path).map_err(|source| QuizError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(file).map_err(|source| QuizError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = records.len(), "loaded quiz records");
    Ok(records)
}
