//! Reads the claim export as CSV rows.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{info, instrument};

use crate::error::{ReconError, Result};
use crate::types::RawRow;

/// How the export is read
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceOptions {
    /// Skip the first row. Off by default: every row, including a header, is treated as data.
    pub has_headers: bool,
}

/// Read every record of `path` into memory
#[instrument(skip(options), fields(path = %path.display()))]
pub fn read_rows(path: &Path, options: SourceOptions) -> Result<Vec<RawRow>> {
    let file = File::open(path).map_err(|e| ReconError::io(path, e))?;
    let rows = read_rows_from(file, options).map_err(|source| ReconError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    info!("📥 Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read every record from any reader. Records must all have the same number of fields.
pub fn read_rows_from<R: Read>(reader: R, options: SourceOptions) -> csv::Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(options.has_headers)
        .from_reader(reader);

    rdr.records()
        .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
        .collect()
}
