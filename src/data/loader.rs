//! CSV Data Loader Module
//! Reads employee CSV files with Polars, validates the required columns and
//! concatenates every file into one dataset.

use polars::prelude::*;
use std::collections::HashSet;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info, warn};

use super::{Dataset, Row};
use crate::error::{AnalyzerError, Result};

/// Columns every input file must provide.
pub const REQUIRED_COLUMNS: [&str; 2] = ["position", "performance"];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Loads and validates CSV input files.
pub struct DataLoader;

impl DataLoader {
    /// Load every file in order and concatenate their rows.
    ///
    /// Files with a valid header but no data rows are skipped with a warning.
    /// Fails if no file contributed any row.
    pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<Dataset> {
        let mut dataset = Dataset::new();

        for path in paths {
            let path = path.as_ref();
            let rows = Self::load_csv(path)?;
            if rows.is_empty() {
                warn!(path = %path.display(), "file contains no data rows, skipping");
                continue;
            }
            debug!(path = %path.display(), rows = rows.len(), "file loaded");
            dataset.extend(rows);
        }

        if dataset.is_empty() {
            return Err(AnalyzerError::InvalidInput(
                "no data could be loaded from the given files".to_string(),
            ));
        }

        info!(rows = dataset.len(), files = paths.len(), "dataset loaded");
        Ok(dataset)
    }

    /// Load a single CSV file into rows.
    pub fn load_csv(path: &Path) -> Result<Vec<Row>> {
        let display = path.display().to_string();

        if !path.exists() {
            return Err(AnalyzerError::NotFound(display));
        }
        if !path.is_file() {
            return Err(AnalyzerError::InvalidInput(format!(
                "path is not a file: {display}"
            )));
        }

        let mut bytes = std::fs::read(path).map_err(|e| {
            AnalyzerError::InvalidInput(format!("failed to read file {display}: {e}"))
        })?;

        if std::str::from_utf8(&bytes).is_err() {
            return Err(AnalyzerError::InvalidInput(format!(
                "encoding error in file {display}: make sure the file is UTF-8 encoded"
            )));
        }
        if bytes.starts_with(UTF8_BOM) {
            bytes.drain(..UTF8_BOM.len());
        }
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(AnalyzerError::InvalidInput(format!(
                "file is empty or not a valid CSV: {display}"
            )));
        }

        let df = Self::parse_csv(bytes).map_err(|e| {
            AnalyzerError::InvalidInput(format!("failed to read file {display}: {e}"))
        })?;

        Self::check_columns(&df, &display)?;

        Self::to_rows(&df).map_err(|e| {
            AnalyzerError::InvalidInput(format!("failed to read file {display}: {e}"))
        })
    }

    /// Parse CSV bytes with every column kept as a string. Cells beyond the
    /// header width are dropped instead of failing the file.
    fn parse_csv(bytes: Vec<u8>) -> PolarsResult<DataFrame> {
        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .with_parse_options(CsvParseOptions::default().with_truncate_ragged_lines(true))
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()
    }

    fn check_columns(df: &DataFrame, display: &str) -> Result<()> {
        let present: HashSet<&str> = df
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !present.contains(column))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AnalyzerError::InvalidInput(format!(
                "file {display} is missing required columns: {}",
                missing.join(", ")
            )))
        }
    }

    /// Turn the string frame into one map per record. Blank lines come back
    /// from the reader as all-null records and are dropped here.
    fn to_rows(df: &DataFrame) -> PolarsResult<Vec<Row>> {
        let mut rows: Vec<Row> = (0..df.height())
            .map(|_| Row::with_capacity(df.width()))
            .collect();

        for column in df.get_columns() {
            let name = column.name().to_string();
            let values = column.cast(&DataType::String)?;
            let values = values.str()?;

            for (row, value) in rows.iter_mut().zip(values.into_iter()) {
                row.insert(name.clone(), value.unwrap_or_default().to_string());
            }
        }

        rows.retain(|row| row.values().any(|value| !value.is_empty()));
        Ok(rows)
    }
}
