//! CSV Data Loader Module
//! Reads the raw sales CSV into a DataFrame using Polars.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("dataset file not found: {0}")]
    FileNotFound(String),
    #[error("failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("dataset contains no rows")]
    NoData,
}

/// Handles CSV file loading with Polars. Runs exactly once per process; the
/// result flows into `DataNormalizer` and then never changes.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file into a raw (un-normalized) DataFrame.
    pub fn load_csv(path: &Path) -> Result<DataFrame, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        // Lazy scan, collected once
        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10_000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        if df.height() == 0 {
            return Err(LoadError::NoData);
        }

        log::debug!(
            "read {} rows, {} columns from {}",
            df.height(),
            df.width(),
            path.display()
        );

        Ok(df)
    }
}
