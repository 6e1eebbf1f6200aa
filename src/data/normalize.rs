//! Dataset Normalizer Module
//! Strips currency formatting from Amount, parses dates, derives Year/Month.

use polars::prelude::*;
use thiserror::Error;

use super::table::{COL_AMOUNT, COL_BOXES, COL_DATE, COL_MONTH, COL_YEAR, REQUIRED_COLUMNS};

/// Input date format, e.g. `04-Jan-22`.
pub const DATE_FORMAT: &str = "%d-%b-%y";

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("missing required column: {0}")]
    MissingColumn(String),
    #[error("{0} Amount value(s) did not parse as $#,### currency")]
    MalformedAmount(usize),
    #[error("dataset contains a negative Amount")]
    NegativeAmount,
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// One-shot cleanup of the raw CSV frame into the normalized table schema.
pub struct DataNormalizer;

impl DataNormalizer {
    /// Normalize a raw frame:
    /// - Amount: strip `$`, `,` and whitespace, cast to Int64. Any cell that
    ///   fails to parse, and any negative value, aborts the load.
    /// - Date: parse with `DATE_FORMAT`; unparsable cells become null.
    /// - Year/Month: derived from Date; null dates propagate as null.
    pub fn normalize(df: DataFrame) -> Result<DataFrame, NormalizeError> {
        for required in REQUIRED_COLUMNS {
            if df.column(required).is_err() {
                return Err(NormalizeError::MissingColumn(required.to_string()));
            }
        }

        let parse_dates = StrptimeOptions {
            format: Some(DATE_FORMAT.into()),
            strict: false,
            exact: true,
            cache: true,
        };

        let df = df
            .lazy()
            .with_columns([
                col(COL_AMOUNT)
                    .cast(DataType::String)
                    .str()
                    .replace_all(lit(r"[\$,\s]"), lit(""), false)
                    .cast(DataType::Int64),
                col(COL_DATE).cast(DataType::String).str().to_date(parse_dates),
                col(COL_BOXES).cast(DataType::Int64),
            ])
            .with_columns([
                col(COL_DATE).dt().year().cast(DataType::Int32).alias(COL_YEAR),
                col(COL_DATE).dt().month().cast(DataType::Int32).alias(COL_MONTH),
            ])
            .collect()?;

        let amount = df.column(COL_AMOUNT)?;
        let malformed = amount.null_count();
        if malformed > 0 {
            return Err(NormalizeError::MalformedAmount(malformed));
        }
        if amount.i64()?.min().is_some_and(|min| min < 0) {
            return Err(NormalizeError::NegativeAmount);
        }

        let null_dates = df.column(COL_DATE)?.null_count();
        if null_dates > 0 {
            log::warn!("{null_dates} row(s) carry an unparsable Date; Year/Month left null");
        }

        Ok(df)
    }
}
