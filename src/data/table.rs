//! Sales Table Module
//! The immutable normalized dataset shared read-only by every operation.

use polars::prelude::*;

pub const COL_DATE: &str = "Date";
pub const COL_PRODUCT: &str = "Product";
pub const COL_COUNTRY: &str = "Country";
pub const COL_SALES_PERSON: &str = "Sales Person";
pub const COL_AMOUNT: &str = "Amount";
pub const COL_BOXES: &str = "Boxes Shipped";
pub const COL_YEAR: &str = "Year";
pub const COL_MONTH: &str = "Month";

/// Columns the input CSV must carry before normalization.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_DATE,
    COL_PRODUCT,
    COL_COUNTRY,
    COL_SALES_PERSON,
    COL_AMOUNT,
    COL_BOXES,
];

/// Normalized sales dataset. Built once at startup, then passed by shared
/// reference to every aggregation; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SalesTable {
    df: DataFrame,
}

impl SalesTable {
    /// Wrap a normalized DataFrame. Callers go through
    /// `DataNormalizer::normalize` first; the wrapper assumes the schema
    /// invariants established there.
    pub fn new(df: DataFrame) -> Self {
        Self { df }
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Column names in frame order (original columns plus derived Year/Month).
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Non-null values of a column as f64, for mean/quantile work.
    pub fn numeric_values(&self, column: &str) -> PolarsResult<Vec<f64>> {
        let values = self.df.column(column)?.cast(&DataType::Float64)?;
        Ok(values
            .f64()?
            .into_iter()
            .flatten()
            .filter(|v| !v.is_nan())
            .collect())
    }

    /// First `rows` records rendered as display strings, null cells empty.
    pub fn preview(&self, rows: usize) -> Vec<Vec<String>> {
        let head = self.df.head(Some(rows));
        (0..head.height())
            .map(|i| {
                head.get_columns()
                    .iter()
                    .map(|column| match column.get(i) {
                        Ok(value) if !value.is_null() => {
                            value.to_string().trim_matches('"').to_string()
                        }
                        _ => String::new(),
                    })
                    .collect()
            })
            .collect()
    }
}
