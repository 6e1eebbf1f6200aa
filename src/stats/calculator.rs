//! Aggregation Engine Module
//! Pure group-by sums, means, quantiles and IQR outlier bounds over the table.

use polars::prelude::*;
use serde::Serialize;

use crate::data::{SalesTable, COL_AMOUNT, COL_MONTH};

/// Multiplier for the standard IQR outlier fences.
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Summed Amount for one group of a categorical dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal {
    pub label: String,
    pub total: i64,
}

/// Summed Amount for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthTotal {
    pub month: i32,
    pub total: i64,
}

/// IQR fences for a numeric column, plus the count of values outside them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutlierBounds {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
    pub outliers: usize,
}

/// Five-number summary carried in box-plot payloads. Whiskers are the
/// extreme values still inside the IQR fences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxSummary {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
}

/// Deterministic, side-effect-free aggregations over a `SalesTable`.
pub struct Aggregator;

impl Aggregator {
    /// Summed Amount per group, ordered lexicographically by group label.
    pub fn group_totals(table: &SalesTable, dimension: &str) -> PolarsResult<Vec<GroupTotal>> {
        let df = table
            .dataframe()
            .clone()
            .lazy()
            .filter(col(dimension).is_not_null())
            .group_by([col(dimension)])
            .agg([col(COL_AMOUNT).sum().alias("total")])
            .sort([dimension], SortMultipleOptions::default())
            .collect()?;

        let labels = df.column(dimension)?.str()?;
        let totals = df.column("total")?.i64()?;

        Ok(labels
            .into_iter()
            .zip(totals.into_iter())
            .filter_map(|(label, total)| {
                Some(GroupTotal {
                    label: label?.to_string(),
                    total: total?,
                })
            })
            .collect())
    }

    /// The group with the maximum summed Amount. Totals come in
    /// lexicographic label order, and the strictly-greater comparison keeps
    /// the first entry, so equal sums resolve to the smallest label.
    pub fn top_by_group(totals: &[GroupTotal]) -> Option<&GroupTotal> {
        let mut top: Option<&GroupTotal> = None;
        for entry in totals {
            if top.map_or(true, |current| entry.total > current.total) {
                top = Some(entry);
            }
        }
        top
    }

    /// Summed Amount per calendar month, ordered by month number. Rows
    /// without a parsed date carry no month and are excluded.
    pub fn monthly_totals(table: &SalesTable) -> PolarsResult<Vec<MonthTotal>> {
        let df = table
            .dataframe()
            .clone()
            .lazy()
            .filter(col(COL_MONTH).is_not_null())
            .group_by([col(COL_MONTH)])
            .agg([col(COL_AMOUNT).sum().alias("total")])
            .sort([COL_MONTH], SortMultipleOptions::default())
            .collect()?;

        let months = df.column(COL_MONTH)?.i32()?;
        let totals = df.column("total")?.i64()?;

        Ok(months
            .into_iter()
            .zip(totals.into_iter())
            .filter_map(|(month, total)| {
                Some(MonthTotal {
                    month: month?,
                    total: total?,
                })
            })
            .collect())
    }

    /// The month with the maximum summed Amount; the lowest month number
    /// wins ties.
    pub fn peak_month(totals: &[MonthTotal]) -> Option<MonthTotal> {
        let mut peak: Option<MonthTotal> = None;
        for entry in totals {
            if peak.map_or(true, |current| entry.total > current.total) {
                peak = Some(*entry);
            }
        }
        peak
    }

    /// Arithmetic mean; `None` for an empty slice.
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Quantile by linear interpolation over sorted values (matches the
    /// NumPy/pandas default).
    fn quantile(sorted: &[f64], q: f64) -> f64 {
        let n = sorted.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted[0];
        }

        let rank = q * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted[lower]
        } else {
            sorted[lower] * (1.0 - frac) + sorted[upper] * frac
        }
    }

    /// IQR outlier fences and the count of values outside them. `None` when
    /// the column has no numeric values.
    pub fn outlier_bounds(values: &[f64]) -> Option<OutlierBounds> {
        if values.is_empty() {
            return None;
        }

        let sorted = Self::sorted(values);
        let q1 = Self::quantile(&sorted, 0.25);
        let q3 = Self::quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let lower = q1 - IQR_MULTIPLIER * iqr;
        let upper = q3 + IQR_MULTIPLIER * iqr;
        let outliers = sorted.iter().filter(|&&v| v < lower || v > upper).count();

        Some(OutlierBounds {
            q1,
            q3,
            iqr,
            lower,
            upper,
            outliers,
        })
    }

    /// Box-plot spread for a numeric column. `None` when the column has no
    /// numeric values.
    pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
        if values.is_empty() {
            return None;
        }

        let sorted = Self::sorted(values);
        let q1 = Self::quantile(&sorted, 0.25);
        let median = Self::quantile(&sorted, 0.5);
        let q3 = Self::quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let lower_whisker = sorted
            .iter()
            .copied()
            .find(|&v| v >= q1 - IQR_MULTIPLIER * iqr)
            .unwrap_or(q1);
        let upper_whisker = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= q3 + IQR_MULTIPLIER * iqr)
            .unwrap_or(q3);

        Some(BoxSummary {
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
        })
    }

    fn sorted(values: &[f64]) -> Vec<f64> {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        sorted
    }
}
