//! Stats module - aggregation engine

mod calculator;

pub use calculator::{Aggregator, BoxSummary, GroupTotal, MonthTotal, OutlierBounds};
