//! Chart Payload Module
//! The typed payloads handed to the black-box rendering collaborator: a
//! chart kind, the axis fields, one data series and an insight caption.

use serde::Serialize;

use crate::stats::{BoxSummary, GroupTotal, MonthTotal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Histogram,
    Line,
    BoxPlot,
}

/// Data series of a chart. Histograms and box plots carry the raw values;
/// binning and box geometry are the renderer's job.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ChartSeries {
    Categories(Vec<GroupTotal>),
    Values(Vec<f64>),
    Monthly(Vec<MonthTotal>),
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        match self {
            ChartSeries::Categories(points) => points.len(),
            ChartSeries::Values(values) => values.len(),
            ChartSeries::Monthly(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One renderable chart plus its caption.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_field: String,
    pub y_field: String,
    pub series: ChartSeries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<BoxSummary>,
    pub caption: String,
}

/// Payload of the Data Info tab: dataset shape, description and a preview.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub source: String,
    pub rows: usize,
    pub columns: usize,
    pub column_names: Vec<String>,
    pub description: String,
    pub collection_notes: Vec<String>,
    pub preview: Vec<Vec<String>>,
}
