//! Dashboard Views Module
//! Wires tab and dropdown selections to the aggregation engine and builds
//! the chart payloads each selection renders to.

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use serde::Serialize;

use crate::data::{SalesTable, COL_AMOUNT, COL_MONTH};
use crate::insight;
use crate::stats::{Aggregator, GroupTotal};

use super::chart::{ChartKind, ChartSeries, ChartSpec, DatasetInfo};
use super::selection::{Dimension, NumericColumn, RelationKind, Tab};

const DATASET_SOURCE: &str = "Kaggle";

const DATASET_DESCRIPTION: &str = "This dataset contains detailed records of chocolate sales, \
    including product details, sales quantities, revenue, and customer segments. It is designed \
    for sales forecasting, trend analysis, and business intelligence, helping businesses \
    optimize pricing strategies, inventory management, and customer targeting.";

const COLLECTION_NOTES: [&str; 3] = [
    "Data was aggregated from chocolate retailers and online marketplaces.",
    "Only confirmed transactions were included to ensure accuracy.",
    "Revenue values reflect final prices after applying discounts, if any.",
];

const PREVIEW_ROWS: usize = 5;

/// Rendered content of one tab.
#[derive(Debug, Serialize)]
#[serde(tag = "tab", rename_all = "snake_case")]
pub enum TabView {
    DataInfo {
        info: DatasetInfo,
    },
    Distributions {
        bars: Vec<ChartSpec>,
        histograms: Vec<ChartSpec>,
    },
    Relations {
        charts: Vec<ChartSpec>,
    },
    BoxPlot {
        charts: Vec<ChartSpec>,
    },
}

/// All four tabs, materialized.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub tabs: Vec<TabView>,
}

/// The dashboard engine: one immutable table in, one chart payload out per
/// selection. Every handler is synchronous and side-effect-free.
pub struct Dashboard {
    table: SalesTable,
}

impl Dashboard {
    pub fn new(table: SalesTable) -> Self {
        Self { table }
    }

    /// Data Info tab payload.
    pub fn data_info(&self) -> DatasetInfo {
        let column_names = self.table.column_names();
        DatasetInfo {
            source: DATASET_SOURCE.to_string(),
            rows: self.table.height(),
            columns: column_names.len(),
            column_names,
            description: DATASET_DESCRIPTION.to_string(),
            collection_notes: COLLECTION_NOTES.iter().map(|s| s.to_string()).collect(),
            preview: self.table.preview(PREVIEW_ROWS),
        }
    }

    /// Distributions tab: total Amount per group of the selected dimension.
    pub fn bar_chart(&self, dimension: Dimension) -> Result<ChartSpec> {
        let totals = Aggregator::group_totals(&self.table, dimension.column())
            .with_context(|| format!("aggregating {}", dimension.as_str()))?;
        let caption = Aggregator::top_by_group(&totals)
            .map(|top| insight::top_dimension(dimension.as_str(), top))
            .unwrap_or_default();

        Ok(ChartSpec {
            kind: ChartKind::Bar,
            title: format!("Total Sales by {}", dimension.as_str()),
            x_field: dimension.column().to_string(),
            y_field: COL_AMOUNT.to_string(),
            series: ChartSeries::Categories(totals),
            summary: None,
            caption,
        })
    }

    /// Distributions tab: raw values of the selected numeric column, with
    /// the fixed mean-of-column caption.
    pub fn histogram(&self, column: NumericColumn) -> Result<ChartSpec> {
        let values = self
            .table
            .numeric_values(column.column())
            .with_context(|| format!("reading {}", column.as_str()))?;
        let caption = match Aggregator::mean(&values) {
            Some(mean) => match column {
                NumericColumn::Amount => insight::average_amount(mean),
                NumericColumn::BoxesShipped => insight::average_boxes(mean),
            },
            None => insight::outliers(column.as_str(), None),
        };

        Ok(ChartSpec {
            kind: ChartKind::Histogram,
            title: format!("Distribution of {}", column.as_str()),
            x_field: column.column().to_string(),
            y_field: "Count".to_string(),
            series: ChartSeries::Values(values),
            summary: None,
            caption,
        })
    }

    /// Relations tab: one of the four relation charts.
    pub fn relation(&self, kind: RelationKind) -> Result<ChartSpec> {
        match kind {
            RelationKind::Country => self.relation_bar(kind, Dimension::Country, insight::top_country),
            RelationKind::Product => self.relation_bar(kind, Dimension::Product, insight::top_product),
            RelationKind::Salesperson => {
                let mut spec =
                    self.relation_bar(kind, Dimension::SalesPerson, insight::top_salesperson)?;
                // salesperson bars render highest-first
                if let ChartSeries::Categories(totals) = &mut spec.series {
                    totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.label.cmp(&b.label)));
                }
                Ok(spec)
            }
            RelationKind::Monthly => {
                let totals = Aggregator::monthly_totals(&self.table)
                    .context("aggregating monthly totals")?;
                let caption = Aggregator::peak_month(&totals)
                    .map(|peak| insight::peak_month(&peak))
                    .unwrap_or_default();

                Ok(ChartSpec {
                    kind: ChartKind::Line,
                    title: kind.title().to_string(),
                    x_field: COL_MONTH.to_string(),
                    y_field: COL_AMOUNT.to_string(),
                    series: ChartSeries::Monthly(totals),
                    summary: None,
                    caption,
                })
            }
        }
    }

    fn relation_bar(
        &self,
        kind: RelationKind,
        dimension: Dimension,
        caption_for: fn(&GroupTotal) -> String,
    ) -> Result<ChartSpec> {
        let totals = Aggregator::group_totals(&self.table, dimension.column())
            .with_context(|| format!("aggregating {}", dimension.as_str()))?;
        let caption = Aggregator::top_by_group(&totals)
            .map(caption_for)
            .unwrap_or_default();

        Ok(ChartSpec {
            kind: ChartKind::Bar,
            title: kind.title().to_string(),
            x_field: dimension.column().to_string(),
            y_field: COL_AMOUNT.to_string(),
            series: ChartSeries::Categories(totals),
            summary: None,
            caption,
        })
    }

    /// Box Plot tab: raw values plus whisker summary and outlier caption.
    /// A column with no numeric values yields an empty series and the
    /// sentinel caption, never an error.
    pub fn box_plot(&self, column: NumericColumn) -> Result<ChartSpec> {
        let values = self
            .table
            .numeric_values(column.column())
            .with_context(|| format!("reading {}", column.as_str()))?;
        let bounds = Aggregator::outlier_bounds(&values);
        let caption = insight::outliers(column.as_str(), bounds.as_ref());

        Ok(ChartSpec {
            kind: ChartKind::BoxPlot,
            title: format!("Box Plot of {}", column.as_str()),
            x_field: column.column().to_string(),
            y_field: column.column().to_string(),
            summary: Aggregator::box_summary(&values),
            series: ChartSeries::Values(values),
            caption,
        })
    }

    /// Dispatch a raw dropdown value the way the UI collaborator sends it.
    pub fn select(&self, tab: Tab, value: &str) -> Result<ChartSpec> {
        match tab {
            Tab::DataInfo => bail!("the data_info tab has no chart selections"),
            Tab::Distributions => {
                if let Some(dimension) = Dimension::parse(value) {
                    self.bar_chart(dimension)
                } else if let Some(column) = NumericColumn::parse(value) {
                    self.histogram(column)
                } else {
                    bail!("unknown distributions selection: {value:?}")
                }
            }
            Tab::Relations => match RelationKind::parse(value) {
                Some(kind) => self.relation(kind),
                None => bail!("unknown relation chart: {value:?}"),
            },
            Tab::BoxPlot => match NumericColumn::parse(value) {
                Some(column) => self.box_plot(column),
                None => bail!("unknown box plot column: {value:?}"),
            },
        }
    }

    /// Materialize one tab.
    pub fn render_tab(&self, tab: Tab) -> Result<TabView> {
        match tab {
            Tab::DataInfo => Ok(TabView::DataInfo {
                info: self.data_info(),
            }),
            Tab::Distributions => Ok(TabView::Distributions {
                bars: Dimension::ALL
                    .iter()
                    .map(|&dimension| self.bar_chart(dimension))
                    .collect::<Result<_>>()?,
                histograms: NumericColumn::ALL
                    .iter()
                    .map(|&column| self.histogram(column))
                    .collect::<Result<_>>()?,
            }),
            Tab::Relations => Ok(TabView::Relations {
                charts: RelationKind::ALL
                    .iter()
                    .map(|&kind| self.relation(kind))
                    .collect::<Result<_>>()?,
            }),
            Tab::BoxPlot => Ok(TabView::BoxPlot {
                charts: NumericColumn::ALL
                    .iter()
                    .map(|&column| self.box_plot(column))
                    .collect::<Result<_>>()?,
            }),
        }
    }

    /// Materialize every tab. The payloads are independent, so they build
    /// in parallel.
    pub fn render_all(&self) -> Result<DashboardView> {
        let tabs = Tab::ALL
            .par_iter()
            .map(|&tab| self.render_tab(tab))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("rendered {} tabs", tabs.len());

        Ok(DashboardView { tabs })
    }
}
