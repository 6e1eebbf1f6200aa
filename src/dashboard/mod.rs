//! Dashboard module - selections, chart payloads and tab views

mod chart;
mod selection;
mod views;

pub use chart::{ChartKind, ChartSeries, ChartSpec, DatasetInfo};
pub use selection::{Dimension, NumericColumn, RelationKind, Tab};
pub use views::{Dashboard, DashboardView, TabView};
