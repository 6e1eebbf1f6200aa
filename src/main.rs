//! salesdash - Sales CSV aggregation & dashboard insight engine
//!
//! Loads the sales dataset once, derives the dashboard aggregates and emits
//! the chart payloads (plus insight captions) as JSON for the rendering
//! collaborator.
//!
//! Usage: `salesdash [CSV_PATH] [TAB] [SELECTION]`
//!   - no tab: emit every tab
//!   - tab only: emit that tab
//!   - tab + selection: emit the single chart a dropdown choice renders to

mod dashboard;
mod data;
mod insight;
mod stats;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use dashboard::{Dashboard, Tab};
use data::{DataLoader, DataNormalizer, SalesTable};

const DEFAULT_DATASET: &str = "data/Chocolate_Sales.csv";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| DEFAULT_DATASET.to_string());
    let tab = args.next();
    let selection = args.next();

    log::info!("loading dataset from {path}");
    let raw = DataLoader::load_csv(Path::new(&path))?;
    let df = DataNormalizer::normalize(raw).context("normalizing dataset")?;
    let table = SalesTable::new(df);
    log::info!(
        "loaded {} rows, {} columns",
        table.height(),
        table.column_names().len()
    );

    let dashboard = Dashboard::new(table);

    match (tab, selection) {
        (None, _) => write_json(&dashboard.render_all()?),
        (Some(tab), selection) => {
            let tab = Tab::parse(&tab).with_context(|| {
                format!("unknown tab {tab:?} (expected data_info, distributions, relations or box_plot)")
            })?;
            match selection {
                None => write_json(&dashboard.render_tab(tab)?),
                Some(value) => {
                    let spec = dashboard.select(tab, &value)?;
                    if spec.series.is_empty() {
                        log::warn!("selection {value:?} produced an empty series");
                    }
                    write_json(&spec)
                }
            }
        }
    }
}

fn write_json<T: Serialize>(payload: &T) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, payload).context("writing dashboard payload")?;
    writeln!(out)?;
    Ok(())
}
