//! Presentation helpers: chart series and schedule export

mod chart;
mod export;

pub use chart::{ChartData, ChartSeries, BALANCE_LABEL, INTEREST_LABEL, PRINCIPAL_LABEL};
pub use export::{render_table, to_json, write_csv};
