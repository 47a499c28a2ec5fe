//! Chart-ready series for stacked balance/principal/interest plots

use serde::{Deserialize, Serialize};

use crate::schedule::{AmortizationSchedule, Period};

pub const BALANCE_LABEL: &str = "Balance";
pub const PRINCIPAL_LABEL: &str = "Principal";
pub const INTEREST_LABEL: &str = "Interest";

/// One named data series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<f64>,
}

/// Payment dates on a shared axis with one series per plotted quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartSeries>,
}

impl ChartData {
    pub fn from_periods(periods: &[Period]) -> Self {
        let series = |label: &str, value: fn(&Period) -> f64| ChartSeries {
            label: label.to_string(),
            data: periods.iter().map(value).collect(),
        };

        Self {
            labels: periods.iter().map(Period::display_date).collect(),
            datasets: vec![
                series(BALANCE_LABEL, |p| p.closing_balance),
                series(PRINCIPAL_LABEL, |p| p.principal_payment),
                series(INTEREST_LABEL, |p| p.interest),
            ],
        }
    }

    pub fn series(&self, label: &str) -> Option<&ChartSeries> {
        self.datasets.iter().find(|s| s.label == label)
    }
}

impl AmortizationSchedule {
    pub fn chart_data(&self) -> ChartData {
        ChartData::from_periods(&self.periods)
    }
}
