//! Reporting for sizing results: console lines, an ASCII energy-flow chart and
//! CSV / JSON export of the per-step series.

pub mod chart;
pub mod export;
pub mod report;

pub use chart::{energy_flow_chart, ChartSeries, TimeSeriesChart};
pub use export::{write_json, write_series_csv, SeriesRow};
pub use report::{capacity_lines, render_report};
