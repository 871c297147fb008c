//! ASCII time-series chart
//!
//! Overlays several per-step series on one character grid, with a labelled
//! y axis, step ticks on the x axis and a legend.

use pvsizer_algo::SizingResult;
use pvsizer_core::KilowattHours;

/// Marker drawn where two series land on the same cell
pub const OVERLAP_SYMBOL: char = '@';

/// One line of the chart
#[derive(Clone, Debug)]
pub struct ChartSeries {
    pub label: String,
    pub symbol: char,
    pub values: Vec<f64>,
}

/// Multi-series time chart renderer
#[derive(Clone, Debug)]
pub struct TimeSeriesChart {
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ChartSeries>,
    /// Target plot width in characters
    pub width: usize,
    /// Plot height in rows
    pub height: usize,
}

impl Default for TimeSeriesChart {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSeriesChart {
    pub fn new() -> Self {
        Self {
            title: None,
            x_label: String::new(),
            y_label: String::new(),
            series: Vec::new(),
            width: 72,
            height: 16,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn add_series(mut self, label: impl Into<String>, symbol: char, values: Vec<f64>) -> Self {
        self.series.push(ChartSeries {
            label: label.into(),
            symbol,
            values,
        });
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    fn steps(&self) -> usize {
        self.series.iter().map(|s| s.values.len()).max().unwrap_or(0)
    }

    /// Render the chart as lines of text
    pub fn render_lines(&self) -> Vec<String> {
        let steps = self.steps();
        if steps == 0 {
            return vec!["(empty chart)".to_string()];
        }

        let height = self.height.max(2);
        let col = (self.width / steps).max(1);
        let plot_width = steps * col;

        let max_val = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        let max_val = if max_val > 0.0 { max_val } else { 1.0 };

        let mut grid = vec![vec![' '; plot_width]; height];
        for series in &self.series {
            for (t, &value) in series.values.iter().enumerate() {
                if !value.is_finite() {
                    continue;
                }
                let level = ((value.max(0.0) / max_val) * (height - 1) as f64).round() as usize;
                let row = height - 1 - level.min(height - 1);
                let cell = &mut grid[row][t * col + col / 2];
                *cell = if *cell == ' ' || *cell == series.symbol {
                    series.symbol
                } else {
                    OVERLAP_SYMBOL
                };
            }
        }

        let axis_label = |row: usize| max_val * (height - 1 - row) as f64 / (height - 1) as f64;
        let label_width = format!("{max_val:.0}").len();

        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
            lines.push(String::new());
        }
        if !self.y_label.is_empty() {
            lines.push(self.y_label.clone());
        }

        for (row, cells) in grid.iter().enumerate() {
            let tick = if row == 0 || row == height - 1 || row == (height - 1) / 2 {
                format!("{:.0}", axis_label(row))
            } else {
                String::new()
            };
            let body: String = cells.iter().collect();
            lines.push(format!("{tick:>label_width$} │{}", body.trim_end()));
        }
        lines.push(format!("{} └{}", " ".repeat(label_width), "─".repeat(plot_width)));

        // Step numbers, skipping any that would touch the previous one
        let mut ticks = vec![' '; plot_width];
        let mut next_free = 0;
        for t in 0..steps {
            let text = t.to_string();
            let start = t * col + col / 2;
            if start < next_free || start + text.len() > plot_width {
                continue;
            }
            for (i, ch) in text.chars().enumerate() {
                ticks[start + i] = ch;
            }
            next_free = start + text.len() + 1;
        }
        let ticks: String = ticks.into_iter().collect();
        lines.push(format!("{}  {}", " ".repeat(label_width), ticks.trim_end()));

        if !self.x_label.is_empty() {
            let pad = (plot_width.saturating_sub(self.x_label.len())) / 2;
            lines.push(format!(
                "{}  {}{}",
                " ".repeat(label_width),
                " ".repeat(pad),
                self.x_label
            ));
        }

        lines.push(String::new());
        for series in &self.series {
            lines.push(format!("  {} {}", series.symbol, series.label));
        }
        lines
    }

    pub fn render(&self) -> String {
        let mut out = self.render_lines().join("\n");
        out.push('\n');
        out
    }
}

/// Load, PV production and battery state of charge over the horizon.
pub fn energy_flow_chart(result: &SizingResult, width: usize, height: usize) -> TimeSeriesChart {
    let values =
        |series: &[KilowattHours]| -> Vec<f64> { series.iter().map(|v| v.value()).collect() };
    TimeSeriesChart::new()
        .with_title("Energy Flow in the System")
        .x_label("Time (hours)")
        .y_label("Energy (kWh)")
        .width(width)
        .height(height)
        .add_series("Load", '#', values(&result.load))
        .add_series("PV Production", '+', values(&result.pv_production))
        .add_series("Battery SOC", 'o', values(&result.battery_soc))
}
