//! Chart Layout Module
//! Display-independent description of the benchmark bar chart.
//!
//! Both the interactive plot and the static renderer draw from a
//! `BarChartLayout`, so the two always agree on positions and text.

use crate::data::BenchmarkSeries;

pub const CHART_TITLE: &str = "Benchmarking Training Time";
pub const X_AXIS_LABEL: &str = "Processing Types";
pub const Y_AXIS_LABEL: &str = "Time (s)";

/// Horizontal padding between the outer bars and the plot edge (category units)
const X_MARGIN: f64 = 0.2;
/// Vertical headroom above the tallest error bar, leaves room for annotations
const Y_HEADROOM: f64 = 1.08;

/// Plain RGB color shared by both drawing backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ChartColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const SKY_BLUE: ChartColor = ChartColor::rgb(135, 206, 235);
pub const BLACK: ChartColor = ChartColor::rgb(0, 0, 0);

/// Visual constants for bars, error bars and annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Bar width in category units
    pub bar_width: f64,
    pub bar_color: ChartColor,
    pub bar_alpha: f64,
    pub error_color: ChartColor,
    /// Total on-screen width of an error bar cap
    pub cap_width_px: u32,
    /// Gap between bar top and annotation baseline
    pub annotation_offset_px: i32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_width: 0.8,
            bar_color: SKY_BLUE,
            bar_alpha: 0.75,
            error_color: BLACK,
            cap_width_px: 10,
            annotation_offset_px: 3,
        }
    }
}

/// Geometry and text for one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub label: String,
    /// Bar center on the x axis
    pub position: f64,
    pub height: f64,
    pub error_low: f64,
    pub error_high: f64,
    /// Text drawn above the bar
    pub annotation: String,
}

/// Everything needed to draw the chart, in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartLayout {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<BarGeometry>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub style: ChartStyle,
}

impl BarChartLayout {
    /// Lay out one bar per record with the default style.
    pub fn from_series(series: &BenchmarkSeries) -> Self {
        Self::with_style(series, ChartStyle::default())
    }

    pub fn with_style(series: &BenchmarkSeries, style: ChartStyle) -> Self {
        let bars: Vec<BarGeometry> = series
            .records()
            .iter()
            .enumerate()
            .map(|(i, record)| BarGeometry {
                label: record.label.clone(),
                position: i as f64,
                height: record.mean,
                error_low: record.mean - record.stddev,
                error_high: record.mean + record.stddev,
                annotation: format_annotation(record.mean),
            })
            .collect();

        let x_range = Self::compute_x_range(bars.len(), style.bar_width);
        let y_range = Self::compute_y_range(&bars);

        Self {
            title: CHART_TITLE.to_string(),
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
            bars,
            x_range,
            y_range,
            style,
        }
    }

    fn compute_x_range(n: usize, bar_width: f64) -> (f64, f64) {
        if n == 0 {
            return (-0.5, 0.5);
        }
        let half = bar_width / 2.0 + X_MARGIN;
        (-half, (n - 1) as f64 + half)
    }

    fn compute_y_range(bars: &[BarGeometry]) -> (f64, f64) {
        let top = bars
            .iter()
            .map(|b| b.error_high.max(b.height))
            .fold(f64::NEG_INFINITY, f64::max);
        let bottom = bars
            .iter()
            .map(|b| b.error_low.min(b.height))
            .fold(0.0, f64::min);

        if !top.is_finite() || top <= 0.0 {
            return (bottom, 1.0);
        }
        (bottom, top * Y_HEADROOM)
    }

    /// Tick positions and labels, one per bar in input order.
    pub fn tick_labels(&self) -> Vec<(f64, String)> {
        self.bars
            .iter()
            .map(|b| (b.position, b.label.clone()))
            .collect()
    }

    /// Label of the bar centered on `value`, if any.
    pub fn label_at(&self, value: f64) -> Option<&str> {
        let idx = value.round();
        if (value - idx).abs() > 1e-6 || idx < 0.0 {
            return None;
        }
        self.bars.get(idx as usize).map(|b| b.label.as_str())
    }

    /// Left and right edges of a bar.
    pub fn bar_extent(&self, bar: &BarGeometry) -> (f64, f64) {
        let half = self.style.bar_width / 2.0;
        (bar.position - half, bar.position + half)
    }
}

/// Format a mean for display above its bar.
pub fn format_annotation(value: f64) -> String {
    format!("{:.2}", value)
}
