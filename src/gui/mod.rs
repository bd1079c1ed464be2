//! GUI module - User interface components

mod app;
mod chart_viewer;
mod toolbar;

pub use app::BenchChartApp;
pub use chart_viewer::ChartViewer;
pub use toolbar::{Toolbar, ToolbarAction};
