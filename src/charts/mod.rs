//! Charts module - Chart layout and rendering

mod layout;
mod plotter;
mod renderer;

pub use layout::{BarChartLayout, ChartColor};
pub use plotter::ChartPlotter;
pub use renderer::{StaticChartRenderer, DEFAULT_SIZE};
