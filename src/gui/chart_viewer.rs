//! Chart Viewer Widget
//! Central panel showing the chart title and the interactive plot.

use crate::charts::{BarChartLayout, ChartPlotter};
use egui::RichText;

const TITLE_SIZE: f32 = 20.0;

/// Displays one bar chart filling the available space.
pub struct ChartViewer {
    pub layout: BarChartLayout,
}

impl ChartViewer {
    pub fn new(layout: BarChartLayout) -> Self {
        Self { layout }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            ui.label(RichText::new(&self.layout.title).size(TITLE_SIZE).strong());
        });
        ui.add_space(8.0);

        ChartPlotter::draw_bar_chart(ui, &self.layout);
    }
}
