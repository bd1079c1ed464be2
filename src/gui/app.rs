//! Bench Chart Main Application
//! Main window with toolbar and chart viewer.

use crate::charts::{BarChartLayout, StaticChartRenderer, DEFAULT_SIZE};
use crate::gui::{ChartViewer, Toolbar, ToolbarAction};
use egui::TopBottomPanel;

const DEFAULT_FILE_NAME: &str = "benchmark_training_time.png";

/// Main application window.
pub struct BenchChartApp {
    toolbar: Toolbar,
    chart_viewer: ChartViewer,
}

impl BenchChartApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, layout: BarChartLayout) -> Self {
        Self {
            toolbar: Toolbar::new(),
            chart_viewer: ChartViewer::new(layout),
        }
    }

    /// Handle figure save - ask for a path, then render to it
    fn handle_save_figure(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .add_filter("SVG Image", &["svg"])
            .set_file_name(DEFAULT_FILE_NAME)
            .save_file()
        else {
            return; // User cancelled
        };

        let result = StaticChartRenderer::save(&self.chart_viewer.layout, &path, DEFAULT_SIZE);
        self.toolbar.report_save(&path, &result);
    }
}

impl eframe::App for BenchChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel - Toolbar
        TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            match self.toolbar.show(ui) {
                ToolbarAction::SaveFigure => self.handle_save_figure(),
                ToolbarAction::None => {}
            }
            ui.add_space(4.0);
        });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
