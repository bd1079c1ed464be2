//! Toolbar Widget
//! Top strip with the save action and a status line.

use egui::{Color32, RichText};
use std::path::Path;
use tracing::{error, info};

/// Action requested by the user this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    None,
    SaveFigure,
}

pub struct Toolbar {
    pub status: String,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
        }
    }
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status text after a save attempt.
    pub fn save_status<E: std::fmt::Display>(path: &Path, result: &Result<usize, E>) -> String {
        match result {
            Ok(bytes) => format!("Saved {} ({} bytes)", path.display(), bytes),
            Err(e) => format!("Save error: {}", e),
        }
    }

    /// Log a save attempt and show its outcome.
    pub fn report_save<E: std::fmt::Display>(&mut self, path: &Path, result: &Result<usize, E>) {
        match result {
            Ok(bytes) => info!(path = %path.display(), bytes, "Figure saved from window"),
            Err(e) => error!(path = %path.display(), error = %e, "Failed to save chart"),
        }
        self.status = Self::save_status(path, result);
    }

    /// Draw the toolbar
    pub fn show(&mut self, ui: &mut egui::Ui) -> ToolbarAction {
        let mut action = ToolbarAction::None;

        ui.horizontal(|ui| {
            if ui
                .button(RichText::new("💾 Save Figure…").size(13.0))
                .on_hover_text("Save the chart as PNG or SVG")
                .clicked()
            {
                action = ToolbarAction::SaveFigure;
            }

            ui.separator();
            ui.label(
                RichText::new(&self.status)
                    .size(12.0)
                    .color(Color32::GRAY),
            );
        });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_ready() {
        assert_eq!(Toolbar::new().status, "Ready");
    }

    #[test]
    fn save_status_reports_outcome() {
        let path = Path::new("chart.png");
        let ok: Result<usize, String> = Ok(1024);
        assert_eq!(
            Toolbar::save_status(path, &ok),
            "Saved chart.png (1024 bytes)"
        );

        let err: Result<usize, String> = Err("disk full".to_string());
        assert_eq!(Toolbar::save_status(path, &err), "Save error: disk full");
    }

    #[test]
    fn report_save_shows_final_outcome() {
        let mut toolbar = Toolbar::new();
        let ok: Result<usize, String> = Ok(2048);
        toolbar.report_save(Path::new("out.svg"), &ok);
        assert_eq!(toolbar.status, "Saved out.svg (2048 bytes)");

        let err: Result<usize, String> = Err("denied".to_string());
        toolbar.report_save(Path::new("out.svg"), &err);
        assert_eq!(toolbar.status, "Save error: denied");
    }
}
