//! Status bar component

use egui::Ui;

/// Status bar information
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    /// Active album name
    pub album: String,

    /// Visible / total photo counts
    pub shown: String,

    /// Lightbox position, e.g. "3 / 12"
    pub position: String,

    /// Additional status message
    pub message: String,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn ui(ui: &mut Ui, info: &StatusInfo) {
        ui.horizontal(|ui| {
            ui.label(&info.album);

            ui.separator();

            if !info.shown.is_empty() {
                ui.label(&info.shown);
                ui.separator();
            }

            if !info.position.is_empty() {
                ui.label(&info.position);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if !info.message.is_empty() {
                    ui.label(&info.message);
                }
            });
        });
    }
}
