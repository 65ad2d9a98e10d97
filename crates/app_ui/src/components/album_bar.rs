//! Album selection bar

use app_core::Album;
use egui::Ui;

/// Action returned from album bar interaction
#[derive(Debug, Clone)]
pub enum AlbumAction {
    /// Select an album, or None for "All Photos"
    Select(Option<String>),
}

/// Horizontal album selector with an "All Photos" entry
pub struct AlbumBar;

impl AlbumBar {
    /// Render the album bar. `current` is the active album id, if any.
    pub fn ui(ui: &mut Ui, albums: &[Album], current: Option<&str>) -> Option<AlbumAction> {
        let mut action = None;

        ui.horizontal_wrapped(|ui| {
            if ui.selectable_label(current.is_none(), "All Photos").clicked() {
                action = Some(AlbumAction::Select(None));
            }

            for album in albums {
                let selected = current == Some(album.id.as_str());
                if ui.selectable_label(selected, &album.name).clicked() {
                    action = Some(AlbumAction::Select(Some(album.id.clone())));
                }
            }
        });

        action
    }
}
