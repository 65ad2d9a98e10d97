//! Toolbar component with the search input

use egui::Ui;

/// Toolbar state for search editing
#[derive(Default)]
pub struct ToolbarState {
    /// Current search text
    pub search_text: String,
}

impl ToolbarState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Toolbar actions
#[derive(Debug, Clone)]
pub enum ToolbarAction {
    /// Search text changed (fires on every edit, like live filtering)
    SearchChanged(String),
    ClearSearch,
}

/// Toolbar component
pub struct Toolbar;

impl Toolbar {
    /// Render the toolbar
    pub fn ui(ui: &mut Ui, state: &mut ToolbarState) -> Option<ToolbarAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.label("Search:");

            let response = ui.add_sized(
                [ui.available_width() - 40.0, 20.0],
                egui::TextEdit::singleline(&mut state.search_text)
                    .hint_text("Search photos by title or tags...")
                    .font(egui::FontId::proportional(13.0)),
            );

            if response.changed() {
                action = Some(ToolbarAction::SearchChanged(state.search_text.clone()));
            }

            if !state.search_text.is_empty() && ui.button("✕").on_hover_text("Clear").clicked() {
                state.search_text.clear();
                action = Some(ToolbarAction::ClearSearch);
            }
        });

        action
    }
}
