//! Photo grid component
//!
//! Displays the filtered photo set as a thumbnail grid. Thumbnails are
//! requested lazily: only items whose rect is actually visible inside the
//! scroll viewport are reported as missing, so offscreen rows cost nothing
//! until scrolled into view.

use app_core::{thumb_key, Photo};
use egui::{Rect, Response, TextureHandle, Ui, Vec2};
use std::collections::HashMap;

/// Action returned from grid interaction
#[derive(Debug, Clone)]
pub enum GridAction {
    /// User clicked a photo (index into the photo slice passed to `ui`)
    Open(usize),
}

/// Per-frame grid result
#[derive(Debug, Default)]
pub struct GridOutput {
    pub action: Option<GridAction>,
    /// Indices of visible photos that still need a thumbnail texture
    pub missing: Vec<usize>,
}

/// Thumbnail grid component
pub struct PhotoGrid {
    /// Thumbnail edge length
    pub thumbnail_size: f32,
    /// Number of columns (calculated from width)
    columns: usize,
}

impl PhotoGrid {
    pub fn new(thumbnail_size: f32) -> Self {
        Self {
            thumbnail_size: thumbnail_size.clamp(64.0, 512.0),
            columns: 4,
        }
    }

    /// Calculate column count from the available width
    fn calculate_grid(&mut self, available_width: f32) {
        let item_width = self.thumbnail_size + 16.0;
        self.columns = (available_width / item_width).max(1.0) as usize;
    }

    /// Render the photo grid.
    ///
    /// `scroll_enabled` is false while the lightbox is up, which suspends
    /// background scrolling without tearing the grid down.
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        photos: &[&Photo],
        textures: &HashMap<String, TextureHandle>,
        scroll_enabled: bool,
    ) -> GridOutput {
        let mut output = GridOutput::default();

        self.calculate_grid(ui.available_width());

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .enable_scrolling(scroll_enabled)
            .show(ui, |ui| {
                if photos.is_empty() {
                    ui.centered_and_justified(|ui| {
                        ui.label("No photos match the current filter");
                    });
                    return;
                }

                egui::Grid::new("photo_grid")
                    .num_columns(self.columns)
                    .spacing(Vec2::new(8.0, 8.0))
                    .show(ui, |ui| {
                        for (idx, photo) in photos.iter().enumerate() {
                            let texture = textures.get(&thumb_key(&photo.id));
                            let (response, visible) =
                                self.render_item(ui, photo, texture);

                            if visible && texture.is_none() {
                                output.missing.push(idx);
                            }

                            if response.clicked() {
                                output.action = Some(GridAction::Open(idx));
                            }

                            if (idx + 1) % self.columns == 0 {
                                ui.end_row();
                            }
                        }
                    });
            });

        output
    }

    /// Render a single grid item. Returns the response and whether the item
    /// rect is visible in the viewport.
    fn render_item(
        &self,
        ui: &mut Ui,
        photo: &Photo,
        texture: Option<&TextureHandle>,
    ) -> (Response, bool) {
        let item_size = Vec2::new(self.thumbnail_size + 8.0, self.thumbnail_size + 28.0);
        let (rect, response) = ui.allocate_exact_size(item_size, egui::Sense::click());
        let visible = ui.is_rect_visible(rect);

        if visible {
            let painter = ui.painter();

            let bg_color = if response.hovered() {
                egui::Color32::from_rgba_unmultiplied(100, 100, 100, 40)
            } else {
                egui::Color32::TRANSPARENT
            };
            painter.rect_filled(rect, 4.0, bg_color);

            let thumb_rect = Rect::from_min_size(
                rect.min + Vec2::new(4.0, 4.0),
                Vec2::splat(self.thumbnail_size),
            );

            if let Some(texture) = texture {
                let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                painter.image(texture.id(), thumb_rect, uv, egui::Color32::WHITE);
            } else {
                // Placeholder until the thumbnail decode lands
                painter.rect_filled(thumb_rect, 2.0, egui::Color32::from_gray(40));
                painter.text(
                    thumb_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "…",
                    egui::FontId::proportional(24.0),
                    egui::Color32::GRAY,
                );
            }

            let label_rect = Rect::from_min_size(
                egui::pos2(rect.min.x, thumb_rect.max.y + 2.0),
                Vec2::new(item_size.x, 20.0),
            );

            let max_chars = (self.thumbnail_size / 8.0) as usize;
            let display_title = if photo.title.chars().count() > max_chars {
                let truncated: String =
                    photo.title.chars().take(max_chars.saturating_sub(3)).collect();
                format!("{}...", truncated)
            } else {
                photo.title.clone()
            };

            painter.text(
                label_rect.center(),
                egui::Align2::CENTER_CENTER,
                &display_title,
                egui::FontId::proportional(11.0),
                egui::Color32::LIGHT_GRAY,
            );
        }

        let response = if photo.tags.is_empty() {
            response
        } else {
            response.on_hover_text(format!("#{}", photo.tags.join(" #")))
        };

        (response, visible)
    }

    /// Get current column count
    pub fn columns(&self) -> usize {
        self.columns
    }
}
