//! Lightbox overlay component
//!
//! Render-only companion to the core lightbox state machine. The overlay
//! covers the whole window, swallows pointer input behind it, and shows the
//! current photo's image, title, description, and tags.

use app_core::Lightbox;
use egui::{Color32, FontId, Rect, RichText, TextureHandle, Vec2};

/// Action returned from lightbox interaction
#[derive(Debug, Clone, Copy)]
pub enum LightboxAction {
    Close,
    Next,
    Previous,
}

/// Modal viewer overlay
pub struct LightboxView;

impl LightboxView {
    /// Render the overlay. Does nothing while the lightbox is hidden.
    pub fn ui(
        ctx: &egui::Context,
        lightbox: &Lightbox,
        texture: Option<&TextureHandle>,
    ) -> Option<LightboxAction> {
        let photo = lightbox.current_photo()?;
        let mut action = None;

        egui::Area::new(egui::Id::new("lightbox"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let screen = ctx.screen_rect();

                // The backdrop swallows clicks and drags behind the modal
                ui.allocate_rect(screen, egui::Sense::click_and_drag());

                ui.painter().rect_filled(
                    screen,
                    0.0,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 235),
                );

                // Image area leaves room for the caption block below
                let image_rect = Rect::from_min_max(
                    screen.min + Vec2::new(60.0, 40.0),
                    egui::pos2(screen.max.x - 60.0, screen.max.y - 110.0),
                );

                if let Some(texture) = texture {
                    let size = texture.size_vec2();
                    let scale = (image_rect.width() / size.x)
                        .min(image_rect.height() / size.y)
                        .min(1.0);
                    let rect = Rect::from_center_size(image_rect.center(), size * scale);
                    let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    ui.painter().image(texture.id(), rect, uv, Color32::WHITE);
                } else {
                    ui.painter().text(
                        image_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Loading…",
                        FontId::proportional(18.0),
                        Color32::GRAY,
                    );
                }

                // Caption block
                let center_x = screen.center().x;
                ui.painter().text(
                    egui::pos2(center_x, screen.max.y - 90.0),
                    egui::Align2::CENTER_CENTER,
                    &photo.title,
                    FontId::proportional(20.0),
                    Color32::WHITE,
                );
                if !photo.description.is_empty() {
                    ui.painter().text(
                        egui::pos2(center_x, screen.max.y - 64.0),
                        egui::Align2::CENTER_CENTER,
                        &photo.description,
                        FontId::proportional(14.0),
                        Color32::LIGHT_GRAY,
                    );
                }
                if !photo.tags.is_empty() {
                    ui.painter().text(
                        egui::pos2(center_x, screen.max.y - 40.0),
                        egui::Align2::CENTER_CENTER,
                        format!("#{}", photo.tags.join(" #")),
                        FontId::proportional(13.0),
                        Color32::from_rgb(94, 170, 255),
                    );
                }

                // Position indicator
                ui.painter().text(
                    egui::pos2(screen.min.x + 16.0, screen.min.y + 16.0),
                    egui::Align2::LEFT_TOP,
                    format!("{} / {}", lightbox.current_index() + 1, lightbox.len()),
                    FontId::proportional(13.0),
                    Color32::from_gray(170),
                );

                // Controls
                let close_rect = Rect::from_center_size(
                    egui::pos2(screen.max.x - 32.0, screen.min.y + 32.0),
                    Vec2::splat(36.0),
                );
                let button = |label: &str| {
                    egui::Button::new(RichText::new(label).size(22.0).color(Color32::WHITE))
                        .frame(false)
                };
                if ui.put(close_rect, button("✕")).clicked() {
                    action = Some(LightboxAction::Close);
                }

                let prev_rect = Rect::from_center_size(
                    egui::pos2(screen.min.x + 30.0, screen.center().y),
                    Vec2::splat(44.0),
                );
                if ui.put(prev_rect, button("◀")).clicked() {
                    action = Some(LightboxAction::Previous);
                }

                let next_rect = Rect::from_center_size(
                    egui::pos2(screen.max.x - 30.0, screen.center().y),
                    Vec2::splat(44.0),
                );
                if ui.put(next_rect, button("▶")).clicked() {
                    action = Some(LightboxAction::Next);
                }
            });

        action
    }
}
