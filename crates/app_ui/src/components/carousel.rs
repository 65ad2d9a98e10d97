//! Carousel component with autoplay, dot indicators, and swipe navigation
//!
//! Self-contained slide viewer over the library's featured photos. The
//! autoplay tick and the resize recomputation are the two owned timer
//! handles; both are pumped once per rendered frame with the same `now`.

use app_core::{full_key, CarouselConfig, CountdownTimer, Debouncer, Photo};
use egui::{Color32, FontId, Rect, Sense, TextureHandle, Ui, Vec2};
use std::collections::HashMap;
use std::time::{Duration, Instant};

const DOTS_HEIGHT: f32 = 26.0;

/// Autoplay state, independent of the slide index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoplayState {
    #[default]
    Stopped,
    Playing,
    /// Suspended while the pointer hovers the carousel
    Paused,
}

/// Direction resolved from a completed swipe gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

/// Horizontal swipe recognizer: gesture start/end positions against a
/// fixed displacement threshold.
#[derive(Debug)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    /// Record the gesture start position
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Resolve the gesture from its end position. Dragging left (content
    /// pushed towards the previous position) advances; displacement at or
    /// under the threshold is ignored.
    pub fn end(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let difference = start - x;

        if difference.abs() <= self.threshold {
            return None;
        }

        Some(if difference > 0.0 {
            SwipeDirection::Next
        } else {
            SwipeDirection::Previous
        })
    }
}

/// Auto-advancing slide viewer, independent of the gallery
pub struct Carousel {
    slides: Vec<Photo>,
    current: usize,

    autoplay_state: AutoplayState,
    autoplay: CountdownTimer,
    resize_debounce: Debouncer,
    swipe: SwipeTracker,

    /// Pixel offset of the slide strip; aligned with `current` on
    /// navigation and on debounced resize
    track_offset: f32,
    /// Viewport width from the last rendered frame
    viewport_width: f32,
    hovered: bool,
}

impl Carousel {
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            slides: Vec::new(),
            current: 0,
            autoplay_state: AutoplayState::Stopped,
            autoplay: CountdownTimer::new(Duration::from_millis(config.autoplay_interval_ms)),
            resize_debounce: Debouncer::new(Duration::from_millis(config.resize_debounce_ms)),
            swipe: SwipeTracker::new(config.swipe_threshold),
            track_offset: 0.0,
            viewport_width: 0.0,
            hovered: false,
        }
    }

    /// Install the slide list, resetting the position
    pub fn set_slides(&mut self, slides: Vec<Photo>) {
        self.slides = slides;
        self.current = 0;
        self.track_offset = 0.0;
    }

    pub fn slides(&self) -> &[Photo] {
        &self.slides
    }

    pub fn has_slides(&self) -> bool {
        !self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay_state
    }

    /// Jump to a slide directly (dot indicators)
    pub fn go_to_slide(&mut self, index: usize) {
        if index < self.slides.len() {
            self.current = index;
            self.sync_track();
        }
    }

    /// Advance one slide, wrapping at the end. No-op without slides.
    pub fn next_slide(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.slides.len();
        self.sync_track();
    }

    /// Go back one slide, wrapping at the start. No-op without slides.
    pub fn prev_slide(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.current = (self.current + self.slides.len() - 1) % self.slides.len();
        self.sync_track();
    }

    /// Start autoplay. Arming the single owned timer replaces any pending
    /// tick, so repeated starts never stack advancement.
    pub fn start_autoplay(&mut self, now: Instant) {
        self.autoplay.arm(now);
        self.autoplay_state = AutoplayState::Playing;
    }

    /// Stop autoplay and cancel the pending tick
    pub fn stop_autoplay(&mut self) {
        self.autoplay.cancel();
        self.autoplay_state = AutoplayState::Stopped;
    }

    pub fn toggle_autoplay(&mut self, now: Instant) {
        match self.autoplay_state {
            AutoplayState::Stopped => self.start_autoplay(now),
            AutoplayState::Playing | AutoplayState::Paused => self.stop_autoplay(),
        }
    }

    /// Track pointer hover: entering pauses a running autoplay, leaving
    /// restarts a paused one.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if hovered && !self.hovered && self.autoplay_state == AutoplayState::Playing {
            self.autoplay.cancel();
            self.autoplay_state = AutoplayState::Paused;
        }
        if !hovered && self.hovered && self.autoplay_state == AutoplayState::Paused {
            self.autoplay.arm(now);
            self.autoplay_state = AutoplayState::Playing;
        }
        self.hovered = hovered;
    }

    /// Record a window resize; the strip offset is recomputed only after
    /// the debounce quiet window
    pub fn notify_resize(&mut self, now: Instant) {
        self.resize_debounce.poke(now);
    }

    /// Gesture start (touch or pointer drag)
    pub fn swipe_start(&mut self, x: f32) {
        self.swipe.begin(x);
    }

    /// Gesture end: a past-threshold swipe navigates
    pub fn swipe_end(&mut self, x: f32) {
        match self.swipe.end(x) {
            Some(SwipeDirection::Next) => self.next_slide(),
            Some(SwipeDirection::Previous) => self.prev_slide(),
            None => {}
        }
    }

    /// Pump the owned timers. Called once per frame.
    pub fn update(&mut self, now: Instant) {
        if self.autoplay_state == AutoplayState::Playing && self.autoplay.fire_and_rearm(now) {
            self.next_slide();
        }
        if self.resize_debounce.fire(now) {
            self.sync_track();
        }
    }

    fn sync_track(&mut self) {
        self.track_offset = self.current as f32 * self.viewport_width;
    }

    /// Render the carousel. Returns indices of visible slides that still
    /// need their texture.
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        textures: &HashMap<String, TextureHandle>,
        now: Instant,
    ) -> Vec<usize> {
        let mut missing = Vec::new();

        if self.slides.is_empty() {
            return missing;
        }

        self.update(now);

        // Make sure a frame lands when the pending tick is due
        if self.autoplay_state == AutoplayState::Playing {
            if let Some(remaining) = self.autoplay.remaining(now) {
                ui.ctx().request_repaint_after(remaining);
            }
        }

        let height = ui.available_height();
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::click_and_drag());

        // First layout pass has no width yet; later width changes go
        // through the resize debounce
        if self.viewport_width == 0.0 {
            self.viewport_width = rect.width();
            self.sync_track();
        } else {
            self.viewport_width = rect.width();
        }

        self.set_hovered(response.hovered(), now);

        // Pointer drags share the swipe recognizer with touch input
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.swipe_start(pos.x);
            }
        }
        if response.drag_stopped() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.swipe_end(pos.x);
            }
        }

        let slide_area = Rect::from_min_size(
            rect.min,
            Vec2::new(rect.width(), rect.height() - DOTS_HEIGHT),
        );
        let painter = ui.painter().with_clip_rect(slide_area);
        painter.rect_filled(slide_area, 0.0, Color32::from_gray(18));

        let width = rect.width();
        for (idx, slide) in self.slides.iter().enumerate() {
            let slide_rect = Rect::from_min_size(
                egui::pos2(rect.min.x + idx as f32 * width - self.track_offset, rect.min.y),
                slide_area.size(),
            );
            if !slide_rect.intersects(slide_area) {
                continue;
            }

            if let Some(texture) = textures.get(&full_key(&slide.id)) {
                let size = texture.size_vec2();
                let scale = (slide_rect.width() / size.x)
                    .min(slide_rect.height() / size.y)
                    .min(1.0);
                let image_rect = Rect::from_center_size(slide_rect.center(), size * scale);
                let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                painter.image(texture.id(), image_rect, uv, Color32::WHITE);
            } else {
                missing.push(idx);
                painter.text(
                    slide_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "…",
                    FontId::proportional(28.0),
                    Color32::GRAY,
                );
            }

            painter.text(
                egui::pos2(slide_rect.center().x, slide_rect.max.y - 18.0),
                egui::Align2::CENTER_CENTER,
                &slide.title,
                FontId::proportional(14.0),
                Color32::WHITE,
            );
        }

        self.buttons(ui, slide_area);
        self.dots(ui, rect);

        missing
    }

    /// Previous/next overlay buttons
    fn buttons(&mut self, ui: &mut Ui, slide_area: Rect) {
        let button = |label: &str| {
            egui::Button::new(
                egui::RichText::new(label).size(20.0).color(Color32::WHITE),
            )
            .frame(false)
        };

        let prev_rect = Rect::from_center_size(
            egui::pos2(slide_area.min.x + 24.0, slide_area.center().y),
            Vec2::splat(40.0),
        );
        if ui.put(prev_rect, button("◀")).clicked() {
            self.prev_slide();
        }

        let next_rect = Rect::from_center_size(
            egui::pos2(slide_area.max.x - 24.0, slide_area.center().y),
            Vec2::splat(40.0),
        );
        if ui.put(next_rect, button("▶")).clicked() {
            self.next_slide();
        }
    }

    /// Dot indicators: one per slide, exactly the current one active
    fn dots(&mut self, ui: &mut Ui, rect: Rect) {
        let count = self.slides.len();
        let spacing = 18.0;
        let radius = 5.0;
        let total_width = count.saturating_sub(1) as f32 * spacing;
        let center_y = rect.max.y - DOTS_HEIGHT / 2.0;
        let start_x = rect.center().x - total_width / 2.0;

        for idx in 0..count {
            let center = egui::pos2(start_x + idx as f32 * spacing, center_y);
            let dot_rect = Rect::from_center_size(center, Vec2::splat(radius * 2.0 + 4.0));
            let response = ui.interact(
                dot_rect,
                ui.id().with(("carousel_dot", idx)),
                Sense::click(),
            );

            let color = if idx == self.current {
                Color32::from_rgb(94, 170, 255)
            } else if response.hovered() {
                Color32::from_gray(150)
            } else {
                Color32::from_gray(90)
            };
            ui.painter().circle_filled(center, radius, color);

            if response.clicked() {
                self.go_to_slide(idx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            tags: Vec::new(),
            url: format!("img/{id}.jpg"),
            thumbnail: format!("thumbs/{id}.jpg"),
            album_id: None,
        }
    }

    fn carousel(slide_count: usize) -> Carousel {
        let mut c = Carousel::new(&CarouselConfig::default());
        c.set_slides((0..slide_count).map(|i| photo(&format!("s{i}"))).collect());
        c
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut c = carousel(3);

        c.next_slide();
        c.next_slide();
        assert_eq!(c.current_index(), 2);

        c.next_slide();
        assert_eq!(c.current_index(), 0);

        c.prev_slide();
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn go_to_slide_ignores_out_of_range() {
        let mut c = carousel(3);
        c.go_to_slide(1);
        assert_eq!(c.current_index(), 1);

        c.go_to_slide(9);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn navigation_without_slides_is_a_no_op() {
        let mut c = carousel(0);
        c.next_slide();
        c.prev_slide();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn autoplay_advances_index_modulo_slide_count() {
        let t0 = Instant::now();
        let mut c = carousel(3);
        c.start_autoplay(t0);

        for n in 1..=5u32 {
            c.update(t0 + n * 3000 * MS);
            assert_eq!(c.current_index(), n as usize % 3);
        }
    }

    #[test]
    fn autoplay_does_not_fire_early() {
        let t0 = Instant::now();
        let mut c = carousel(3);
        c.start_autoplay(t0);

        c.update(t0 + 2999 * MS);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn restart_replaces_the_pending_tick() {
        let t0 = Instant::now();
        let mut c = carousel(3);
        c.start_autoplay(t0);
        c.start_autoplay(t0 + 2000 * MS);

        // The original deadline is gone; only the rearmed one fires
        c.update(t0 + 3000 * MS);
        assert_eq!(c.current_index(), 0);
        c.update(t0 + 5000 * MS);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let t0 = Instant::now();
        let mut c = carousel(3);
        c.start_autoplay(t0);

        c.set_hovered(true, t0 + 1000 * MS);
        assert_eq!(c.autoplay_state(), AutoplayState::Paused);

        // No ticks while paused, however long the hover lasts
        c.update(t0 + 10_000 * MS);
        assert_eq!(c.current_index(), 0);

        c.set_hovered(false, t0 + 10_000 * MS);
        assert_eq!(c.autoplay_state(), AutoplayState::Playing);

        c.update(t0 + 13_000 * MS);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn hover_does_not_start_stopped_autoplay() {
        let t0 = Instant::now();
        let mut c = carousel(3);

        c.set_hovered(true, t0);
        c.set_hovered(false, t0 + 100 * MS);

        assert_eq!(c.autoplay_state(), AutoplayState::Stopped);
        c.update(t0 + 10_000 * MS);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn swipe_past_threshold_navigates() {
        let mut c = carousel(3);

        // Leftward drag of 60 advances
        c.swipe_start(100.0);
        c.swipe_end(40.0);
        assert_eq!(c.current_index(), 1);

        // Rightward drag of 60 goes back
        c.swipe_start(40.0);
        c.swipe_end(100.0);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn swipe_below_threshold_is_ignored() {
        let mut c = carousel(3);

        c.swipe_start(100.0);
        c.swipe_end(70.0);
        assert_eq!(c.current_index(), 0);

        // Exactly at the threshold also does not trigger
        c.swipe_start(100.0);
        c.swipe_end(50.0);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn swipe_end_without_start_is_ignored() {
        let mut c = carousel(3);
        c.swipe_end(0.0);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn resize_recomputation_is_debounced() {
        let t0 = Instant::now();
        let mut c = carousel(3);
        c.viewport_width = 800.0;
        c.go_to_slide(2);
        assert_eq!(c.track_offset, 1600.0);

        c.viewport_width = 400.0;
        c.notify_resize(t0);
        c.notify_resize(t0 + 50 * MS);

        // Still within the quiet window of the second poke
        c.update(t0 + 100 * MS);
        assert_eq!(c.track_offset, 1600.0);

        c.update(t0 + 150 * MS);
        assert_eq!(c.track_offset, 800.0);
    }

    #[test]
    fn set_slides_resets_position() {
        let mut c = carousel(3);
        c.next_slide();
        c.set_slides(vec![photo("x")]);
        assert_eq!(c.current_index(), 0);
    }
}
