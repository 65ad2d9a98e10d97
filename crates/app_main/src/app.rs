//! Application main loop
//!
//! Wires the window event loop to the core state machines: filtering feeds
//! the grid, grid clicks open the lightbox over the filtered set, and the
//! carousel runs independently over the featured slides.

use anyhow::Result;
use app_core::{
    filter_photos, full_key, state, thumb_key, Album, Command, CommandId, Lightbox, Photo,
    PhotoLibrary,
};
use app_ui::{
    components::{
        AlbumAction, AlbumBar, AutoplayState, Carousel, GridAction, LightboxAction, LightboxView,
        PhotoGrid, StatusBar, StatusInfo, Toolbar, ToolbarAction, ToolbarState,
    },
    InputHandler, Renderer, Theme,
};
use egui_wgpu::ScreenDescriptor;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{Touch, TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Decode ceiling for full-size images (lightbox and carousel slides)
const FULL_IMAGE_MAX: (u32, u32) = (2048, 2048);

/// Main application state for the event loop
struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    egui_ctx: egui::Context,
    egui_state: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,

    // UI components
    photo_grid: PhotoGrid,
    toolbar_state: ToolbarState,
    carousel: Carousel,
    lightbox: Lightbox,
    input_handler: InputHandler,
    theme: Theme,
    status: StatusInfo,

    // Uploaded textures by cache key
    textures: HashMap<String, egui::TextureHandle>,

    // Decode target for grid thumbnails
    thumb_target: (u32, u32),
}

impl App {
    fn new() -> Self {
        let config = state().map(|s| s.config.read().clone()).unwrap_or_default();

        let mut carousel = Carousel::new(&config.carousel);

        // Load the library document once; failure leaves the gallery empty
        if let Some(state) = state() {
            match PhotoLibrary::load(&config.gallery.library_path) {
                Ok(library) => {
                    carousel.set_slides(library.featured().to_vec());

                    // Preload slide images so transitions never show a placeholder
                    let requests = library
                        .featured()
                        .iter()
                        .map(|photo| {
                            (
                                full_key(&photo.id),
                                library.resolve_path(&photo.url),
                                Some(FULL_IMAGE_MAX),
                            )
                        })
                        .collect();
                    state.thumbnails.preload(requests);

                    state.set_library(library);
                }
                Err(e) => {
                    tracing::error!("Failed to initialize gallery: {}", e);
                }
            }
        }

        if carousel.has_slides() {
            carousel.start_autoplay(Instant::now());
        }

        let thumbnail_size = config.gallery.thumbnail_size;

        Self {
            window: None,
            renderer: None,
            egui_ctx: egui::Context::default(),
            egui_state: None,
            egui_renderer: None,

            photo_grid: PhotoGrid::new(thumbnail_size as f32),
            toolbar_state: ToolbarState::new(),
            carousel,
            lightbox: Lightbox::new(),
            input_handler: InputHandler::new(config.keybindings.clone()),
            theme: Theme::by_name(&config.general.theme),
            status: StatusInfo::default(),

            textures: HashMap::new(),
            thumb_target: (thumbnail_size, thumbnail_size),
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let start_maximized = state()
            .map(|s| s.config.read().general.start_maximized)
            .unwrap_or(false);

        let window_attrs = Window::default_attributes()
            .with_title("Photo Gallery")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 800))
            .with_maximized(start_maximized);

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        // Initialize renderer
        let renderer = pollster::block_on(Renderer::new(window.clone()))?;

        // Initialize egui
        let egui_state = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &renderer.device,
            renderer.config.format,
            None,
            1,
            false,
        );

        // Apply theme
        self.theme.apply(&self.egui_ctx);

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.egui_state = Some(egui_state);
        self.egui_renderer = Some(egui_renderer);

        Ok(())
    }

    /// Upload decoded images that arrived from the worker since last frame
    fn upload_ready_textures(&mut self, ctx: &egui::Context) {
        let Some(state) = state() else { return };

        for image in state.thumbnails.drain_ready() {
            let color_image = egui::ColorImage::from_rgba_unmultiplied(
                [image.width as usize, image.height as usize],
                &image.data,
            );
            let handle =
                ctx.load_texture(image.key.clone(), color_image, egui::TextureOptions::LINEAR);
            self.textures.insert(image.key, handle);
        }
    }

    /// Request the full-size image for the lightbox's current photo
    fn request_current_full(&self, library: Option<&PhotoLibrary>) {
        let (Some(state), Some(library)) = (state(), library) else {
            return;
        };

        if let Some(photo) = self.lightbox.current_photo() {
            state.thumbnails.request(
                &full_key(&photo.id),
                library.resolve_path(&photo.url),
                Some(FULL_IMAGE_MAX),
            );
        }
    }

    /// Build the frame UI
    fn ui(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.upload_ready_textures(ctx);

        let Some(state) = state() else { return };
        let library = state.library.read();
        let gallery = state.gallery.read().clone();

        let albums: &[Album] = library.as_ref().map(|l| l.albums()).unwrap_or(&[]);
        let photos: &[Photo] = library.as_ref().map(|l| l.photos()).unwrap_or(&[]);
        let filtered = filter_photos(photos, gallery.current_album_id.as_deref(), &gallery.search_term);

        // Top panel: search + album selection
        let (search_action, album_action) = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let search = Toolbar::ui(ui, &mut self.toolbar_state);
                ui.add_space(2.0);
                let album = AlbumBar::ui(ui, albums, gallery.current_album_id.as_deref());
                ui.add_space(4.0);
                (search, album)
            })
            .inner;

        match search_action {
            Some(ToolbarAction::SearchChanged(text)) => {
                state.gallery.write().search_term = text;
            }
            Some(ToolbarAction::ClearSearch) => {
                state.gallery.write().search_term.clear();
            }
            None => {}
        }

        if let Some(AlbumAction::Select(album_id)) = album_action {
            tracing::debug!("Album selected: {:?}", album_id);
            state.gallery.write().current_album_id = album_id;
        }

        // Carousel panel over the featured slides
        if self.carousel.has_slides() {
            let missing = egui::TopBottomPanel::top("carousel")
                .exact_height(300.0)
                .show(ctx, |ui| self.carousel.ui(ui, &self.textures, now))
                .inner;

            if let Some(library) = library.as_ref() {
                for idx in missing {
                    if let Some(slide) = self.carousel.slides().get(idx) {
                        state.thumbnails.request(
                            &full_key(&slide.id),
                            library.resolve_path(&slide.url),
                            Some(FULL_IMAGE_MAX),
                        );
                    }
                }
            }
        }

        // Status bar
        self.status.album = match gallery.current_album_id.as_deref() {
            Some(id) => albums
                .iter()
                .find(|a| a.id == id)
                .map(|a| a.name.clone())
                .unwrap_or_else(|| id.to_string()),
            None => "All Photos".to_string(),
        };
        self.status.shown = format!("{} of {} photos", filtered.len(), photos.len());
        self.status.position = if self.lightbox.is_visible() {
            format!("{} / {}", self.lightbox.current_index() + 1, self.lightbox.len())
        } else {
            String::new()
        };
        let pending = state.thumbnails.pending_count();
        self.status.message = if pending > 0 {
            format!("Loading {} images…", pending)
        } else {
            match self.carousel.autoplay_state() {
                AutoplayState::Playing => "Autoplay on".to_string(),
                AutoplayState::Paused => "Autoplay paused".to_string(),
                AutoplayState::Stopped => String::new(),
            }
        };

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            StatusBar::ui(ui, &self.status);
        });

        // Photo grid; background scrolling is suspended while the lightbox is up
        let grid_output = egui::CentralPanel::default()
            .show(ctx, |ui| {
                self.photo_grid
                    .ui(ui, &filtered, &self.textures, !self.lightbox.is_visible())
            })
            .inner;

        if let Some(lib) = library.as_ref() {
            for idx in grid_output.missing {
                if let Some(photo) = filtered.get(idx) {
                    state.thumbnails.request(
                        &thumb_key(&photo.id),
                        lib.resolve_path(&photo.thumbnail),
                        Some(self.thumb_target),
                    );
                }
            }

            if let Some(GridAction::Open(idx)) = grid_output.action {
                // The lightbox navigates the filtered sequence, not the full library
                let items: Vec<Photo> = filtered.iter().map(|p| (*p).clone()).collect();
                self.lightbox.show(items, idx);
                self.request_current_full(Some(lib));
            }
        }

        // Lightbox overlay
        if self.lightbox.is_visible() {
            let texture = self
                .lightbox
                .current_photo()
                .and_then(|photo| self.textures.get(&full_key(&photo.id)));

            match LightboxView::ui(ctx, &self.lightbox, texture) {
                Some(LightboxAction::Close) => self.lightbox.close(),
                Some(LightboxAction::Next) => {
                    if self.lightbox.next() {
                        self.request_current_full(library.as_ref());
                    }
                }
                Some(LightboxAction::Previous) => {
                    if self.lightbox.previous() {
                        self.request_current_full(library.as_ref());
                    }
                }
                None => {}
            }
        }
    }

    /// Execute a resolved command, routed by lightbox visibility
    fn execute_command(&mut self, cmd: &Command, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        tracing::debug!("Executing command: {}", cmd.id.as_str());

        match cmd.id.as_str() {
            // Left/Right drive the lightbox while it is visible, the
            // carousel otherwise; the check is the state enum, not listener
            // juggling
            CommandId::NAV_NEXT => {
                if self.lightbox.is_visible() {
                    if self.lightbox.next() {
                        let library = state().map(|s| s.library.read());
                        self.request_current_full(library.as_ref().and_then(|l| l.as_ref()));
                    }
                } else {
                    self.carousel.next_slide();
                }
            }
            CommandId::NAV_PREV => {
                if self.lightbox.is_visible() {
                    if self.lightbox.previous() {
                        let library = state().map(|s| s.library.read());
                        self.request_current_full(library.as_ref().and_then(|l| l.as_ref()));
                    }
                } else {
                    self.carousel.prev_slide();
                }
            }
            CommandId::LIGHTBOX_CLOSE => {
                if self.lightbox.is_visible() {
                    self.lightbox.close();
                }
            }
            CommandId::CAROUSEL_TOGGLE_AUTOPLAY => {
                if !self.lightbox.is_visible() {
                    self.carousel.toggle_autoplay(now);
                }
            }
            CommandId::APP_QUIT => {
                event_loop.exit();
            }
            other => {
                tracing::warn!("Unknown command: {}", other);
            }
        }
    }

    /// Forward touch gestures to the carousel's swipe recognizer
    fn handle_touch(&mut self, touch: Touch) {
        if self.lightbox.is_visible() {
            return;
        }

        match touch.phase {
            TouchPhase::Started => self.carousel.swipe_start(touch.location.x as f32),
            TouchPhase::Ended => self.carousel.swipe_end(touch.location.x as f32),
            _ => {}
        }
    }

    fn render(&mut self) {
        let window = match &self.window {
            Some(w) => w.clone(),
            None => return,
        };

        let renderer = match &self.renderer {
            Some(r) => r,
            None => return,
        };

        // Get surface texture
        let output = match renderer.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                return;
            }
            Err(e) => {
                tracing::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = match &mut self.egui_state {
            Some(s) => s.take_egui_input(&window),
            None => return,
        };

        let egui_ctx = self.egui_ctx.clone();
        let full_output = egui_ctx.run(raw_input, |ctx| {
            self.ui(ctx);
        });

        if let Some(egui_state) = &mut self.egui_state {
            egui_state.handle_platform_output(&window, full_output.platform_output);
        }

        let clipped_primitives = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let renderer = match &self.renderer {
            Some(r) => r,
            None => return,
        };

        let egui_renderer = match &mut self.egui_renderer {
            Some(r) => r,
            None => return,
        };

        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [renderer.size.0, renderer.size.1],
            pixels_per_point: window.scale_factor() as f32,
        };

        let mut encoder = renderer
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui encoder"),
            });

        // Update egui textures
        for (id, delta) in &full_output.textures_delta.set {
            egui_renderer.update_texture(&renderer.device, &renderer.queue, *id, delta);
        }

        egui_renderer.update_buffers(
            &renderer.device,
            &renderer.queue,
            &mut encoder,
            &clipped_primitives,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.08,
                            g: 0.08,
                            b: 0.09,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // SAFETY: The render_pass is dropped before encoder.finish() is
            // called, so the borrow is valid even though we're transmuting
            // the lifetime. egui-wgpu 0.29 requires 'static here.
            let render_pass_static: &mut wgpu::RenderPass<'static> =
                unsafe { std::mem::transmute(&mut render_pass) };

            egui_renderer.render(render_pass_static, &clipped_primitives, &screen_descriptor);
        }

        // Free textures
        for id in &full_output.textures_delta.free {
            egui_renderer.free_texture(id);
        }

        renderer.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to initialize window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first (text input, widget focus)
        if let Some(egui_state) = &mut self.egui_state {
            if let Some(window) = &self.window {
                let response = egui_state.on_window_event(window, &event);
                if response.consumed {
                    window.request_redraw();
                    return;
                }
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize((size.width, size.height));
                }
                // The carousel recomputes its slide offset after the
                // debounce quiet window, not per event
                self.carousel.notify_resize(Instant::now());
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(cmd) = self.input_handler.handle_key(&event) {
                    self.execute_command(&cmd, event_loop);
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                if let Some(cmd) = self.input_handler.handle_mouse_button(button, state) {
                    self.execute_command(&cmd, event_loop);
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.input_handler.update_modifiers(modifiers.state());
            }

            WindowEvent::Touch(touch) => {
                self.handle_touch(touch);
            }

            WindowEvent::RedrawRequested => {
                self.render();
            }

            _ => {}
        }

        // Request redraw
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Run the application
pub fn run() -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    Ok(())
}
