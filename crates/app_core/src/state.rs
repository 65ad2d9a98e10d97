//! Application state management

use crate::{AppConfig, GalleryState, PhotoLibrary, ThumbnailManager};
use parking_lot::RwLock;

/// Main application state
pub struct AppState {
    /// Application configuration
    pub config: RwLock<AppConfig>,

    /// The photo library, None until loaded (or if loading failed)
    pub library: RwLock<Option<PhotoLibrary>>,

    /// User-driven gallery selection (album + search)
    pub gallery: RwLock<GalleryState>,

    /// Decode pipeline for thumbnails, slides, and full-size images
    pub thumbnails: ThumbnailManager,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: RwLock::new(config),
            library: RwLock::new(None),
            gallery: RwLock::new(GalleryState::default()),
            thumbnails: ThumbnailManager::new(),
        }
    }

    /// Save the current configuration
    pub fn save_config(&self) -> anyhow::Result<()> {
        self.config.read().save()
    }

    /// Install the loaded library
    pub fn set_library(&self, library: PhotoLibrary) {
        *self.library.write() = Some(library);
    }
}
