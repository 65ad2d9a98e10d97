//! Photo Gallery Core Domain Logic
//!
//! This crate contains:
//! - Application state management
//! - Command identifiers
//! - Configuration
//! - Error types
//! - Photo library model and filtering
//! - Lightbox navigation state machine
//! - Timer handles (autoplay, debounce)
//! - Image loading

pub mod state;
pub mod config;
pub mod command;
pub mod error;
pub mod library;
pub mod filter;
pub mod lightbox;
pub mod timer;
pub mod image_loader;
pub mod thumbnails;

pub use state::AppState;
pub use config::{AppConfig, GeneralConfig, GalleryConfig, CarouselConfig};
pub use command::{Command, CommandId};
pub use error::AppError;
pub use library::{Album, GalleryState, Photo, PhotoLibrary};
pub use filter::filter_photos;
pub use lightbox::{Lightbox, LightboxState};
pub use timer::{CountdownTimer, Debouncer};
pub use image_loader::{ImageLoader, LoadedImage};
pub use thumbnails::{full_key, thumb_key, ThumbnailManager};

use once_cell::sync::OnceCell;

/// Global application state (for UI access)
static APP_STATE: OnceCell<AppState> = OnceCell::new();

/// Initialize global application state
pub fn init(config: AppConfig) -> anyhow::Result<&'static AppState> {
    let state = AppState::new(config);
    APP_STATE.set(state).map_err(|_| anyhow::anyhow!("AppState already initialized"))?;
    Ok(APP_STATE.get().unwrap())
}

/// Get global application state
pub fn state() -> Option<&'static AppState> {
    APP_STATE.get()
}
