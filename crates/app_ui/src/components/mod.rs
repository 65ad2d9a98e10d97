//! UI Components

pub mod album_bar;
pub mod carousel;
pub mod lightbox_view;
pub mod photo_grid;
pub mod status_bar;
pub mod toolbar;

pub use album_bar::{AlbumAction, AlbumBar};
pub use carousel::{AutoplayState, Carousel, SwipeDirection, SwipeTracker};
pub use lightbox_view::{LightboxAction, LightboxView};
pub use photo_grid::{GridAction, GridOutput, PhotoGrid};
pub use status_bar::{StatusBar, StatusInfo};
pub use toolbar::{Toolbar, ToolbarAction, ToolbarState};
