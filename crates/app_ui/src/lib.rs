//! Photo Gallery UI Layer
//!
//! Provides:
//! - egui-based GUI components
//! - wgpu surface management
//! - Input handling

pub mod renderer;
pub mod components;
pub mod input;
pub mod theme;

pub use renderer::Renderer;
pub use input::InputHandler;
pub use theme::Theme;
