//! Application configuration

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub gallery: GalleryConfig,
    pub carousel: CarouselConfig,
    pub keybindings: HashMap<String, Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            gallery: GalleryConfig::default(),
            carousel: CarouselConfig::default(),
            keybindings: default_keybindings(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub theme: String,
    pub start_maximized: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            start_maximized: false,
        }
    }
}

/// Gallery (grid + library) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Path of the library document, resolved relative to the working directory
    pub library_path: PathBuf,
    /// Edge length of grid thumbnails in pixels
    pub thumbnail_size: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            library_path: PathBuf::from("data/photos.json"),
            thumbnail_size: 192,
        }
    }
}

/// Carousel timing and gesture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Delay between automatic slide advances
    pub autoplay_interval_ms: u64,
    /// Minimum horizontal displacement for a swipe to register
    pub swipe_threshold: f32,
    /// Quiet window after the last resize before slide layout is recomputed
    pub resize_debounce_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 3000,
            swipe_threshold: 50.0,
            resize_debounce_ms: 100,
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&content)?;
            tracing::info!("Configuration loaded from {:?}", config_path);
            Ok(config)
        } else {
            tracing::info!("Using default configuration");
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;

        tracing::info!("Configuration saved to {:?}", config_path);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("com", "PhotoGallery", "PhotoGallery")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("./config.toml"))
    }
}

fn default_keybindings() -> HashMap<String, Vec<String>> {
    let mut kb = HashMap::new();

    // Navigation: routed to the lightbox while it is visible, to the
    // carousel otherwise
    kb.insert("nav.next".into(), vec!["Right".into(), "l".into()]);
    kb.insert("nav.prev".into(), vec!["Left".into(), "h".into()]);

    // Lightbox
    kb.insert("lightbox.close".into(), vec!["Escape".into()]);

    // Carousel
    kb.insert("carousel.toggle_autoplay".into(), vec!["Space".into()]);

    // App
    kb.insert("app.quit".into(), vec!["q".into()]);

    kb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed.carousel.autoplay_interval_ms, 3000);
        assert_eq!(parsed.carousel.swipe_threshold, 50.0);
        assert_eq!(parsed.carousel.resize_debounce_ms, 100);
        assert_eq!(parsed.gallery.thumbnail_size, config.gallery.thumbnail_size);
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let parsed: AppConfig = toml::from_str("[general]\ntheme = \"light\"\n").unwrap();

        assert_eq!(parsed.general.theme, "light");
        assert_eq!(parsed.carousel.autoplay_interval_ms, 3000);
        assert!(parsed.keybindings.contains_key("nav.next"));
    }
}
