//! Command identifiers for user actions

/// Command identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandId(pub String);

impl CommandId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Navigation commands (lightbox while visible, carousel otherwise)
    pub const NAV_NEXT: &'static str = "nav.next";
    pub const NAV_PREV: &'static str = "nav.prev";

    // Lightbox commands
    pub const LIGHTBOX_CLOSE: &'static str = "lightbox.close";

    // Carousel commands
    pub const CAROUSEL_TOGGLE_AUTOPLAY: &'static str = "carousel.toggle_autoplay";

    // App commands
    pub const APP_QUIT: &'static str = "app.quit";
}

/// A resolved user command
#[derive(Debug, Clone)]
pub struct Command {
    pub id: CommandId,
}

impl Command {
    pub fn new(id: &str) -> Self {
        Self {
            id: CommandId::new(id),
        }
    }
}
