//! Input handling and keybinding resolution

use app_core::{Command, CommandId};
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{Key, ModifiersState, NamedKey};

/// Input handler that maps keys/mouse to commands
pub struct InputHandler {
    /// Key bindings: key string -> command ID
    bindings: HashMap<String, String>,

    /// Current modifier state
    modifiers: ModifiersState,
}

impl InputHandler {
    /// Create a new input handler with bindings
    pub fn new(bindings: HashMap<String, Vec<String>>) -> Self {
        // Invert the bindings map: command -> keys becomes key -> command
        let mut key_to_command = HashMap::new();

        for (command, keys) in bindings {
            for key in keys {
                key_to_command.insert(key.to_lowercase(), command.clone());
            }
        }

        Self {
            bindings: key_to_command,
            modifiers: ModifiersState::empty(),
        }
    }

    /// Update modifier state
    pub fn update_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    /// Handle a key event and return the corresponding command
    pub fn handle_key(&self, event: &KeyEvent) -> Option<Command> {
        if event.state != ElementState::Pressed {
            return None;
        }

        let key_str = key_to_string(&event.logical_key);
        if key_str.is_empty() {
            return None;
        }
        let full_key = self.build_key_string(&key_str);

        tracing::debug!("Key pressed: {}", full_key);

        self.bindings
            .get(&full_key.to_lowercase())
            .map(|cmd_id| Command::new(cmd_id))
    }

    /// Handle mouse button
    pub fn handle_mouse_button(&self, button: MouseButton, state: ElementState) -> Option<Command> {
        if state != ElementState::Pressed {
            return None;
        }

        match button {
            MouseButton::Back => Some(Command::new(CommandId::NAV_PREV)),
            MouseButton::Forward => Some(Command::new(CommandId::NAV_NEXT)),
            _ => None,
        }
    }

    /// Build a key string with modifiers
    fn build_key_string(&self, key: &str) -> String {
        let mut parts = Vec::new();

        if self.modifiers.control_key() {
            parts.push("Ctrl");
        }
        if self.modifiers.alt_key() {
            parts.push("Alt");
        }
        if self.modifiers.shift_key() {
            parts.push("Shift");
        }
        if self.modifiers.super_key() {
            parts.push("Super");
        }

        parts.push(key);
        parts.join("+")
    }
}

/// Convert a logical key to a binding string
fn key_to_string(key: &Key) -> String {
    match key {
        Key::Named(named) => match named {
            NamedKey::Space => "Space".to_string(),
            NamedKey::Enter => "Return".to_string(),
            NamedKey::Escape => "Escape".to_string(),
            NamedKey::ArrowUp => "Up".to_string(),
            NamedKey::ArrowDown => "Down".to_string(),
            NamedKey::ArrowLeft => "Left".to_string(),
            NamedKey::ArrowRight => "Right".to_string(),
            NamedKey::Home => "Home".to_string(),
            NamedKey::End => "End".to_string(),
            _ => format!("{:?}", named),
        },
        Key::Character(c) => c.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings() -> HashMap<String, Vec<String>> {
        let mut kb = HashMap::new();
        kb.insert("nav.next".to_string(), vec!["Right".to_string()]);
        kb.insert("lightbox.close".to_string(), vec!["Escape".to_string()]);
        kb
    }

    #[test]
    fn bindings_are_inverted_per_key() {
        let handler = InputHandler::new(bindings());

        assert_eq!(
            handler.bindings.get("right").map(String::as_str),
            Some("nav.next")
        );
        assert_eq!(
            handler.bindings.get("escape").map(String::as_str),
            Some("lightbox.close")
        );
    }

    #[test]
    fn forward_and_back_buttons_navigate() {
        let handler = InputHandler::new(bindings());

        let cmd = handler
            .handle_mouse_button(MouseButton::Forward, ElementState::Pressed)
            .unwrap();
        assert_eq!(cmd.id.as_str(), CommandId::NAV_NEXT);

        assert!(handler
            .handle_mouse_button(MouseButton::Forward, ElementState::Released)
            .is_none());
    }
}
