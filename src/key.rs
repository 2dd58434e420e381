//! Key bindings for widgets and host screens.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// A named key binding with help text.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Key codes that trigger this binding.
    pub keys: Vec<KeyCode>,
    /// Short help label, e.g. `"space"`.
    pub help: String,
    /// What the binding does, e.g. `"hold the timer"`.
    pub description: String,
}

impl Binding {
    /// Creates a binding for the given key codes.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: String::new(),
            description: String::new(),
        }
    }

    /// Sets the short help label.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Sets the description shown in help lines.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns true when the key message matches one of the bound keys.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        self.keys.contains(&key_msg.key)
    }
}
