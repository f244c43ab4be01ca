//! Keyboard shortcut definitions and matching.

use crate::input::KeyboardEvent;
use serde::{Deserialize, Serialize};

/// How a shortcut's key is compared against an event's key identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMatch {
    /// Literal, case-sensitive comparison ("P" does not match "p").
    #[default]
    Exact,
    /// ASCII case-insensitive comparison.
    IgnoreCase,
}

impl KeyMatch {
    fn compare(self, expected: &str, actual: &str) -> bool {
        match self {
            KeyMatch::Exact => expected == actual,
            KeyMatch::IgnoreCase => expected.eq_ignore_ascii_case(actual),
        }
    }
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub description: String,
}

impl Shortcut {
    pub fn new(
        key: impl Into<String>,
        ctrl: bool,
        shift: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            ctrl,
            shift,
            description: description.into(),
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+p").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key.as_str());
        parts.join("+")
    }

    /// Whether `event` triggers this shortcut.
    ///
    /// Required modifiers must be held; modifiers the shortcut does not
    /// require are ignored. A missing key identifier never matches.
    pub fn matches(&self, event: &dyn KeyboardEvent, key_match: KeyMatch) -> bool {
        let modifiers = event.modifiers();
        if self.ctrl && !modifiers.ctrl {
            return false;
        }
        if self.shift && !modifiers.shift {
            return false;
        }
        match event.key() {
            Some(key) => key_match.compare(&self.key, &key),
            None => false,
        }
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// The default print shortcut, Ctrl+p.
    pub fn print_shortcut() -> Shortcut {
        Shortcut::new("p", true, false, "Open print dialog")
    }

    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![Self::print_shortcut()]
    }
}
