//! Keyboard event records as seen by the interceptor.

use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Only the control key held.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };
}

/// A key-press event dispatched by the host.
///
/// Hosts wrap their native event type in this trait. `prevent_default`
/// takes `&self` because host events are shared handles, not owned values.
pub trait KeyboardEvent {
    /// Key identifier, or `None` if the record carries none.
    fn key(&self) -> Option<String>;

    /// Modifier state. Missing flags read as not held.
    fn modifiers(&self) -> Modifiers;

    /// Suppress the host's default action for this event.
    fn prevent_default(&self);

    /// Whether `prevent_default` has been called.
    fn default_prevented(&self) -> bool;
}

/// Plain in-memory key event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyEvent {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(flatten)]
    pub modifiers: Modifiers,
    #[serde(skip)]
    default_prevented: Cell<bool>,
}

impl KeyEvent {
    /// Create a key event with the given identifier and modifiers.
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: Some(key.into()),
            modifiers,
            default_prevented: Cell::new(false),
        }
    }

    /// Key pressed with only the control modifier held.
    pub fn ctrl(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::CTRL)
    }

    /// Key pressed without modifiers.
    pub fn plain(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::default())
    }
}

impl KeyboardEvent for KeyEvent {
    fn key(&self) -> Option<String> {
        self.key.clone()
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}
