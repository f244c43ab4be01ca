//! Interceptor configuration.

use crate::error::{HookError, HookResult};
use crate::shortcuts::{KeyMatch, Shortcut};
use serde::{Deserialize, Serialize};

/// Configuration for the print shortcut interceptor.
///
/// Every field has a default, so `{}` yields the Ctrl+p shortcut with
/// literal key comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterceptorConfig {
    /// Key identifier that triggers printing.
    pub key: String,
    /// Whether the control modifier must be held.
    pub ctrl: bool,
    /// Whether the shift modifier must be held.
    pub shift: bool,
    /// How the key identifier is compared.
    pub key_match: KeyMatch,
}

impl Default for InterceptorConfig {
    fn default() -> Self {
        Self {
            key: "p".to_string(),
            ctrl: true,
            shift: false,
            key_match: KeyMatch::Exact,
        }
    }
}

impl InterceptorConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> HookResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| HookError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that can never match.
    pub fn validate(&self) -> HookResult<()> {
        if self.key.is_empty() {
            return Err(HookError::Config("Shortcut key must not be empty".to_string()));
        }
        Ok(())
    }

    /// The shortcut this configuration describes.
    pub fn shortcut(&self) -> Shortcut {
        Shortcut::new(self.key.clone(), self.ctrl, self.shift, "Open print dialog")
    }
}
