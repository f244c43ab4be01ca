//! PrintKey Core Library
//!
//! Platform-agnostic interception of the print shortcut. Hosts supply the
//! key event source and the print capability; this crate decides when the
//! default action is suppressed and the print dialog requested.

pub mod config;
pub mod error;
pub mod host;
pub mod input;
pub mod interceptor;
pub mod shortcuts;

pub use config::InterceptorConfig;
pub use error::{HookError, HookResult};
pub use host::{KeyListener, KeySource, MemoryKeySource, PrintHost, RecordingPrintHost};
pub use input::{KeyEvent, KeyboardEvent, Modifiers};
pub use interceptor::{Interception, PrintShortcutInterceptor};
pub use shortcuts::{KeyMatch, Shortcut, ShortcutRegistry};
