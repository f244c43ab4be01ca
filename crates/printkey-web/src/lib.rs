//! PrintKey Browser Binding
//!
//! Hooks the print shortcut into a web page. The wasm build attaches a
//! keydown listener to the document that suppresses the browser's own
//! Ctrl+P handling and calls `window.print()` instead.

pub use printkey_core::{
    HookError, HookResult, Interception, InterceptorConfig, KeyMatch, PrintShortcutInterceptor,
};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{DomDocument, DomKeyEvent, WindowPrint, install, install_print_shortcut, is_installed};

#[cfg(all(target_arch = "wasm32", feature = "autostart"))]
pub use web::run_wasm;
