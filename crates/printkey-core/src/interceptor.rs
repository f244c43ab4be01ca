//! The print shortcut interceptor.
//!
//! Each keydown event is checked once against the configured shortcut.
//! On a match the event's default action is suppressed first, then the
//! host's print capability is invoked. Non-matching events are left
//! untouched. No state is kept between events.

use crate::config::InterceptorConfig;
use crate::error::HookResult;
use crate::host::{KeySource, PrintHost};
use crate::input::KeyboardEvent;
use crate::shortcuts::{KeyMatch, Shortcut};

/// What the interceptor did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interception {
    /// Default action suppressed and print dialog requested.
    Printed,
    /// Event did not match; nothing was done.
    Ignored,
}

/// Intercepts the print shortcut and opens the host's print dialog.
pub struct PrintShortcutInterceptor<H: PrintHost> {
    shortcut: Shortcut,
    key_match: KeyMatch,
    host: H,
}

impl<H: PrintHost> PrintShortcutInterceptor<H> {
    /// Interceptor for the default Ctrl+p shortcut.
    pub fn new(host: H) -> Self {
        let config = InterceptorConfig::default();
        Self {
            shortcut: config.shortcut(),
            key_match: config.key_match,
            host,
        }
    }

    /// Interceptor for a validated configuration.
    pub fn with_config(host: H, config: &InterceptorConfig) -> HookResult<Self> {
        config.validate()?;
        Ok(Self {
            shortcut: config.shortcut(),
            key_match: config.key_match,
            host,
        })
    }

    /// The shortcut being intercepted.
    pub fn shortcut(&self) -> &Shortcut {
        &self.shortcut
    }

    /// Handle a single keydown event.
    ///
    /// Print failures are returned as-is; the default action has already
    /// been suppressed by then.
    pub fn handle(&self, event: &dyn KeyboardEvent) -> HookResult<Interception> {
        if !self.shortcut.matches(event, self.key_match) {
            return Ok(Interception::Ignored);
        }

        event.prevent_default();
        log::debug!("Intercepted {}, requesting print dialog", self.shortcut.format());
        self.host.request_print()?;
        Ok(Interception::Printed)
    }
}

impl<H: PrintHost + 'static> PrintShortcutInterceptor<H> {
    /// Register this interceptor as a keydown listener on `source`.
    ///
    /// The listener lives as long as the source does.
    pub fn attach<S: KeySource + ?Sized>(self, source: &S) -> HookResult<()> {
        let format = self.shortcut.format();
        source.add_keydown_listener(Box::new(move |event: &dyn KeyboardEvent| {
            self.handle(event).map(|_| ())
        }))?;
        log::info!("Print shortcut {} attached", format);
        Ok(())
    }
}
