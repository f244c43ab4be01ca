//! Host capabilities consumed by the interceptor.
//!
//! A host provides two things: a source of keydown events (the document)
//! and a way to open the print dialog. Both are injected, so the
//! interceptor never reaches for a global.

use crate::error::{HookError, HookResult};
use crate::input::KeyboardEvent;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Listener invoked synchronously for each keydown event.
pub type KeyListener = Box<dyn Fn(&dyn KeyboardEvent) -> HookResult<()>>;

/// Host capability that opens the print dialog.
pub trait PrintHost {
    /// Request the print dialog.
    fn request_print(&self) -> HookResult<()>;
}

impl<H: PrintHost + ?Sized> PrintHost for Rc<H> {
    fn request_print(&self) -> HookResult<()> {
        (**self).request_print()
    }
}

/// Source of keydown events, typically a document.
///
/// Listeners stay registered for the lifetime of the source.
pub trait KeySource {
    /// Register a keydown listener.
    fn add_keydown_listener(&self, listener: KeyListener) -> HookResult<()>;
}

impl<S: KeySource + ?Sized> KeySource for Rc<S> {
    fn add_keydown_listener(&self, listener: KeyListener) -> HookResult<()> {
        (**self).add_keydown_listener(listener)
    }
}

/// In-memory event source for testing and headless embedding.
#[derive(Default)]
pub struct MemoryKeySource {
    listeners: RefCell<Vec<KeyListener>>,
}

impl MemoryKeySource {
    /// Create a source with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Dispatch `event` to every listener in registration order.
    ///
    /// All listeners run even if one fails; the first error is returned.
    pub fn dispatch(&self, event: &dyn KeyboardEvent) -> HookResult<()> {
        let listeners = self.listeners.try_borrow().map_err(|_| {
            HookError::Listener("Dispatch while listeners are being modified".to_string())
        })?;
        let mut first_error = None;
        for listener in listeners.iter() {
            if let Err(e) = listener(event) {
                log::warn!("Keydown listener failed: {}", e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl KeySource for MemoryKeySource {
    fn add_keydown_listener(&self, listener: KeyListener) -> HookResult<()> {
        let mut listeners = self.listeners.try_borrow_mut().map_err(|_| {
            HookError::Listener("Cannot register a listener during dispatch".to_string())
        })?;
        listeners.push(listener);
        Ok(())
    }
}

/// Print host that counts requests instead of opening a dialog.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RecordingPrintHost {
    requests: Rc<Cell<usize>>,
    failure: Option<String>,
}

impl RecordingPrintHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose print capability fails with `message` (after counting).
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            requests: Rc::default(),
            failure: Some(message.into()),
        }
    }

    /// Number of print requests received so far.
    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl PrintHost for RecordingPrintHost {
    fn request_print(&self) -> HookResult<()> {
        self.requests.set(self.requests.get() + 1);
        match &self.failure {
            Some(message) => Err(HookError::Print(message.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyEvent;

    #[test]
    fn test_recording_host_counts() {
        let host = RecordingPrintHost::new();
        let observer = host.clone();
        host.request_print().unwrap();
        host.request_print().unwrap();
        assert_eq!(observer.requests(), 2);
    }

    #[test]
    fn test_failing_host() {
        let host = RecordingPrintHost::failing("no printer");
        assert_eq!(
            host.request_print(),
            Err(HookError::Print("no printer".to_string()))
        );
        assert_eq!(host.requests(), 1);
    }

    #[test]
    fn test_dispatch_runs_listeners_in_order() {
        let source = MemoryKeySource::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for id in 0..3 {
            let seen = seen.clone();
            source
                .add_keydown_listener(Box::new(move |event: &dyn KeyboardEvent| {
                    seen.borrow_mut().push((id, event.key()));
                    Ok(())
                }))
                .unwrap();
        }

        assert_eq!(source.listener_count(), 3);
        source.dispatch(&KeyEvent::plain("a")).unwrap();

        let seen = seen.borrow();
        assert_eq!(
            *seen,
            vec![
                (0, Some("a".to_string())),
                (1, Some("a".to_string())),
                (2, Some("a".to_string())),
            ]
        );
    }

    #[test]
    fn test_dispatch_returns_first_error_after_all_listeners() {
        let source = MemoryKeySource::new();
        let calls = Rc::new(Cell::new(0));

        source
            .add_keydown_listener(Box::new(|_: &dyn KeyboardEvent| {
                Err(HookError::Print("first".to_string()))
            }))
            .unwrap();
        source
            .add_keydown_listener(Box::new(|_: &dyn KeyboardEvent| {
                Err(HookError::Print("second".to_string()))
            }))
            .unwrap();
        let counter = calls.clone();
        source
            .add_keydown_listener(Box::new(move |_: &dyn KeyboardEvent| {
                counter.set(counter.get() + 1);
                Ok(())
            }))
            .unwrap();

        let result = source.dispatch(&KeyEvent::plain("a"));
        assert_eq!(result, Err(HookError::Print("first".to_string())));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_register_during_dispatch_fails() {
        let source = Rc::new(MemoryKeySource::new());
        let inner = Rc::downgrade(&source);
        let outcome = Rc::new(RefCell::new(None));
        let recorded = outcome.clone();

        source
            .add_keydown_listener(Box::new(move |_: &dyn KeyboardEvent| {
                if let Some(source) = inner.upgrade() {
                    let result =
                        source.add_keydown_listener(Box::new(|_: &dyn KeyboardEvent| Ok(())));
                    *recorded.borrow_mut() = Some(result);
                }
                Ok(())
            }))
            .unwrap();

        source.dispatch(&KeyEvent::plain("a")).unwrap();
        assert!(matches!(
            outcome.borrow().as_ref(),
            Some(Err(HookError::Listener(_)))
        ));
        assert_eq!(source.listener_count(), 1);
    }

    #[test]
    fn test_dispatch_without_listeners() {
        let source = MemoryKeySource::new();
        let event = KeyEvent::ctrl("p");
        source.dispatch(&event).unwrap();
        assert!(!event.default_prevented());
    }
}
