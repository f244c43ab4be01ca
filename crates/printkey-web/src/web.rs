//! WebAssembly entry point and DOM-backed host capabilities.

use printkey_core::{
    HookError, HookResult, InterceptorConfig, KeyListener, KeySource, KeyboardEvent, Modifiers,
    PrintHost, PrintShortcutInterceptor,
};
use std::cell::Cell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

thread_local! {
    /// Set once an interceptor is attached to the page's document.
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// A DOM event viewed as a key press.
///
/// Real `KeyboardEvent`s are read through their accessors. Any other event
/// object is read property by property, so synthetic records with missing
/// or mistyped fields read as absent.
pub struct DomKeyEvent {
    event: web_sys::Event,
}

impl DomKeyEvent {
    pub fn new(event: web_sys::Event) -> Self {
        Self { event }
    }

    fn keyboard(&self) -> Option<&web_sys::KeyboardEvent> {
        self.event.dyn_ref::<web_sys::KeyboardEvent>()
    }

    fn string_property(&self, name: &str) -> Option<String> {
        js_sys::Reflect::get(self.event.as_ref(), &JsValue::from_str(name))
            .ok()?
            .as_string()
    }

    fn bool_property(&self, name: &str) -> bool {
        js_sys::Reflect::get(self.event.as_ref(), &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.as_bool())
            .unwrap_or(false)
    }
}

impl KeyboardEvent for DomKeyEvent {
    fn key(&self) -> Option<String> {
        match self.keyboard() {
            Some(event) => Some(event.key()),
            None => self.string_property("key"),
        }
    }

    fn modifiers(&self) -> Modifiers {
        match self.keyboard() {
            Some(event) => Modifiers {
                shift: event.shift_key(),
                ctrl: event.ctrl_key(),
                alt: event.alt_key(),
                meta: event.meta_key(),
            },
            None => Modifiers {
                shift: self.bool_property("shiftKey"),
                ctrl: self.bool_property("ctrlKey"),
                alt: self.bool_property("altKey"),
                meta: self.bool_property("metaKey"),
            },
        }
    }

    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn default_prevented(&self) -> bool {
        self.event.default_prevented()
    }
}

/// Document handle used as the keydown event source.
pub struct DomDocument {
    document: web_sys::Document,
}

impl DomDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// The current window's document.
    pub fn current() -> HookResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| HookError::Listener("No document available".to_string()))?;
        Ok(Self::new(document))
    }
}

impl KeySource for DomDocument {
    fn add_keydown_listener(&self, listener: KeyListener) -> HookResult<()> {
        let on_keydown = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let event = DomKeyEvent::new(event);
            // Rethrown so the page's own error reporting sees it.
            listener(&event).map_err(to_js_error)
        }) as Box<dyn Fn(web_sys::Event) -> Result<(), JsValue>>);

        self.document
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
            .map_err(|e| HookError::Listener(format!("{:?}", e)))?;

        // Page lifetime; there is no teardown.
        on_keydown.forget();
        Ok(())
    }
}

/// Print capability backed by `window.print()`.
pub struct WindowPrint {
    window: web_sys::Window,
}

impl WindowPrint {
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }

    pub fn current() -> HookResult<Self> {
        web_sys::window()
            .map(Self::new)
            .ok_or_else(|| HookError::Print("No window available".to_string()))
    }
}

impl PrintHost for WindowPrint {
    fn request_print(&self) -> HookResult<()> {
        self.window
            .print()
            .map_err(|e| HookError::Print(format!("{:?}", e)))
    }
}

fn to_js_error(error: HookError) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}

fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("Logger already initialized");
    }
}

/// Attach an interceptor for `config` to the current document.
///
/// Only one interceptor is attached per page; later calls fail with
/// `HookError::Listener` and leave the existing listener in place.
pub fn install(config: &InterceptorConfig) -> HookResult<()> {
    if INSTALLED.with(Cell::get) {
        return Err(HookError::Listener(
            "Print shortcut already installed".to_string(),
        ));
    }

    let document = DomDocument::current()?;
    let interceptor = PrintShortcutInterceptor::with_config(WindowPrint::current()?, config)?;
    interceptor.attach(&document)?;
    INSTALLED.with(|installed| installed.set(true));
    Ok(())
}

/// Whether `install` has attached an interceptor to this page.
pub fn is_installed() -> bool {
    INSTALLED.with(Cell::get)
}

/// Install the print shortcut from JavaScript.
///
/// `config_json` is an optional JSON `InterceptorConfig`; omitted fields
/// take their defaults.
#[wasm_bindgen]
pub fn install_print_shortcut(config_json: Option<String>) -> Result<(), JsValue> {
    init_logging();

    let config = match config_json {
        Some(json) => InterceptorConfig::from_json(&json).map_err(to_js_error)?,
        None => InterceptorConfig::default(),
    };
    install(&config).map_err(|e| {
        log::error!("Failed to install print shortcut: {}", e);
        to_js_error(e)
    })
}

/// Initialize logging and attach the default Ctrl+p interceptor.
#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn run_wasm() -> Result<(), JsValue> {
    init_logging();
    log::info!("Starting PrintKey (WASM)");

    install(&InterceptorConfig::default()).map_err(|e| {
        log::error!("Failed to install print shortcut: {}", e);
        to_js_error(e)
    })
}
