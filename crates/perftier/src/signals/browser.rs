//! Browser signal probe (wasm targets).
//!
//! `navigator.deviceMemory` and `navigator.connection` are not part of the
//! stable web-sys surface, so they are read reflectively. Any property that
//! is missing or throws is reported as absent.

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Window;

use super::{EffectiveConnectionType, SignalSource};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Signal source backed by `window` and `navigator`.
#[derive(Debug, Clone)]
pub struct BrowserSignals {
    window: Window,
}

impl BrowserSignals {
    /// Attach to the global window.
    ///
    /// Returns `None` outside an interactive context (workers, server-side
    /// rendering), in which case callers classify with no source.
    pub fn detect() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }

    fn navigator_prop(&self, key: &str) -> Option<JsValue> {
        let navigator = self.window.navigator();
        Reflect::get(navigator.as_ref(), &JsValue::from_str(key))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    }
}

impl SignalSource for BrowserSignals {
    fn prefers_reduced_motion(&self) -> Option<bool> {
        match self.window.match_media(REDUCED_MOTION_QUERY) {
            Ok(Some(query)) => Some(query.matches()),
            _ => None,
        }
    }

    fn device_memory_gb(&self) -> Option<f64> {
        self.navigator_prop("deviceMemory")
            .and_then(|v| v.as_f64())
            .filter(|gb| gb.is_finite())
    }

    fn hardware_concurrency(&self) -> Option<u32> {
        let cores = self.window.navigator().hardware_concurrency();
        (cores.is_finite() && cores >= 1.0).then(|| cores as u32)
    }

    fn effective_type(&self) -> Option<EffectiveConnectionType> {
        let connection = self.navigator_prop("connection")?;
        Reflect::get(&connection, &JsValue::from_str("effectiveType"))
            .ok()
            .and_then(|v| v.as_string())
            .and_then(|s| EffectiveConnectionType::parse(&s))
    }

    fn user_agent(&self) -> Option<String> {
        self.window.navigator().user_agent().ok()
    }

    fn viewport_width(&self) -> Option<u32> {
        self.window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .filter(|w| w.is_finite() && *w >= 0.0)
            .map(|w| w as u32)
    }
}
