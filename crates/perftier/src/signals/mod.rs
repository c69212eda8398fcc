//! Environment signal sources.
//!
//! The classifier never talks to a platform directly. It reads six optional
//! signals through [`SignalSource`], so it can run against a browser, the
//! host machine, a JSON profile, or a hand-built record in tests.
//!
//! - [`Signals`]: a static record (profiles, tests, CLI flags)
//! - [`HostSignals`]: best-effort probe of the native host
//! - `BrowserSignals`: `window`/`navigator` probe, wasm targets only

mod host;
#[cfg(target_family = "wasm")]
mod browser;

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PerftierError, Result};

pub use host::HostSignals;
pub(crate) use host::env_var;
#[cfg(target_family = "wasm")]
pub use browser::BrowserSignals;

/// Network effective connection type, as reported by the Network Information API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectiveConnectionType {
    #[serde(rename = "slow-2g")]
    Slow2g,
    #[serde(rename = "2g")]
    Cellular2g,
    #[serde(rename = "3g")]
    Cellular3g,
    #[serde(rename = "4g")]
    Cellular4g,
}

impl EffectiveConnectionType {
    /// Parse a reported type. Unrecognised values are `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "slow-2g" => Some(Self::Slow2g),
            "2g" => Some(Self::Cellular2g),
            "3g" => Some(Self::Cellular3g),
            "4g" => Some(Self::Cellular4g),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slow2g => "slow-2g",
            Self::Cellular2g => "2g",
            Self::Cellular3g => "3g",
            Self::Cellular4g => "4g",
        }
    }
}

impl std::fmt::Display for EffectiveConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectiveConnectionType {
    type Err = PerftierError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| PerftierError::UnknownConnection {
            value: s.to_string(),
        })
    }
}

/// Read-only access to environment signals.
///
/// Every method is best-effort. A source that cannot read a signal returns
/// `None` instead of failing; the classifier skips absent signals.
pub trait SignalSource {
    /// System-level reduced-motion preference.
    fn prefers_reduced_motion(&self) -> Option<bool> {
        None
    }

    /// Device memory in gigabytes.
    fn device_memory_gb(&self) -> Option<f64> {
        None
    }

    /// Logical CPU core count.
    fn hardware_concurrency(&self) -> Option<u32> {
        None
    }

    /// Network effective connection type.
    fn effective_type(&self) -> Option<EffectiveConnectionType> {
        None
    }

    /// User-agent string.
    fn user_agent(&self) -> Option<String> {
        None
    }

    /// Viewport width in logical pixels.
    fn viewport_width(&self) -> Option<u32> {
        None
    }

    /// Capture every signal into a static record.
    fn snapshot(&self) -> Signals {
        Signals {
            reduced_motion: self.prefers_reduced_motion(),
            device_memory_gb: self.device_memory_gb(),
            hardware_concurrency: self.hardware_concurrency(),
            effective_type: self.effective_type(),
            user_agent: self.user_agent(),
            viewport_width: self.viewport_width(),
        }
    }
}

/// A fixed set of signals.
///
/// Deserializes from a JSON signal profile whose keys follow the browser
/// API names:
///
/// ```json
/// { "deviceMemory": 4, "hardwareConcurrency": 8, "effectiveType": "4g" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Signals {
    #[serde(rename = "prefersReducedMotion", default, skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,

    #[serde(rename = "deviceMemory", default, skip_serializing_if = "Option::is_none")]
    pub device_memory_gb: Option<f64>,

    #[serde(rename = "hardwareConcurrency", default, skip_serializing_if = "Option::is_none")]
    pub hardware_concurrency: Option<u32>,

    #[serde(
        rename = "effectiveType",
        default,
        deserialize_with = "lenient_connection",
        skip_serializing_if = "Option::is_none"
    )]
    pub effective_type: Option<EffectiveConnectionType>,

    #[serde(rename = "userAgent", default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    #[serde(rename = "viewportWidth", default, skip_serializing_if = "Option::is_none")]
    pub viewport_width: Option<u32>,
}

/// Unknown connection types in a profile are absent, not errors.
fn lenient_connection<'de, D>(deserializer: D) -> std::result::Result<Option<EffectiveConnectionType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(EffectiveConnectionType::parse))
}

impl Signals {
    /// An empty record: a source that reports nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = Some(reduced);
        self
    }

    pub fn with_device_memory(mut self, gb: f64) -> Self {
        self.device_memory_gb = Some(gb);
        self
    }

    pub fn with_cores(mut self, cores: u32) -> Self {
        self.hardware_concurrency = Some(cores);
        self
    }

    pub fn with_effective_type(mut self, effective_type: EffectiveConnectionType) -> Self {
        self.effective_type = Some(effective_type);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_viewport_width(mut self, width: u32) -> Self {
        self.viewport_width = Some(width);
        self
    }

    /// Layer `overrides` on top of `self`. Signals present in `overrides` win.
    pub fn overlay(self, overrides: Signals) -> Self {
        Self {
            reduced_motion: overrides.reduced_motion.or(self.reduced_motion),
            device_memory_gb: overrides.device_memory_gb.or(self.device_memory_gb),
            hardware_concurrency: overrides.hardware_concurrency.or(self.hardware_concurrency),
            effective_type: overrides.effective_type.or(self.effective_type),
            user_agent: overrides.user_agent.or(self.user_agent),
            viewport_width: overrides.viewport_width.or(self.viewport_width),
        }
    }

    /// Whether no signal is reported at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Parse a signal profile from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PerftierError::InvalidProfile {
            message: e.to_string(),
        })
    }

    /// Load a signal profile from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| PerftierError::profile_read(path, e.to_string()))?;
        Self::from_json_str(&content)
    }
}

impl SignalSource for Signals {
    fn prefers_reduced_motion(&self) -> Option<bool> {
        self.reduced_motion
    }

    fn device_memory_gb(&self) -> Option<f64> {
        self.device_memory_gb
    }

    fn hardware_concurrency(&self) -> Option<u32> {
        self.hardware_concurrency
    }

    fn effective_type(&self) -> Option<EffectiveConnectionType> {
        self.effective_type
    }

    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }

    fn viewport_width(&self) -> Option<u32> {
        self.viewport_width
    }

    fn snapshot(&self) -> Signals {
        self.clone()
    }
}
