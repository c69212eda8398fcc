//! # Perftier
//!
//! Device capability tiers for an animated landing page.
//!
//! The landing page (hero animations, the orbiting ecosystem visualization,
//! blur and particle layers) asks one question before mounting expensive
//! effects: how much can this device take? This crate answers it.
//!
//! ## Pipeline
//!
//! ```text
//! SignalSource ──▶ classify() ──▶ PerformanceTier
//!                                      │
//!                                      ▼
//!                             derive_settings()
//!                                      │
//!                      ┌───────────────┼────────────────┐
//!                      ▼               ▼                ▼
//!               StyleClasses   PerformanceSettings  AnimationConfig
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use perftier::{classify, derive_settings, PerformanceTier, Signals};
//!
//! let signals = Signals::new().with_device_memory(3.0);
//! let tier = classify(Some(&signals));
//! assert_eq!(tier, PerformanceTier::Medium);
//!
//! let settings = derive_settings(tier);
//! assert!(!settings.enable_particles);
//! assert_eq!(settings.style_classes().class_name(), "perf-medium");
//! ```

pub mod animation;
pub mod classify;
pub mod error;
pub mod session;
pub mod settings;
pub mod signals;
pub mod style;
pub mod tier;

pub use animation::{to_animation_config, AnimationConfig, Easing};
pub use classify::{
    classify, explain, resolve_tier, resolve_tier_with, settings_for, tier_override,
    tier_override_with, Classification, Rule,
};
pub use error::{PerftierError, Result};
pub use session::PerformanceSession;
pub use settings::{derive_settings, PerformanceSettings};
pub use signals::{EffectiveConnectionType, HostSignals, SignalSource, Signals};
#[cfg(target_family = "wasm")]
pub use signals::BrowserSignals;
pub use style::{css_variables_declaration, to_css_variables, to_style_classes, StyleClasses};
pub use tier::PerformanceTier;
