//! Tier classification.
//!
//! Rules are evaluated top to bottom and the first match wins:
//!
//! 1. No signal source: `high` (headless or not yet mounted)
//! 2. Reduced-motion preference: `low`
//! 3. Device memory: <= 2 GB `low`, <= 4 GB `medium`
//! 4. CPU cores: <= 2 `low`, <= 4 `medium`
//! 5. Connection: `slow-2g`/`2g` `low`, `3g` `medium`
//! 6. Old mobile OS (iOS 7-9, Android 4-6): `low`
//! 7. Any mobile user agent: `medium`
//! 8. Viewport narrower than 768px: `medium`
//! 9. Otherwise `high`
//!
//! The order is a product decision; visual behavior was tuned against it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::settings::{derive_settings, PerformanceSettings};
use crate::signals::{env_var, EffectiveConnectionType, SignalSource};
use crate::tier::PerformanceTier;

/// Environment variable for a manual tier override.
pub const TIER_OVERRIDE_VAR: &str = "PERFTIER_TIER";

/// Viewports narrower than this are treated as mobile layouts.
pub const NARROW_VIEWPORT_PX: u32 = 768;

static LEGACY_MOBILE_OS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bOS [7-9]_\d|\bAndroid [4-6]\b").expect("valid legacy OS pattern"));

static MOBILE_DEVICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .expect("valid mobile pattern")
});

/// The rule that decided a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    NoSignalSource,
    ReducedMotion,
    DeviceMemory,
    CpuCores,
    Connection,
    LegacyMobileOs,
    MobileDevice,
    NarrowViewport,
    Capable,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NoSignalSource => "no signal source",
            Self::ReducedMotion => "reduced motion preferred",
            Self::DeviceMemory => "device memory",
            Self::CpuCores => "cpu cores",
            Self::Connection => "connection type",
            Self::LegacyMobileOs => "legacy mobile os",
            Self::MobileDevice => "mobile device",
            Self::NarrowViewport => "narrow viewport",
            Self::Capable => "no constraining signal",
        };
        f.write_str(s)
    }
}

/// A tier together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub tier: PerformanceTier,
    pub rule: Rule,
}

impl Classification {
    fn new(tier: PerformanceTier, rule: Rule) -> Self {
        Self { tier, rule }
    }
}

/// Classify the environment into a performance tier.
///
/// `None` means no signal source is available and yields the optimistic
/// `high` default. Never fails: absent signals are skipped.
pub fn classify(source: Option<&dyn SignalSource>) -> PerformanceTier {
    explain(source).tier
}

/// Classify and report which rule decided the tier.
pub fn explain(source: Option<&dyn SignalSource>) -> Classification {
    let classification = match source {
        Some(source) => evaluate(source),
        None => Classification::new(PerformanceTier::High, Rule::NoSignalSource),
    };
    tracing::debug!(
        tier = %classification.tier,
        rule = %classification.rule,
        "Performance tier detected"
    );
    classification
}

fn evaluate(source: &dyn SignalSource) -> Classification {
    use PerformanceTier::{High, Low, Medium};

    if source.prefers_reduced_motion() == Some(true) {
        return Classification::new(Low, Rule::ReducedMotion);
    }

    if let Some(gb) = source.device_memory_gb().filter(|gb| gb.is_finite()) {
        if gb <= 2.0 {
            return Classification::new(Low, Rule::DeviceMemory);
        }
        if gb <= 4.0 {
            return Classification::new(Medium, Rule::DeviceMemory);
        }
    }

    if let Some(cores) = source.hardware_concurrency() {
        if cores <= 2 {
            return Classification::new(Low, Rule::CpuCores);
        }
        if cores <= 4 {
            return Classification::new(Medium, Rule::CpuCores);
        }
    }

    match source.effective_type() {
        Some(EffectiveConnectionType::Slow2g | EffectiveConnectionType::Cellular2g) => {
            return Classification::new(Low, Rule::Connection);
        }
        Some(EffectiveConnectionType::Cellular3g) => {
            return Classification::new(Medium, Rule::Connection);
        }
        _ => {}
    }

    if let Some(ua) = source.user_agent() {
        if is_legacy_mobile_os(&ua) {
            return Classification::new(Low, Rule::LegacyMobileOs);
        }
        if is_mobile_device(&ua) {
            return Classification::new(Medium, Rule::MobileDevice);
        }
    }

    if let Some(width) = source.viewport_width() {
        if width < NARROW_VIEWPORT_PX {
            return Classification::new(Medium, Rule::NarrowViewport);
        }
    }

    Classification::new(High, Rule::Capable)
}

/// iOS 7-9 or Android 4-6.
pub fn is_legacy_mobile_os(user_agent: &str) -> bool {
    LEGACY_MOBILE_OS.is_match(user_agent)
}

/// Any phone or tablet signature.
pub fn is_mobile_device(user_agent: &str) -> bool {
    MOBILE_DEVICE.is_match(user_agent)
}

/// Classify and expand into a settings record in one step.
pub fn settings_for(source: Option<&dyn SignalSource>) -> PerformanceSettings {
    derive_settings(classify(source))
}

/// Manual tier override.
///
/// Priority order:
/// 1. Explicit `flag` (`auto` means no override; anything else must be a tier)
/// 2. `PERFTIER_TIER` environment variable (unrecognised values are logged and ignored)
pub fn tier_override(flag: Option<&str>) -> Result<Option<PerformanceTier>> {
    tier_override_with(flag, env_var)
}

/// [`tier_override`] with an explicit environment lookup.
pub fn tier_override_with<F>(flag: Option<&str>, env: F) -> Result<Option<PerformanceTier>>
where
    F: Fn(&str) -> Option<String>,
{
    match flag {
        Some(value) if is_auto(value) => Ok(None),
        Some(value) => value.parse::<PerformanceTier>().map(Some),
        None => Ok(env_override(&env)),
    }
}

fn env_override<F>(env: &F) -> Option<PerformanceTier>
where
    F: Fn(&str) -> Option<String>,
{
    let value = env(TIER_OVERRIDE_VAR)?;
    let tier = PerformanceTier::parse(&value);
    if tier.is_none() && !is_auto(&value) {
        tracing::warn!("Ignoring {}={:?}: not a tier name", TIER_OVERRIDE_VAR, value);
    }
    tier
}

fn is_auto(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("auto")
}

/// Resolve the tier: override first, then classification from `source`.
///
/// Never fails. An unrecognised flag is logged and skipped, leaving the
/// environment variable and then classification to decide.
pub fn resolve_tier(flag: Option<&str>, source: Option<&dyn SignalSource>) -> PerformanceTier {
    resolve_tier_with(flag, source, env_var)
}

/// [`resolve_tier`] with an explicit environment lookup.
pub fn resolve_tier_with<F>(flag: Option<&str>, source: Option<&dyn SignalSource>, env: F) -> PerformanceTier
where
    F: Fn(&str) -> Option<String>,
{
    let forced = match tier_override_with(flag, &env) {
        Ok(tier) => tier,
        Err(e) => {
            tracing::warn!("{}", e);
            env_override(&env)
        }
    };
    forced.unwrap_or_else(|| classify(source))
}
