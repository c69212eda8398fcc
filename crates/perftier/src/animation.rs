//! Animation-engine adapter.
//!
//! Translates a settings record into the handful of knobs a tween engine
//! (GSAP-style `ease`, `force3D`, `will-change`) needs.

use std::time::Duration;

use serde::Serialize;

use crate::settings::PerformanceSettings;
use crate::tier::PerformanceTier;

/// Easing curve identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Easing {
    #[serde(rename = "power1.out")]
    Power1Out,
    #[serde(rename = "power2.out")]
    Power2Out,
}

impl Easing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Power1Out => "power1.out",
            Self::Power2Out => "power2.out",
        }
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `will-change` value for animated elements.
pub const WILL_CHANGE_PROMOTED: &str = "transform, opacity";
/// No proactive layer promotion.
pub const WILL_CHANGE_AUTO: &str = "auto";

/// Adapter record for the animation engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    pub tier: PerformanceTier,
    pub duration_multiplier: f64,
    pub ease: Easing,
    #[serde(rename = "force3D")]
    pub force_3d: bool,
    pub will_change: &'static str,
}

impl AnimationConfig {
    /// Scale a base duration in seconds.
    pub fn scale(&self, base: f64) -> f64 {
        base * self.duration_multiplier
    }

    /// Scale a base duration. Negative or non-finite results collapse to zero.
    pub fn scale_duration(&self, base: Duration) -> Duration {
        Duration::try_from_secs_f64(base.as_secs_f64() * self.duration_multiplier).unwrap_or_default()
    }
}

/// Build the animation adapter for a settings record.
pub fn to_animation_config(settings: &PerformanceSettings) -> AnimationConfig {
    let low = settings.tier.is_low();
    AnimationConfig {
        tier: settings.tier,
        duration_multiplier: settings.animation_duration_multiplier,
        ease: if low { Easing::Power1Out } else { Easing::Power2Out },
        force_3d: settings.enable_3d_transforms,
        will_change: if low { WILL_CHANGE_AUTO } else { WILL_CHANGE_PROMOTED },
    }
}

impl PerformanceSettings {
    pub fn animation_config(&self) -> AnimationConfig {
        to_animation_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::derive_settings;

    #[test]
    fn test_high_config() {
        let config = to_animation_config(&derive_settings(PerformanceTier::High));
        assert_eq!(config.ease, Easing::Power2Out);
        assert!(config.force_3d);
        assert_eq!(config.will_change, "transform, opacity");
        assert_eq!(config.scale(2.0), 2.0);
    }

    #[test]
    fn test_medium_config() {
        let config = to_animation_config(&derive_settings(PerformanceTier::Medium));
        assert_eq!(config.ease.as_str(), "power2.out");
        assert!(config.force_3d);
        assert_eq!(config.will_change, WILL_CHANGE_PROMOTED);
        assert!((config.scale(1.0) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_low_config() {
        let config = to_animation_config(&derive_settings(PerformanceTier::Low));
        assert_eq!(config.ease.as_str(), "power1.out");
        assert!(!config.force_3d);
        assert_eq!(config.will_change, "auto");
        assert_eq!(config.scale(3.0), 1.5);
        assert_eq!(
            config.scale_duration(Duration::from_millis(800)),
            Duration::from_millis(400)
        );
    }

    #[test]
    fn test_scale_duration_never_panics() {
        let mut config = to_animation_config(&derive_settings(PerformanceTier::High));
        let base = Duration::from_millis(600);

        config.duration_multiplier = -1.0;
        assert_eq!(config.scale_duration(base), Duration::ZERO);

        config.duration_multiplier = f64::NAN;
        assert_eq!(config.scale_duration(base), Duration::ZERO);

        config.duration_multiplier = f64::INFINITY;
        assert_eq!(config.scale_duration(base), Duration::ZERO);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(derive_settings(PerformanceTier::Low).animation_config()).unwrap();
        assert_eq!(json["ease"], "power1.out");
        assert_eq!(json["force3D"], false);
        assert_eq!(json["willChange"], "auto");
        assert_eq!(json["durationMultiplier"], 0.5);
    }
}
