//! Per-tier presentation settings.
//!
//! The table below is contractual: presentation components were tuned
//! against these exact values.

use serde::{Deserialize, Serialize};

use crate::tier::PerformanceTier;

/// Flags controlling which visual effects a view enables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSettings {
    /// The tier these settings were derived from.
    pub tier: PerformanceTier,
    /// Skip non-essential motion entirely.
    pub reduce_motion: bool,
    /// Mount backdrop blur layers.
    pub enable_blur: bool,
    /// Render drop shadows and glows.
    pub enable_shadows: bool,
    /// Mount the particle field.
    pub enable_particles: bool,
    /// Scale applied to every animation duration (1.0 = baseline).
    pub animation_duration_multiplier: f64,
    /// Upper bound on simultaneously animated elements.
    pub max_animated_elements: u32,
    /// Allow 3D transforms for the orbit visualization.
    #[serde(rename = "enable3DTransforms")]
    pub enable_3d_transforms: bool,
}

/// Settings table, indexed by tier discriminant (low, medium, high).
const SETTINGS_TABLE: [PerformanceSettings; 3] = [
    PerformanceSettings {
        tier: PerformanceTier::Low,
        reduce_motion: true,
        enable_blur: false,
        enable_shadows: false,
        enable_particles: false,
        animation_duration_multiplier: 0.5,
        max_animated_elements: 20,
        enable_3d_transforms: false,
    },
    PerformanceSettings {
        tier: PerformanceTier::Medium,
        reduce_motion: false,
        enable_blur: true,
        enable_shadows: true,
        enable_particles: false,
        animation_duration_multiplier: 0.8,
        max_animated_elements: 50,
        enable_3d_transforms: true,
    },
    PerformanceSettings {
        tier: PerformanceTier::High,
        reduce_motion: false,
        enable_blur: true,
        enable_shadows: true,
        enable_particles: true,
        animation_duration_multiplier: 1.0,
        max_animated_elements: 100,
        enable_3d_transforms: true,
    },
];

/// Look up the settings record for a tier.
pub fn derive_settings(tier: PerformanceTier) -> PerformanceSettings {
    SETTINGS_TABLE[tier as usize]
}

impl PerformanceSettings {
    /// Settings for a specific tier.
    pub fn for_tier(tier: PerformanceTier) -> Self {
        derive_settings(tier)
    }
}

impl Default for PerformanceSettings {
    fn default() -> Self {
        derive_settings(PerformanceTier::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_tier() {
        for tier in PerformanceTier::ALL {
            assert_eq!(derive_settings(tier).tier, tier);
        }
    }

    #[test]
    fn test_high_settings() {
        let s = derive_settings(PerformanceTier::High);
        assert!(!s.reduce_motion);
        assert!(s.enable_blur);
        assert!(s.enable_shadows);
        assert!(s.enable_particles);
        assert_eq!(s.animation_duration_multiplier, 1.0);
        assert_eq!(s.max_animated_elements, 100);
        assert!(s.enable_3d_transforms);
    }

    #[test]
    fn test_medium_settings() {
        let s = derive_settings(PerformanceTier::Medium);
        assert!(!s.reduce_motion);
        assert!(s.enable_blur);
        assert!(s.enable_shadows);
        assert!(!s.enable_particles);
        assert_eq!(s.animation_duration_multiplier, 0.8);
        assert_eq!(s.max_animated_elements, 50);
        assert!(s.enable_3d_transforms);
    }

    #[test]
    fn test_low_settings() {
        let s = derive_settings(PerformanceTier::Low);
        assert!(s.reduce_motion);
        assert!(!s.enable_blur);
        assert!(!s.enable_shadows);
        assert!(!s.enable_particles);
        assert_eq!(s.animation_duration_multiplier, 0.5);
        assert_eq!(s.max_animated_elements, 20);
        assert!(!s.enable_3d_transforms);
    }

    #[test]
    fn test_default_is_high() {
        assert_eq!(PerformanceSettings::default(), derive_settings(PerformanceTier::High));
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(derive_settings(PerformanceTier::Low)).unwrap();
        assert_eq!(json["tier"], "low");
        assert_eq!(json["reduceMotion"], true);
        assert_eq!(json["animationDurationMultiplier"], 0.5);
        assert_eq!(json["maxAnimatedElements"], 20);
        assert_eq!(json["enable3DTransforms"], false);
    }
}
