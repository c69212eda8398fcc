//! Per-view settings lifecycle.
//!
//! A view starts with the optimistic `high` record, since signals such as
//! viewport width only mean something once the view is presented. The host
//! calls [`PerformanceSession::mount`] from its after-mount hook; the record
//! is then held for the life of the view unless the host asks for a
//! [`PerformanceSession::refresh`].

use crate::animation::{to_animation_config, AnimationConfig};
use crate::classify::classify;
use crate::settings::{derive_settings, PerformanceSettings};
use crate::signals::SignalSource;
use crate::style::{to_style_classes, StyleClasses};
use crate::tier::PerformanceTier;

/// The single settings record held by a view.
#[derive(Debug, Clone, Default)]
pub struct PerformanceSession {
    settings: PerformanceSettings,
    mounted: bool,
}

impl PerformanceSession {
    /// A session holding the optimistic default.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session pinned to a tier, already mounted.
    pub fn with_tier(tier: PerformanceTier) -> Self {
        Self {
            settings: derive_settings(tier),
            mounted: true,
        }
    }

    /// Classify once the view is presented.
    ///
    /// Only the first call classifies; later calls keep the held record.
    pub fn mount(&mut self, source: Option<&dyn SignalSource>) -> PerformanceSettings {
        if !self.mounted {
            self.refresh(source);
        }
        self.settings
    }

    /// Re-run classification and replace the held record.
    pub fn refresh(&mut self, source: Option<&dyn SignalSource>) -> PerformanceSettings {
        let tier = classify(source);
        if tier != self.settings.tier {
            tracing::debug!(from = %self.settings.tier, to = %tier, "Performance tier changed");
        }
        self.settings = derive_settings(tier);
        self.mounted = true;
        self.settings
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn settings(&self) -> &PerformanceSettings {
        &self.settings
    }

    pub fn tier(&self) -> PerformanceTier {
        self.settings.tier
    }

    pub fn style_classes(&self) -> StyleClasses {
        to_style_classes(&self.settings)
    }

    pub fn animation_config(&self) -> AnimationConfig {
        to_animation_config(&self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::Signals;

    #[test]
    fn test_starts_optimistic() {
        let session = PerformanceSession::new();
        assert!(!session.is_mounted());
        assert_eq!(session.tier(), PerformanceTier::High);
        assert!(session.settings().enable_particles);
    }

    #[test]
    fn test_mount_classifies_once() {
        let mut session = PerformanceSession::new();
        let low = Signals::new().with_cores(2);
        assert_eq!(session.mount(Some(&low)).tier, PerformanceTier::Low);
        assert!(session.is_mounted());

        let fast = Signals::new().with_cores(16);
        assert_eq!(session.mount(Some(&fast)).tier, PerformanceTier::Low);
    }

    #[test]
    fn test_refresh_replaces_record() {
        let mut session = PerformanceSession::new();
        session.mount(Some(&Signals::new().with_viewport_width(400)));
        assert_eq!(session.tier(), PerformanceTier::Medium);

        session.refresh(Some(&Signals::new().with_viewport_width(1280)));
        assert_eq!(session.tier(), PerformanceTier::High);
    }

    #[test]
    fn test_mount_without_source_stays_high() {
        let mut session = PerformanceSession::new();
        assert_eq!(session.mount(None).tier, PerformanceTier::High);
        assert!(session.is_mounted());
    }

    #[test]
    fn test_derived_views() {
        let session = PerformanceSession::with_tier(PerformanceTier::Low);
        assert!(session.style_classes().contains("reduce-motion"));
        assert_eq!(session.animation_config().will_change, "auto");
    }
}
