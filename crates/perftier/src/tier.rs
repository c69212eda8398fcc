//! Performance tiers.
//!
//! Three presentation profiles for the landing page:
//! - High: desktop-class devices (blur, particles, 3D orbits)
//! - Medium: mobile or mid-range devices (no particles, shorter animations)
//! - Low: constrained devices or reduced-motion users (flat, minimal motion)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PerftierError;

/// Device performance tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTier {
    /// Constrained device or reduced-motion preference.
    Low = 0,
    /// Mobile, mid-range hardware, or a 3G connection.
    Medium = 1,
    /// Capable device. Also the optimistic default before detection runs.
    #[default]
    High = 2,
}

impl PerformanceTier {
    /// All tiers, highest first.
    pub const ALL: [PerformanceTier; 3] = [Self::High, Self::Medium, Self::Low];

    /// Lowercase name used in class names and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Parse a tier name or alias.
    ///
    /// Returns `None` for `auto`, the empty string and anything unrecognised,
    /// which callers treat as "no override".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" | "full" | "premium" => Some(Self::High),
            "medium" | "balanced" => Some(Self::Medium),
            "low" | "lite" | "minimal" => Some(Self::Low),
            _ => None,
        }
    }

    /// Whether this tier mounts the expensive effects at all.
    pub fn is_low(&self) -> bool {
        matches!(self, Self::Low)
    }
}

impl std::fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PerformanceTier {
    type Err = PerftierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| PerftierError::UnknownTier {
            value: s.to_string(),
        })
    }
}
