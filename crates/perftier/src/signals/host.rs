//! Native host signal probe.
//!
//! Reads what a native host can actually know (core count, installed memory)
//! and takes the presentation-only signals from environment variables:
//!
//! - `PERFTIER_REDUCED_MOTION` (`1`, `true`, `yes`, `reduce`)
//! - `PERFTIER_EFFECTIVE_TYPE` (`slow-2g`, `2g`, `3g`, `4g`)
//! - `PERFTIER_USER_AGENT`
//! - `PERFTIER_VIEWPORT_WIDTH`

use super::{EffectiveConnectionType, SignalSource};

pub const REDUCED_MOTION_VAR: &str = "PERFTIER_REDUCED_MOTION";
pub const EFFECTIVE_TYPE_VAR: &str = "PERFTIER_EFFECTIVE_TYPE";
pub const USER_AGENT_VAR: &str = "PERFTIER_USER_AGENT";
pub const VIEWPORT_WIDTH_VAR: &str = "PERFTIER_VIEWPORT_WIDTH";

/// Environment lookup used by [`HostSignals`].
type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Signal source backed by the running machine and its environment.
pub struct HostSignals {
    env: EnvLookup,
}

impl HostSignals {
    /// Read signals from the process environment.
    pub fn new() -> Self {
        Self::with_env(env_var)
    }

    /// Read the `PERFTIER_*` variables through `lookup` instead of the
    /// process environment. Blank values are treated as unset.
    pub fn with_env(lookup: impl Fn(&str) -> Option<String> + 'static) -> Self {
        Self {
            env: Box::new(move |name: &str| lookup(name).filter(|v| !v.trim().is_empty())),
        }
    }

    fn var(&self, name: &str) -> Option<String> {
        (self.env)(name)
    }
}

impl Default for HostSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HostSignals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostSignals").finish_non_exhaustive()
    }
}

impl SignalSource for HostSignals {
    fn prefers_reduced_motion(&self) -> Option<bool> {
        self.var(REDUCED_MOTION_VAR).map(|v| parse_flag(&v))
    }

    fn device_memory_gb(&self) -> Option<f64> {
        total_memory_kb().map(|kb| kb as f64 / (1024.0 * 1024.0))
    }

    fn hardware_concurrency(&self) -> Option<u32> {
        match std::thread::available_parallelism() {
            Ok(n) => u32::try_from(n.get()).ok(),
            Err(e) => {
                tracing::trace!("available_parallelism unavailable: {}", e);
                None
            }
        }
    }

    fn effective_type(&self) -> Option<EffectiveConnectionType> {
        self.var(EFFECTIVE_TYPE_VAR).and_then(|v| EffectiveConnectionType::parse(&v))
    }

    fn user_agent(&self) -> Option<String> {
        self.var(USER_AGENT_VAR)
    }

    fn viewport_width(&self) -> Option<u32> {
        self.var(VIEWPORT_WIDTH_VAR).and_then(|v| match v.trim().parse::<u32>() {
            Ok(width) => Some(width),
            Err(e) => {
                tracing::trace!("ignoring {}={:?}: {}", VIEWPORT_WIDTH_VAR, v, e);
                None
            }
        })
    }
}

/// Non-empty process environment variable.
pub(crate) fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "reduce"
    )
}

/// Installed memory in kB.
#[cfg(target_os = "linux")]
fn total_memory_kb() -> Option<u64> {
    let meminfo = match std::fs::read_to_string("/proc/meminfo") {
        Ok(s) => s,
        Err(e) => {
            tracing::trace!("cannot read /proc/meminfo: {}", e);
            return None;
        }
    };
    parse_mem_total(&meminfo)
}

#[cfg(not(target_os = "linux"))]
fn total_memory_kb() -> Option<u64> {
    None
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_mem_total(meminfo: &str) -> Option<u64> {
    meminfo
        .lines()
        .find(|line| line.starts_with("MemTotal:"))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|kb| kb.parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::classify::classify;
    use crate::tier::PerformanceTier;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("reduce"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("no-preference"));
    }

    #[test]
    fn test_parse_mem_total() {
        let meminfo = "MemTotal:       16305452 kB\nMemFree:         1234567 kB\n";
        assert_eq!(parse_mem_total(meminfo), Some(16305452));
        assert_eq!(parse_mem_total("MemFree: 10 kB\n"), None);
        assert_eq!(parse_mem_total("MemTotal: lots kB\n"), None);
    }

    fn host_with(vars: &[(&'static str, &'static str)]) -> HostSignals {
        let vars: HashMap<&'static str, &'static str> = vars.iter().copied().collect();
        HostSignals::with_env(move |name: &str| vars.get(name).map(|v| v.to_string()))
    }

    #[test]
    fn test_env_signals_read() {
        let host = host_with(&[
            (REDUCED_MOTION_VAR, "reduce"),
            (EFFECTIVE_TYPE_VAR, "3g"),
            (USER_AGENT_VAR, "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X)"),
            (VIEWPORT_WIDTH_VAR, " 390 "),
        ]);

        assert_eq!(host.prefers_reduced_motion(), Some(true));
        assert_eq!(host.effective_type(), Some(EffectiveConnectionType::Cellular3g));
        assert_eq!(
            host.user_agent().as_deref(),
            Some("Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X)")
        );
        assert_eq!(host.viewport_width(), Some(390));
    }

    #[test]
    fn test_unset_env_signals_are_absent() {
        let host = host_with(&[]);
        assert_eq!(host.prefers_reduced_motion(), None);
        assert_eq!(host.effective_type(), None);
        assert_eq!(host.user_agent(), None);
        assert_eq!(host.viewport_width(), None);
    }

    #[test]
    fn test_bad_env_values_are_absent() {
        let host = host_with(&[
            (REDUCED_MOTION_VAR, "no-preference"),
            (EFFECTIVE_TYPE_VAR, "wifi"),
            (USER_AGENT_VAR, "   "),
            (VIEWPORT_WIDTH_VAR, "abc"),
        ]);

        assert_eq!(host.prefers_reduced_motion(), Some(false));
        assert_eq!(host.effective_type(), None);
        assert_eq!(host.user_agent(), None);
        assert_eq!(host.viewport_width(), None);
    }

    #[test]
    fn test_env_signals_drive_classification() {
        let host = host_with(&[(REDUCED_MOTION_VAR, "reduce"), (VIEWPORT_WIDTH_VAR, "abc")]);
        let snapshot = host.snapshot();
        assert_eq!(snapshot.reduced_motion, Some(true));
        assert_eq!(snapshot.viewport_width, None);
        assert_eq!(classify(Some(&host)), PerformanceTier::Low);
    }

    #[test]
    fn test_cores_are_reported() {
        let cores = HostSignals::new().hardware_concurrency();
        assert!(cores.map_or(true, |n| n >= 1));
    }
}
