//! Perftier CLI.
//!
//! Classifies a device into a performance tier from explicit flags, a JSON
//! signal profile, or the host machine, and prints the derived settings.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use perftier::{
    derive_settings, explain, tier_override, AnimationConfig, Classification,
    EffectiveConnectionType, HostSignals, PerformanceSettings, PerformanceTier, Rule,
    SignalSource, Signals,
};

mod ui;

#[derive(Parser)]
#[command(name = "perftier")]
#[command(about = "Perftier - device capability tiers for animated landing pages")]
#[command(version)]
struct Cli {
    /// Log classification decisions (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify an explicit set of signals
    Classify {
        #[command(flatten)]
        signals: SignalArgs,

        /// JSON signal profile (flags override its values)
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Classify with no signal source at all
        #[arg(
            long,
            conflicts_with_all = [
                "profile",
                "reduced_motion",
                "memory",
                "cores",
                "connection",
                "user_agent",
                "viewport",
            ]
        )]
        headless: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Classify the machine this command runs on
    Detect {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the settings record for one tier
    Settings {
        /// Tier name (high, medium, low)
        tier: PerformanceTier,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the full settings table
    Table {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Individual signal flags.
#[derive(Args, Default)]
struct SignalArgs {
    /// User prefers reduced motion
    #[arg(long)]
    reduced_motion: bool,

    /// Device memory in GB
    #[arg(short, long)]
    memory: Option<f64>,

    /// Logical CPU cores
    #[arg(short, long)]
    cores: Option<u32>,

    /// Effective connection type (slow-2g, 2g, 3g, 4g)
    #[arg(long)]
    connection: Option<EffectiveConnectionType>,

    /// User-agent string
    #[arg(short, long)]
    user_agent: Option<String>,

    /// Viewport width in logical pixels
    #[arg(long)]
    viewport: Option<u32>,
}

impl SignalArgs {
    fn into_signals(self) -> Signals {
        Signals {
            reduced_motion: self.reduced_motion.then_some(true),
            device_memory_gb: self.memory,
            hardware_concurrency: self.cores,
            effective_type: self.connection,
            user_agent: self.user_agent,
            viewport_width: self.viewport,
        }
    }
}

#[derive(Args)]
struct OutputArgs {
    /// Force a tier (high, medium, low, auto); also read from PERFTIER_TIER
    #[arg(short, long)]
    tier: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

/// JSON report for a classification.
#[derive(Serialize)]
struct Report {
    tier: PerformanceTier,
    rule: Option<String>,
    signals: Option<Signals>,
    settings: PerformanceSettings,
    classes: Vec<String>,
    css: String,
    animation: AnimationConfig,
}

impl Report {
    fn new(tier: PerformanceTier, rule: Option<Rule>, signals: Option<Signals>) -> Self {
        let settings = derive_settings(tier);
        Self {
            tier,
            rule: rule.map(|r| r.to_string()),
            signals,
            settings,
            classes: settings.style_classes().iter().map(String::from).collect(),
            css: perftier::css_variables_declaration(&settings),
            animation: settings.animation_config(),
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Classify {
            signals,
            profile,
            headless,
            output,
        } => {
            let source = if headless {
                None
            } else {
                let base = match profile {
                    Some(path) => Signals::load(&path)?,
                    None => Signals::new(),
                };
                Some(base.overlay(signals.into_signals()))
            };
            let source_ref = source.as_ref().map(|s| s as &dyn SignalSource);
            run_classification(source_ref, &output)?;
        }

        Commands::Detect { output } => {
            let host = HostSignals::new();
            run_classification(Some(&host), &output)?;
        }

        Commands::Settings { tier, json } => {
            let settings = derive_settings(tier);
            if json {
                print_json(&settings)?;
            } else {
                ui::print_compact_header(env!("CARGO_PKG_VERSION"));
                println!();
                ui::settings(&settings);
            }
        }

        Commands::Table { json } => {
            let rows: Vec<PerformanceSettings> =
                PerformanceTier::ALL.into_iter().map(derive_settings).collect();
            if json {
                print_json(&rows)?;
            } else {
                ui::print_compact_header(env!("CARGO_PKG_VERSION"));
                println!();
                ui::table_header();
                for row in &rows {
                    ui::table_row(row);
                }
            }
        }
    }

    Ok(())
}

/// `--verbose` wins; otherwise RUST_LOG, defaulting to warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("perftier=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_classification(source: Option<&dyn SignalSource>, output: &OutputArgs) -> miette::Result<()> {
    let forced = tier_override(output.tier.as_deref())?;
    let signals = source.map(|s| s.snapshot());

    let (tier, rule) = match forced {
        Some(tier) => (tier, None),
        None => {
            let Classification { tier, rule } = explain(source);
            (tier, Some(rule))
        }
    };

    let report = Report::new(tier, rule, signals);
    if output.json {
        return print_json(&report);
    }

    ui::print_compact_header(env!("CARGO_PKG_VERSION"));
    match rule {
        Some(rule) => ui::classification(&Classification { tier, rule }),
        None => ui::forced(tier),
    }
    match &report.signals {
        Some(signals) => ui::signals(signals),
        None => ui::dim("No signal source: using the optimistic default."),
    }
    println!();
    ui::settings(&report.settings);
    println!();
    ui::derived(&report.classes.join(" "), &report.css, &report.animation);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> miette::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| miette::miette!("Failed to serialize output: {}", e))?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_signal_flags_parse() {
        let cli = Cli::try_parse_from([
            "perftier",
            "classify",
            "--memory",
            "3",
            "--connection",
            "2g",
            "--viewport",
            "500",
        ])
        .unwrap();

        match cli.command {
            Commands::Classify { signals, .. } => {
                let signals = signals.into_signals();
                assert_eq!(signals.device_memory_gb, Some(3.0));
                assert_eq!(signals.effective_type, Some(EffectiveConnectionType::Cellular2g));
                assert_eq!(signals.viewport_width, Some(500));
                assert_eq!(signals.reduced_motion, None);
            }
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn test_unknown_connection_rejected() {
        assert!(Cli::try_parse_from(["perftier", "classify", "--connection", "5g"]).is_err());
    }

    #[test]
    fn test_settings_tier_arg() {
        let cli = Cli::try_parse_from(["perftier", "settings", "low"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Settings { tier: PerformanceTier::Low, json: false }
        ));
    }

    #[test]
    fn test_report_for_low() {
        let report = Report::new(PerformanceTier::Low, Some(Rule::CpuCores), None);
        assert_eq!(report.classes, vec!["no-blur", "no-shadows", "perf-low", "reduce-motion"]);
        assert_eq!(report.rule.as_deref(), Some("cpu cores"));
        assert_eq!(report.animation.will_change, "auto");
    }

    #[test]
    fn test_tier_flag_parses() {
        assert_eq!(tier_override(Some("medium")).unwrap(), Some(PerformanceTier::Medium));
        assert_eq!(tier_override(Some("AUTO")).unwrap(), None);
        assert!(tier_override(Some("ultra")).is_err());
    }

    #[test]
    fn test_headless_rejects_signal_flags() {
        assert!(Cli::try_parse_from(["perftier", "classify", "--headless"]).is_ok());
        assert!(Cli::try_parse_from(["perftier", "classify", "--headless", "--cores", "2"]).is_err());
        assert!(Cli::try_parse_from(["perftier", "classify", "--headless", "--reduced-motion"]).is_err());
        assert!(Cli::try_parse_from(["perftier", "classify", "--headless", "--viewport", "500"]).is_err());
        assert!(Cli::try_parse_from(["perftier", "classify", "--headless", "-p", "x.json"]).is_err());
    }
}
