//! Command-line arguments and session configuration.
//!
//! [`Args`] is the raw clap surface. It folds into a [`SessionConfig`],
//! whose [`validate()`](SessionConfig::validate) checks the settings the
//! menu loop relies on before any prompt is shown.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use collbench_chart::DEFAULT_CHART_PATH;
use collbench_core::{ProbePlan, DEFAULT_PROBE_COUNT, DEFAULT_PROBE_SEED};

/// Number of values the original interactive mode asks for per run.
pub const DEFAULT_MANUAL_PROBES: usize = 3;

/// How search-phase probe values are chosen.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProbeMode {
    /// Seeded uniform sampling from `[0, size)`.
    #[default]
    Random,
    /// Values typed in at the prompt after each insert phase.
    Manual,
}

/// collbench args.
#[derive(clap::Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Number of elements to insert. Prompted for when omitted.
    #[arg(long)]
    pub size: Option<u64>,
    /// How lookup probe values are chosen.
    #[arg(long, value_enum, default_value_t = ProbeMode::Random)]
    pub probe_mode: ProbeMode,
    /// Number of random lookups per search phase.
    #[arg(long, default_value_t = DEFAULT_PROBE_COUNT)]
    pub probes: usize,
    /// Number of values to prompt for in manual probe mode.
    #[arg(long, default_value_t = DEFAULT_MANUAL_PROBES)]
    pub manual_probes: usize,
    /// Seed for random probe values.
    #[arg(long, default_value_t = DEFAULT_PROBE_SEED)]
    pub seed: u64,
    /// Where to write the summary chart.
    #[arg(long, default_value = DEFAULT_CHART_PATH)]
    pub chart: PathBuf,
    /// Skip chart export on exit.
    #[arg(long)]
    pub no_chart: bool,
    /// Log filter directive, used when `RUST_LOG` is unset.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Fold the parsed args into a [`SessionConfig`].
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            size: self.size,
            probe_mode: self.probe_mode,
            probe_count: self.probes,
            manual_probe_count: self.manual_probes,
            seed: self.seed,
            chart: (!self.no_chart).then(|| self.chart.clone()),
        }
    }
}

/// Settings for one interactive session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Element count; `None` means ask at startup.
    pub size: Option<u64>,
    /// Probe selection policy. Default: random.
    pub probe_mode: ProbeMode,
    /// Random lookups per search phase. Default: 1000.
    pub probe_count: usize,
    /// Values prompted for in manual mode. Default: 3.
    pub manual_probe_count: usize,
    /// RNG seed for random probes. Default: 42.
    pub seed: u64,
    /// Chart output path; `None` disables export.
    pub chart: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: None,
            probe_mode: ProbeMode::Random,
            probe_count: DEFAULT_PROBE_COUNT,
            manual_probe_count: DEFAULT_MANUAL_PROBES,
            seed: DEFAULT_PROBE_SEED,
            chart: Some(PathBuf::from(DEFAULT_CHART_PATH)),
        }
    }
}

impl SessionConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.probe_mode {
            ProbeMode::Random if self.probe_count == 0 => Err(ConfigError::ZeroProbeCount {
                mode: ProbeMode::Random,
            }),
            ProbeMode::Manual if self.manual_probe_count == 0 => {
                Err(ConfigError::ZeroProbeCount {
                    mode: ProbeMode::Manual,
                })
            }
            _ => Ok(()),
        }
    }

    /// Probe plan for random mode. Manual plans are built per run from
    /// the values read at the prompt.
    pub fn random_plan(&self) -> ProbePlan {
        ProbePlan::Random {
            count: self.probe_count,
            seed: self.seed,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SessionConfig::validate()`] or logging setup.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The active probe mode would perform no lookups.
    ZeroProbeCount {
        /// The mode whose count is zero.
        mode: ProbeMode,
    },
    /// The log filter directive did not parse.
    InvalidLogFilter {
        /// The rejected directive.
        directive: String,
        /// Parser message.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroProbeCount { mode } => {
                write!(f, "probe count for {mode:?} mode must be at least 1")
            }
            Self::InvalidLogFilter { directive, reason } => {
                write!(f, "invalid log filter '{directive}': {reason}")
            }
        }
    }
}

impl Error for ConfigError {}
