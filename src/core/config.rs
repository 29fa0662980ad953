//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.stepwise/config.toml` unless `--config` points
//! elsewhere. A missing file simply means defaults; nothing is written.

use serde::Deserialize;
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct StepwiseConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub directory: Option<PathBuf>,
    pub max_entries: Option<usize>,
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    pub file: Option<PathBuf>,
    pub level: Option<String>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub directory: Option<PathBuf>,
    pub max_entries: Option<usize>,
    pub delay_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_MAX_ENTRIES: usize = 6;
pub const DEFAULT_DELAY_MS: u64 = 1000;
pub const DEFAULT_LOG_FILE: &str = "debug.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub directory: PathBuf,
    pub max_entries: usize,
    pub delay: Duration,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.stepwise/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".stepwise").join("config.toml"))
}

/// A parsed config file and where it came from (None = defaults, no file read).
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: StepwiseConfig,
    pub source: Option<PathBuf>,
}

/// Load config from `explicit` or the default location.
///
/// A missing default file yields defaults. An explicit path that doesn't
/// exist is an error. A malformed file returns `ConfigError::Parse`.
///
/// Runs before the log sink exists; the caller logs `source`.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(LoadedConfig::default()),
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: StepwiseConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok(LoadedConfig {
        config,
        source: Some(path),
    })
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &StepwiseConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &StepwiseConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Directory: CLI → env → config → current directory
    let directory = cli
        .directory
        .clone()
        .or_else(|| env("STEPWISE_DIR").map(PathBuf::from))
        .or_else(|| config.general.directory.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    // Delay: CLI → env → config → default
    let env_delay = env("STEPWISE_DELAY_MS")
        .map(|v| {
            v.parse::<u64>()
                .map_err(|e| ConfigError::Invalid(format!("STEPWISE_DELAY_MS={v}: {e}")))
        })
        .transpose()?;
    let delay_ms = cli
        .delay_ms
        .or(env_delay)
        .or(config.general.delay_ms)
        .unwrap_or(DEFAULT_DELAY_MS);

    let max_entries = cli
        .max_entries
        .or(config.general.max_entries)
        .unwrap_or(DEFAULT_MAX_ENTRIES);
    if max_entries == 0 {
        return Err(ConfigError::Invalid("max_entries must be at least 1".into()));
    }

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: env → config → default
    let log_level = match env("STEPWISE_LOG_LEVEL").or_else(|| config.logging.level.clone()) {
        Some(level) => LevelFilter::from_str(&level)
            .map_err(|_| ConfigError::Invalid(format!("unknown log level '{level}'")))?,
        None => DEFAULT_LOG_LEVEL,
    };

    Ok(ResolvedConfig {
        directory,
        max_entries,
        delay: Duration::from_millis(delay_ms),
        log_file,
        log_level,
    })
}
