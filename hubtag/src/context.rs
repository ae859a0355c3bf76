//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values
//! 3. Environment variables
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.

use libhubtag::config::ColorChoice;
use libhubtag::{Config, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable naming the config file
pub const ENV_CONFIG: &str = "HUBTAG_CONFIG";
/// Environment variable overriding the registry URL
pub const ENV_REGISTRY: &str = "HUBTAG_REGISTRY";
/// Environment variable overriding color output
pub const ENV_COLOR: &str = "HUBTAG_COLOR";

/// How much diagnostic output goes to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Warnings and errors only
    Normal,
    /// -v
    Verbose,
    /// -vv
    Debug,
    /// -vvv and beyond
    Trace,
}

impl VerbosityLevel {
    /// Maps the number of `-v` flags to a level
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            2 => VerbosityLevel::Debug,
            _ => VerbosityLevel::Trace,
        }
    }

    /// `tracing` filter directive for this level
    ///
    /// Dependencies stay at `warn` so only hubtag's own events get louder.
    pub fn filter_directive(&self) -> String {
        let level = match self {
            VerbosityLevel::Normal => "warn",
            VerbosityLevel::Verbose => "info",
            VerbosityLevel::Debug => "debug",
            VerbosityLevel::Trace => "trace",
        };
        format!("warn,hubtag={level},libhubtag={level}")
    }
}

/// Values given on the command line that take part in context resolution
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub registry: Option<String>,
    pub color: Option<ColorChoice>,
    pub verbose: u8,
}

/// Application context with resolved configuration and runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
    /// Resolved verbosity
    pub verbosity: VerbosityLevel,
}

impl AppContext {
    /// Build context with precedence: defaults > config file > env vars > CLI flags
    pub fn build(overrides: &CliOverrides) -> Result<Self> {
        Self::build_with_env(overrides, |key| env::var(key).ok())
    }

    /// Same as [`AppContext::build`] with an explicit environment lookup
    pub fn build_with_env<F>(overrides: &CliOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 1 + 2. Defaults, merged with the config file if one applies
        let explicit_path = overrides
            .config_path
            .clone()
            .or_else(|| lookup(ENV_CONFIG).map(PathBuf::from));
        let mut config = match explicit_path {
            Some(path) => Config::load(Some(path.as_path()))?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => Config::load(Some(path.as_path()))?,
                None => Config::default(),
            },
        };

        // 3. Environment variable overrides
        if let Some(url) = lookup(ENV_REGISTRY).filter(|v| !v.is_empty()) {
            config.registry.url = url;
        }
        if let Some(color) = lookup(ENV_COLOR) {
            config.output.color = ColorChoice::from(color.as_str());
        }

        // 4. CLI flag overrides (highest priority)
        if let Some(url) = &overrides.registry {
            config.registry.url = url.clone();
        }
        if let Some(color) = overrides.color {
            config.output.color = color;
        }

        Ok(Self {
            config,
            verbosity: VerbosityLevel::from_count(overrides.verbose),
        })
    }

    /// Color choice after resolution
    pub fn color(&self) -> ColorChoice {
        self.config.output.color
    }
}

/// Default config file location (~/.config/hubtag/config.yaml on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hubtag").join("config.yaml"))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
