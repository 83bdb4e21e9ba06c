#![forbid(unsafe_code)]

//! Showcase configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults (click step 10, hover step 5).
//! 2. A TOML file, from `--config` or `FKIT_DEMO_CONFIG`.
//! 3. Environment overrides: `FKIT_DEMO_CLICK_STEP`, `FKIT_DEMO_HOVER_STEP`,
//!    `FKIT_DEMO_LOG_JSON`.
//!
//! ```toml
//! # fkit-demo.toml
//! click_step = 10
//! hover_step = 5
//! log_json = false
//!
//! [initial_size]
//! width = 1024
//! height = 768
//! ```

use std::env;
use std::path::{Path, PathBuf};

use fkit_core::geometry::Size;
use fkit_runtime::counter::{Step, StepError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "FKIT_DEMO_CONFIG";
pub const CLICK_STEP_VAR: &str = "FKIT_DEMO_CLICK_STEP";
pub const HOVER_STEP_VAR: &str = "FKIT_DEMO_HOVER_STEP";
pub const LOG_JSON_VAR: &str = "FKIT_DEMO_LOG_JSON";

/// Errors raised while assembling a [`ShowcaseConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{var}: {source}")]
    Step {
        var: &'static str,
        #[source]
        source: StepError,
    },
}

/// Settings for the scripted showcase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Amount added per click.
    pub click_step: u64,
    /// Amount added per hover.
    pub hover_step: u64,
    /// Window size before the first resize event.
    pub initial_size: Size,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            click_step: 10,
            hover_step: 5,
            initial_size: Size::new(1024, 768),
            log_json: false,
        }
    }
}

impl ShowcaseConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Resolve the full configuration from the process environment.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        load_with(explicit_path, &env_get)
    }

    /// Apply environment overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(&env_get)
    }

    fn apply_env_with<F: Fn(&str) -> Option<String>>(&mut self, get: &F) -> Result<(), ConfigError> {
        if let Some(step) = step_with(CLICK_STEP_VAR, get)? {
            self.click_step = step.get();
        }
        if let Some(step) = step_with(HOVER_STEP_VAR, get)? {
            self.hover_step = step.get();
        }
        if let Some(flag) = env_flag_with(LOG_JSON_VAR, get) {
            self.log_json = flag;
        }
        Ok(())
    }

    #[must_use]
    pub fn click_step(&self) -> Step {
        Step::new(self.click_step)
    }

    #[must_use]
    pub fn hover_step(&self) -> Step {
        Step::new(self.hover_step)
    }
}

fn env_get(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn load_with<F: Fn(&str) -> Option<String>>(
    explicit_path: Option<&Path>,
    get: &F,
) -> Result<ShowcaseConfig, ConfigError> {
    let path = explicit_path
        .map(Path::to_path_buf)
        .or_else(|| get(CONFIG_PATH_VAR).map(PathBuf::from));
    let mut config = match path {
        Some(path) => ShowcaseConfig::from_toml_file(path)?,
        None => ShowcaseConfig::default(),
    };
    config.apply_env_with(get)?;
    Ok(config)
}

fn step_with<F: Fn(&str) -> Option<String>>(
    var: &'static str,
    get: &F,
) -> Result<Option<Step>, ConfigError> {
    get(var)
        .map(|raw| raw.parse::<Step>())
        .transpose()
        .map_err(|source| ConfigError::Step { var, source })
}

/// `Some(true)` for "1"/"true", `Some(false)` for any other set value.
fn env_flag_with<F: Fn(&str) -> Option<String>>(name: &str, get: &F) -> Option<bool> {
    get(name).map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}
