use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

const ENV_PREFIX: &str = "OJ_MINI";
const DEFAULT_TEST_DIR: &str = "test";

#[cfg(windows)]
const DEFAULT_COMMAND: &str = ".\\a.exe";
#[cfg(not(windows))]
const DEFAULT_COMMAND: &str = "./a.out";

/// Settings shared by the subcommands. CLI flags override these.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub test_dir: PathBuf,
    pub command: String,
    pub timeout_secs: Option<f64>,
}

impl Settings {
    /// Defaults, then `OJ_MINI_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::from_source(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_source(env: Environment) -> Result<Self> {
        let settings: Settings = Config::builder()
            .set_default("test_dir", DEFAULT_TEST_DIR)?
            .set_default("command", DEFAULT_COMMAND)?
            .add_source(env)
            .build()
            .and_then(Config::try_deserialize)
            .context("invalid OJ_MINI_* settings")?;
        settings.timeout().context("invalid OJ_MINI_TIMEOUT_SECS")?;
        Ok(settings)
    }

    pub fn timeout(&self) -> Result<Option<Duration>> {
        self.timeout_secs.map_or(Ok(None), timeout_from_secs)
    }
}

/// Zero or less disables the limit. Infinite, NaN and out-of-range values are errors.
pub fn timeout_from_secs(secs: f64) -> Result<Option<Duration>> {
    if secs <= 0.0 {
        return Ok(None);
    }
    Duration::try_from_secs_f64(secs)
        .map(Some)
        .with_context(|| format!("timeout of {} seconds is out of range", secs))
}

// ── Tests ──
