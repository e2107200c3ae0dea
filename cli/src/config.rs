// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fmt, path::PathBuf, str::FromStr, time::Duration};

use serde::de;
use tokio::fs;

use termitodo_core::{APP_NAME, Config as CoreConfig};

const CONFIG_ENV: &str = "TERMI_TODO_CONFIG";
pub(crate) const RUN_ENV: &str = "TERMI_TODO_ENV";

const RUN_ENV_PRODUCTION: &str = "production";

#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok((CoreConfig::default(), Config::default()));
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| (a.core, Config { daemon: a.daemon }))
}

/// Configuration for the termi-todo command-line interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub daemon: DaemonConfig,
}

/// Configuration of the `daemon` command.
#[derive(Debug, Clone, Copy, Default, serde::Deserialize)]
pub struct DaemonConfig {
    /// How often the daemon wakes up.
    #[serde(default)]
    pub check_interval: CheckInterval,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,

    #[serde(default)]
    daemon: DaemonConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Interval between two daemon wake-ups, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckInterval(Duration);

impl CheckInterval {
    pub fn duration(&self) -> Duration {
        self.0
    }
}

impl Default for CheckInterval {
    fn default() -> Self {
        Self(Duration::from_secs(60))
    }
}

impl<'de> serde::Deserialize<'de> for CheckInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IntervalVisitor;

        impl<'de> de::Visitor<'de> for IntervalVisitor {
            type Value = CheckInterval;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str(r#"a duration string like "HH:MM", "1d", "24h", "60m", or "1800s""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_duration(value)
                    .map(CheckInterval)
                    .map_err(|e| de::Error::custom(e.to_string()))
            }
        }

        deserializer.deserialize_str(IntervalVisitor)
    }
}

/// Whether the tool runs in production, where a bare invocation stays quiet.
pub fn is_production() -> bool {
    match std::env::var(RUN_ENV) {
        Ok(val) => val.trim().eq_ignore_ascii_case(RUN_ENV_PRODUCTION),
        Err(_) => false,
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

/// Parse a duration string in the format "HH:MM" / "1d" / "24h" / "60m" / "1800s".
fn parse_duration(s: &str) -> Result<Duration, Box<dyn Error>> {
    let secs: Option<u64> = if let Some((h, m)) = s.split_once(':') {
        let hours: u64 = h.trim().parse()?;
        let minutes: u64 = m.trim().parse()?;
        hours
            .checked_mul(60)
            .and_then(|a| a.checked_add(minutes))
            .and_then(|a| a.checked_mul(60))
    } else if let Some(rest) = s.strip_suffix("d") {
        rest.trim().parse::<u64>()?.checked_mul(24 * 60 * 60)
    } else if let Some(rest) = s.strip_suffix("h") {
        rest.trim().parse::<u64>()?.checked_mul(60 * 60)
    } else if let Some(rest) = s.strip_suffix("m") {
        rest.trim().parse::<u64>()?.checked_mul(60)
    } else if let Some(rest) = s.strip_suffix("s") {
        Some(rest.trim().parse()?)
    } else {
        return Err(format!("Invalid duration format: {s}").into());
    };

    match secs {
        None => Err("Duration is too large".into()),
        Some(0) => Err("Duration must be greater than zero".into()),
        Some(secs) => Ok(Duration::from_secs(secs)),
    }
}

/// Serialises tests that mutate the process environment.
#[cfg(test)]
pub(crate) fn env_lock() -> &'static tokio::sync::Mutex<()> {
    static ENV_LOCK: std::sync::OnceLock<tokio::sync::Mutex<()>> = std::sync::OnceLock::new();
    ENV_LOCK.get_or_init(|| tokio::sync::Mutex::new(()))
}
