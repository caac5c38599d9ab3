// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use termcal_core::{APP_NAME, Config as CoreConfig, DEFAULT_TIMEZONE};

const TERMCAL_CONFIG_ENV: &str = "TERMCAL_CONFIG";

/// Output file used when neither the command line nor the config names one.
pub const DEFAULT_OUTPUT: &str = "schedule.ics";

/// Load the configuration.
///
/// An explicit path (from `--config` or `TERMCAL_CONFIG`) must exist. The
/// default location may be missing, in which case defaults are used.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(TERMCAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok((CoreConfig::default(), Config::default()));
        }
        config
    };

    let raw = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?;

    let mut core = raw.core;
    core.normalize()?;
    Ok((core, Config { output: raw.output }))
}

/// Settings of the command-line front end.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Default output path.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigRaw {
    core: CoreConfig,
    output: Option<PathBuf>,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Pick the timezone: the command line, then the config, then the system.
pub fn resolve_timezone(flag: Option<&str>, configured: Option<&str>) -> String {
    if let Some(tz) = flag.or(configured) {
        return tz.to_owned();
    }

    match iana_time_zone::get_timezone() {
        Ok(tz) => tz,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to get timezone, using {DEFAULT_TIMEZONE}");
            DEFAULT_TIMEZONE.to_owned()
        }
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
