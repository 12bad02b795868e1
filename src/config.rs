use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::Deserialize;
use sheetsum_core::ChecksumPolicy;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

/// Which checksums the `checksum` command prints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PolicyChoice {
    Range,
    Divisible,
    #[default]
    Both,
}

impl PolicyChoice {
    pub fn policies(self) -> &'static [ChecksumPolicy] {
        match self {
            PolicyChoice::Range => &[ChecksumPolicy::Range],
            PolicyChoice::Divisible => &[ChecksumPolicy::Divisible],
            PolicyChoice::Both => &ChecksumPolicy::ALL,
        }
    }
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub policy: PolicyChoice,
}

pub fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "sheetsum")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// Load the config file.
///
/// An explicitly requested file must exist and parse. Problems with the
/// default user config only produce a warning and fall back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let Some(path) = user_config_path() else {
        return Ok(Config::default());
    };
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    match read_config(&path) {
        Ok(config) => Ok(config),
        Err(err) => {
            warn!("{:#}; using defaults", err);
            Ok(Config::default())
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let meta = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        bail!(
            "Refusing to read {}: file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        );
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
