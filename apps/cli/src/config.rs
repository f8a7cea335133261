//! Layered CLI configuration
//!
//! Sources, lowest precedence first: built-in defaults, the TOML file,
//! `MORPH_LOCALE` / `MORPH_LOG_LEVEL` / `MORPH_LOG_FORMAT`, command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use morph_convert::ConvertConfig;
use serde::{Deserialize, Serialize};

/// File read when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "morph.toml";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Process default locale; unset means the environment's locale
    pub locale: Option<String>,
    pub log: LogSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    pub level: String,
    pub format: morph_log::Format,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: morph_log::Format::Compact,
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub locale: Option<String>,
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Load configuration from all layers.
    ///
    /// A missing default file is skipped; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>, overrides: &Overrides) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) if !path.is_file() => {
                bail!("configuration file {} does not exist", path.display())
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        let mut figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(&path))
            .merge(Env::prefixed("MORPH_").only(&["locale"]))
            .merge(
                Env::prefixed("MORPH_LOG_")
                    .only(&["level", "format"])
                    .map(|key| format!("log.{key}").into()),
            );

        if let Some(locale) = &overrides.locale {
            figment = figment.merge(("locale", locale));
        }
        if let Some(level) = &overrides.log_level {
            figment = figment.merge(("log.level", level));
        }

        figment
            .extract()
            .with_context(|| format!("invalid configuration (file {})", path.display()))
    }

    /// Converter configuration carried by this file
    pub fn convert(&self) -> ConvertConfig {
        ConvertConfig {
            locale: self.locale.clone(),
        }
    }

    /// Logger configuration carried by this file
    pub fn logger(&self) -> morph_log::Config {
        morph_log::Config {
            level: self.log.level.clone(),
            format: self.log.format,
            service: Some("morph".to_string()),
            ..morph_log::Config::default()
        }
    }
}
