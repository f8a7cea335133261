//! Logger builder implementation

#[macro_use]
mod format;

use std::io;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format, WriterConfig};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the logger's root span entered
///
/// Hold it for the lifetime of the program. Dropping it exits the root span.
#[derive(Debug)]
#[must_use = "dropping the guard exits the root span"]
pub struct LoggerGuard {
    _root_span: Option<tracing::span::EnteredSpan>,
}

/// Build, then install the subscriber for one format layer
macro_rules! init_subscriber {
    ($filter:expr, $layer:expr) => {
        Registry::default()
            .with($filter)
            .with($layer)
            .try_init()
            .map_err(|e| LogError::config(format!("cannot install subscriber: {e}")))
    };
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Parse the level directive without installing anything
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::filter(&self.config.level, e.to_string()))
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let display = &self.config.display;
        let writer = make_writer(self.config.writer);

        match self.config.format {
            Format::Pretty => {
                init_subscriber!(filter, create_fmt_layer!(pretty, display, writer))?;
            }
            Format::Compact => {
                init_subscriber!(filter, create_fmt_layer!(compact, display, writer))?;
            }
            Format::Json => {
                init_subscriber!(filter, create_json_layer!(display, writer))?;
            }
        }

        let root_span = self
            .config
            .service
            .as_deref()
            .map(|service| tracing::info_span!("app", service).entered());

        tracing::debug!(level = %self.config.level, format = %self.config.format, "logger initialized");
        Ok(LoggerGuard {
            _root_span: root_span,
        })
    }
}

fn make_writer(config: WriterConfig) -> BoxMakeWriter {
    match config {
        WriterConfig::Stderr => BoxMakeWriter::new(io::stderr),
        WriterConfig::Stdout => BoxMakeWriter::new(io::stdout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_rejected_before_install() {
        let config = Config {
            level: "morph=notalevel".to_string(),
            ..Config::test()
        };
        let err = LoggerBuilder::from_config(config).filter().unwrap_err();
        assert!(matches!(err, LogError::Filter { ref filter, .. } if filter == "morph=notalevel"));
    }

    #[test]
    fn test_valid_directives() {
        for level in ["info", "debug,morph_convert=trace", "warn"] {
            let config = Config {
                level: level.to_string(),
                ..Config::test()
            };
            assert!(LoggerBuilder::from_config(config).filter().is_ok(), "{level}");
        }
    }
}
