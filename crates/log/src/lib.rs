//! # morph-log
//!
//! Logging bootstrap for morph binaries, built on `tracing-subscriber`.
//! Library crates only emit `tracing` events; a binary installs the
//! subscriber once at startup.
//!
//! ```rust,no_run
//! fn main() -> Result<(), morph_log::LogError> {
//!     let _guard = morph_log::auto_init()?;
//!     morph_log::info!(locale = "de-DE", "converter ready");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format, WriterConfig};
pub use error::{LogError, LogResult};

// Re-export tracing macros
pub use tracing::{debug, error, info, trace, warn};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Config, Format, LogResult, auto_init, init, init_with};
    pub use crate::{debug, error, info, trace, warn};
}

// ============================================================================
// Initialization Functions
// ============================================================================

/// Pick a configuration from the environment and build type.
///
/// `MORPH_LOG` or `RUST_LOG` select [`Config::from_env`]; otherwise debug
/// builds use [`Config::development`] and release builds
/// [`Config::production`].
pub fn auto_init() -> LogResult<LoggerGuard> {
    init_with(auto_config())
}

fn auto_config() -> Config {
    if std::env::var_os("MORPH_LOG").is_some() || std::env::var_os("RUST_LOG").is_some() {
        Config::from_env()
    } else if cfg!(debug_assertions) {
        Config::development()
    } else {
        Config::production()
    }
}

/// Initialize with default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
