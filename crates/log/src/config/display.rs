//! Display configuration

use serde::{Deserialize, Serialize};

/// What each event shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Show source location (`file:line`)
    pub source: bool,
    /// Show target module
    pub target: bool,
    /// Use ANSI colors
    pub colors: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: cfg!(debug_assertions),
            target: true,
            colors: std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

impl DisplayConfig {
    /// Apply `MORPH_LOG_TIME`, `MORPH_LOG_SOURCE` and `MORPH_LOG_COLORS`
    pub(super) fn apply_lookup<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |v: String| v != "0" && !v.eq_ignore_ascii_case("false");
        if let Some(v) = lookup("MORPH_LOG_TIME") {
            self.time = flag(v);
        }
        if let Some(v) = lookup("MORPH_LOG_SOURCE") {
            self.source = flag(v);
        }
        if let Some(v) = lookup("MORPH_LOG_COLORS") {
            self.colors = flag(v);
        }
    }
}
