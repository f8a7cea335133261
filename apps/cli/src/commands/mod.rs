//! Subcommand implementations

pub mod locales;
pub mod parse;
