//! Command-line definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Locale-aware value conversion
#[derive(Debug, Parser)]
#[command(name = "morph", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./morph.toml when present)
    #[arg(long, global = true, env = "MORPH_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter directive, overriding configuration
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a value to a target type
    Parse(ParseArgs),
    /// List the built-in locales
    Locales(LocalesArgs),
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Source text; omit it to convert an absent value. Use `--` before
    /// text that starts with a sign and is not a plain number
    #[arg(allow_negative_numbers = true)]
    pub value: Option<String>,

    /// Target type: string, bool, uuid, char, decimal, i8..i128, u8..u128,
    /// f32, f64, or enum together with --member
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub target: String,

    /// Culture tag such as de-DE, overriding configuration
    #[arg(long, short = 'l', value_name = "TAG")]
    pub locale: Option<String>,

    /// Print {Empty-Optional} instead of failing
    #[arg(long)]
    pub safe: bool,

    /// Name of the enumeration built from --member
    #[arg(long, default_value = "Enum", value_name = "NAME")]
    pub enum_name: String,

    /// Enumeration member, NAME or NAME=ORDINAL; repeat in declaration order
    #[arg(long = "member", value_name = "NAME[=ORD]")]
    pub members: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct LocalesArgs {
    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,
}
