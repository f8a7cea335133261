//! `morph` command-line converter

mod cli;
mod commands;
mod config;

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::{CliConfig, Overrides};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = Overrides {
        locale: match &cli.command {
            Command::Parse(args) => args.locale.clone(),
            Command::Locales(_) => None,
        },
        log_level: cli.log_level.clone(),
    };
    let config = CliConfig::load(cli.config.as_deref(), &overrides)?;

    let _guard = morph_log::init_with(config.logger())?;
    let locale = config.convert().apply()?;
    tracing::debug!(locale = locale.tag(), "default locale applied");

    match &cli.command {
        Command::Parse(args) => commands::parse::run(args, locale),
        Command::Locales(args) => commands::locales::run(args, locale),
    }
}
