//! Product catalog CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use catalog_cli::cli::{Cli, LogFormatArg, LogLevelArg};
use catalog_cli::commands::{Status, execute};
use catalog_cli::config::load_settings;
use catalog_cli::logging::{LogConfig, LogFormat, init_logging};
use catalog_persistence::FileStorage;
use catalog_store::CatalogStore;
use clap::{ColorChoice, Parser};
use tracing::info;
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(Status::NotFound(id)) => {
            eprintln!("error: no product with id {id}");
            Status::NotFound(id).exit_code()
        }
        Ok(status) => status.exit_code(),
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<Status> {
    let settings = load_settings(cli.config.as_deref());
    let data_dir = settings.resolve_data_dir(cli.data_dir.as_deref());
    info!(data_dir = %data_dir.display(), "opening catalog");

    let mut store = CatalogStore::load(FileStorage::new(data_dir));
    let mut out = io::stdout().lock();
    execute(&cli.command, &mut store, &settings, &mut out)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
