//! molvec CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use molvec_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use molvec_cli::commands::{run_denormalize, run_frame, run_normalize, run_pad};
use molvec_cli::config::FileConfig;
use molvec_cli::logging::{LogConfig, LogFormat, init_logging};
use molvec_cli::summary::{
    config_table, denormalize_table, methods_table, normalize_table, pad_table,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<()> {
    let config = FileConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Methods => println!("{}", methods_table()),
        Command::Config => println!("{}", config_table(&config)),
        Command::Normalize(args) => {
            let options = args.overrides().apply(config.normalize);
            let report = run_normalize(&args.input, &args.output, &args.params, &options)?;
            println!("{}", normalize_table(&report));
        }
        Command::Denormalize(args) => {
            let report = run_denormalize(&args.input, &args.params, &args.output)?;
            println!("{}", denormalize_table(&report));
        }
        Command::Pad(args) => {
            let report = run_pad(&args.input, &args.output, args.pad_char, args.end_char)?;
            println!("{}", pad_table(&report));
        }
        Command::Frame(args) => {
            let df = run_frame(
                &args.input,
                args.labels.as_deref(),
                args.input_names.as_deref(),
                args.label_names.as_deref(),
            )?;
            println!("{df}");
        }
    }
    Ok(())
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
