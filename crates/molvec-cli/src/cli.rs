//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use molvec_normalization::{Axis, NormalizationMethod};

use crate::config::NormalizeOverrides;

#[derive(Parser)]
#[command(
    name = "molvec",
    version,
    about = "Normalize, denormalize and pad numeric vector datasets",
    long_about = "Normalize, denormalize and pad numeric vector datasets.\n\n\
                  Vector files are headerless CSV with one (possibly ragged) vector per line.\n\
                  Normalization parameters are stored as JSON so results can be inverted."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML configuration file with [normalize] and [convert] tables.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List registered normalization methods.
    Methods,

    /// Show the effective configuration.
    Config,

    /// Normalize a vector file and store the parameters.
    Normalize(NormalizeArgs),

    /// Invert a normalization using stored parameters.
    Denormalize(DenormalizeArgs),

    /// Pad vectors to a common length.
    Pad(PadArgs),

    /// Print inputs and labels as a table.
    Frame(FrameArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Vector file to normalize.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the normalized vectors.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Where to write the normalization parameters (JSON).
    #[arg(long = "params", value_name = "PATH")]
    pub params: PathBuf,

    /// Normalization method (unit_scale, z_score, positive_z_score).
    #[arg(long = "method")]
    pub method: Option<NormalizationMethod>,

    /// Group statistics per feature or per sample.
    #[arg(long = "axis", conflicts_with = "global")]
    pub axis: Option<Axis>,

    /// Use global statistics even if the config file sets an axis.
    #[arg(long = "global")]
    pub global: bool,

    /// Vectors processed per statistics batch.
    #[arg(long = "batch-size", value_name = "N")]
    pub batch_size: Option<usize>,
}

impl NormalizeArgs {
    pub fn overrides(&self) -> NormalizeOverrides {
        NormalizeOverrides {
            method: self.method,
            axis: self.axis,
            global: self.global,
            batch_size: self.batch_size,
        }
    }
}

#[derive(Parser)]
pub struct DenormalizeArgs {
    /// Normalized vector file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Parameters written by `molvec normalize`.
    #[arg(long = "params", value_name = "PATH")]
    pub params: PathBuf,

    /// Where to write the restored vectors.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct PadArgs {
    /// Vector file to pad.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the padded vectors.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Value used to fill shorter vectors.
    #[arg(long = "pad-char", default_value_t = 0.0, allow_negative_numbers = true)]
    pub pad_char: f64,

    /// Value appended once to every shorter vector before the padding.
    #[arg(long = "end-char", allow_negative_numbers = true)]
    pub end_char: Option<f64>,
}

#[derive(Parser)]
pub struct FrameArgs {
    /// Input vector file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Label vector file, one row per input.
    #[arg(long = "labels", value_name = "PATH")]
    pub labels: Option<PathBuf>,

    /// Comma-separated names, one per input component.
    #[arg(long = "input-names", value_delimiter = ',')]
    pub input_names: Option<Vec<String>>,

    /// Comma-separated names, one per label component.
    #[arg(long = "label-names", value_delimiter = ',', requires = "labels")]
    pub label_names: Option<Vec<String>>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_normalize_flags_parse() {
        let cli = Cli::try_parse_from([
            "molvec",
            "normalize",
            "in.csv",
            "-o",
            "out.csv",
            "--params",
            "params.json",
            "--method",
            "z_score",
            "--axis",
            "feature",
        ])
        .unwrap();
        let Command::Normalize(args) = cli.command else {
            panic!("expected normalize");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.method, Some(NormalizationMethod::ZScore));
        assert_eq!(overrides.axis, Some(Axis::Feature));
        assert!(!overrides.global);
    }

    #[test]
    fn test_unknown_method_rejected() {
        let result = Cli::try_parse_from([
            "molvec", "normalize", "in.csv", "-o", "out.csv", "--params", "p.json", "--method",
            "bogus",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_pad_char() {
        let cli = Cli::try_parse_from(["molvec", "pad", "in.csv", "-o", "out.csv", "--pad-char", "-1"])
            .unwrap();
        let Command::Pad(args) = cli.command else {
            panic!("expected pad");
        };
        assert_eq!(args.pad_char, -1.0);
        assert_eq!(args.end_char, None);
    }

    #[test]
    fn test_label_names_split_on_commas() {
        let cli = Cli::try_parse_from([
            "molvec",
            "frame",
            "in.csv",
            "--labels",
            "labels.csv",
            "--label-names",
            "energy,gap",
        ])
        .unwrap();
        let Command::Frame(args) = cli.command else {
            panic!("expected frame");
        };
        assert_eq!(args.label_names.unwrap(), ["energy", "gap"]);
    }
}
