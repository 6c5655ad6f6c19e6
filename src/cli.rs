//! Command-line interface definitions for the `stylecfg` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};


/// Which part of the resolved configuration to print.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PrintSelection {
    #[default]
    All,
    Content,
    Theme,
    Plugins,
}

impl PrintSelection {
    pub fn includes(self, other: PrintSelection) -> bool {
        self == PrintSelection::All || self == other
    }
}


/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "stylecfg",
    author,
    about = "Load a utility-class stylesheet configuration and print what it resolves to.",
    version
)]
pub struct CLIArgs {
    /// This is the path to the configuration file to use.
    /// If unspecified, this defaults to `./data/configuration.toml`.
    #[arg(
        short = 'c',
        long = "configuration-file-path",
        conflicts_with = "authored",
        help = "Path to the configuration file to use. Defaults to ./data/configuration.toml"
    )]
    pub configuration_file_path: Option<PathBuf>,

    #[arg(
        long = "authored",
        help = "Use the configuration compiled into this binary instead of reading a file."
    )]
    pub authored: bool,

    #[arg(
        short = 'd',
        long = "defaults-file-path",
        help = "TOML file with the generator's built-in theme, one table per token category. \
                If unspecified, the theme is resolved against empty defaults."
    )]
    pub defaults_file_path: Option<PathBuf>,

    #[arg(
        short = 'p',
        long = "print",
        value_enum,
        default_value_t = PrintSelection::All,
        help = "Which part of the resolved configuration to print."
    )]
    pub print: PrintSelection,

    #[arg(
        long = "console-log-filter",
        default_value = "info",
        help = "Level filter for console (stderr) logging, e.g. \"info\" or \"stylecfg=debug\"."
    )]
    pub console_log_filter: String,

    #[arg(
        long = "log-file-directory",
        help = "If set, logs are also written to a daily log file in this directory."
    )]
    pub log_file_directory: Option<PathBuf>,

    #[arg(
        long = "log-file-filter",
        default_value = "debug",
        help = "Level filter for the log file."
    )]
    pub log_file_filter: String,
}
