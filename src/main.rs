use clap::Parser;
use miette::{miette, Context, IntoDiagnostic, Result};
use serde::Serialize;
use stylecfg::{
    configuration::{Configuration, PluginHandle, ThemeExtension},
    logging::{initialize_tracing, parse_level_filter},
};
use tracing::{debug, info};

use crate::cli::{CLIArgs, PrintSelection};

mod cli;


/// What gets printed to stdout. Arrays come before the theme table
/// so the output stays valid TOML.
#[derive(Serialize)]
struct ResolvedOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a [String]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    plugins: Option<&'a [PluginHandle]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    theme: Option<ThemeExtension>,
}


/// Resolve the selected parts of `configuration` and render them as TOML.
fn render_resolved_output(
    configuration: &Configuration,
    selection: PrintSelection,
    base_defaults: &ThemeExtension,
) -> Result<String> {
    let output = ResolvedOutput {
        content: selection
            .includes(PrintSelection::Content)
            .then(|| configuration.resolve_content()),
        plugins: selection
            .includes(PrintSelection::Plugins)
            .then(|| configuration.resolve_plugins()),
        theme: selection
            .includes(PrintSelection::Theme)
            .then(|| configuration.resolve_theme(base_defaults)),
    };

    toml::to_string_pretty(&output)
        .into_diagnostic()
        .wrap_err("Failed to render resolved configuration.")
}


fn load_configuration(cli_args: &CLIArgs) -> Result<Configuration> {
    if cli_args.authored {
        info!("Using the authored configuration.");
        return Ok(Configuration::authored());
    }

    match cli_args.configuration_file_path.as_ref() {
        Some(path) => {
            info!("Loading configuration: {}", path.display());
            Configuration::load_from_path(path)
        }
        None => {
            info!("Loading configuration at default path.");
            Configuration::load_from_default_path()
        }
    }
}


fn main() -> Result<()> {
    let cli_args = CLIArgs::parse();

    let console_level_filter = parse_level_filter(&cli_args.console_log_filter)
        .wrap_err("Invalid --console-log-filter.")?;
    let log_file_level_filter = parse_level_filter(&cli_args.log_file_filter)
        .wrap_err("Invalid --log-file-filter.")?;

    let logging_raii_guard = initialize_tracing(
        console_level_filter,
        log_file_level_filter,
        cli_args.log_file_directory.as_deref(),
        "stylecfg.log",
    )
    .wrap_err("Failed to initialize tracing.")?;

    debug!("Tracing initialized.");


    let configuration =
        load_configuration(&cli_args).wrap_err("Failed to load configuration file.")?;

    let base_defaults = match cli_args.defaults_file_path.as_ref() {
        Some(path) => ThemeExtension::load_from_path(path)
            .wrap_err_with(|| miette!("Failed to load theme defaults from {}.", path.display()))?,
        None => ThemeExtension::new(),
    };


    let rendered_output = render_resolved_output(&configuration, cli_args.print, &base_defaults)?;

    print!("{rendered_output}");


    drop(logging_raii_guard);
    Ok(())
}
