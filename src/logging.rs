//! Tracing setup: console output on stderr and, optionally,
//! a daily-rolling log file.

use std::path::Path;

use miette::{miette, Context, IntoDiagnostic, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};


/// Parse a level filter such as `info` or `stylecfg=debug,warn`.
pub fn parse_level_filter(filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(filter)
        .into_diagnostic()
        .wrap_err_with(|| miette!("Failed to parse level filter {:?}.", filter))
}


/// Install the global tracing subscriber.
///
/// If `log_file_directory` is given, log lines matching `log_file_level_filter`
/// are also written to `{log_file_directory}/{log_file_name_prefix}.{date}`.
/// Keep the returned guard alive until exit, dropping it flushes the file.
pub fn initialize_tracing(
    console_level_filter: EnvFilter,
    log_file_level_filter: EnvFilter,
    log_file_directory: Option<&Path>,
    log_file_name_prefix: &str,
) -> Result<Option<WorkerGuard>> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_level_filter);

    let Some(log_file_directory) = log_file_directory else {
        tracing_subscriber::registry()
            .with(console_layer)
            .try_init()
            .into_diagnostic()
            .wrap_err("Failed to install tracing subscriber.")?;

        return Ok(None);
    };


    std::fs::create_dir_all(log_file_directory)
        .into_diagnostic()
        .wrap_err_with(|| {
            miette!(
                "Failed to create missing log file directory at {}.",
                log_file_directory.display()
            )
        })?;

    let file_appender = tracing_appender::rolling::daily(log_file_directory, log_file_name_prefix);
    let (non_blocking_appender, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking_appender)
        .with_filter(log_file_level_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to install tracing subscriber.")?;

    Ok(Some(guard))
}
