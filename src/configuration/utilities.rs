use std::{
    env::current_dir,
    path::{Path, PathBuf},
};

use miette::{miette, Context, IntoDiagnostic, Result};

/// Location of the configuration file, relative to the project directory.
pub const DEFAULT_CONFIGURATION_FILE_PATH: &str = "data/configuration.toml";


/// Returns the default configuration filepath, which is at
/// `{current directory}/data/configuration.toml`.
pub fn get_default_configuration_file_path() -> Result<PathBuf> {
    let current_directory = current_dir()
        .into_diagnostic()
        .wrap_err_with(|| miette!("Could not get the current directory."))?;

    get_configuration_file_path_in(current_directory)
}

/// Returns `{project_directory}/data/configuration.toml`,
/// or an error if there is no such file.
pub fn get_configuration_file_path_in<P: AsRef<Path>>(project_directory: P) -> Result<PathBuf> {
    let configuration_filepath = project_directory
        .as_ref()
        .join(DEFAULT_CONFIGURATION_FILE_PATH);

    if !configuration_filepath.is_file() {
        return Err(miette!(
            "Could not find configuration file at {}.",
            configuration_filepath.display()
        ));
    }

    Ok(configuration_filepath)
}
