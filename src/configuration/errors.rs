use miette::Diagnostic;
use thiserror::Error;

/// Shape violations found while resolving a configuration.
///
/// Anything beyond shape (glob syntax, color formats, plugin compatibility)
/// is left to the stylesheet generator that consumes the configuration.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigurationError {
    #[error("The content list is empty.")]
    #[diagnostic(
        code(stylecfg::content::empty),
        help("List at least one glob pattern, e.g. \"./src/**/*.html\".")
    )]
    EmptyContent,

    #[error("Content pattern at index {index} is an empty string.")]
    #[diagnostic(code(stylecfg::content::empty_pattern))]
    EmptyContentPattern { index: usize },

    #[error("Content pattern {pattern:?} is absolute.")]
    #[diagnostic(
        code(stylecfg::content::absolute_pattern),
        help("Content patterns are relative to the project root.")
    )]
    AbsoluteContentPattern { pattern: String },

    #[error("Theme extension contains a category with an empty name.")]
    #[diagnostic(code(stylecfg::theme::empty_category))]
    EmptyCategoryName,

    #[error("Theme category {category:?} contains a token with an empty name.")]
    #[diagnostic(code(stylecfg::theme::empty_token))]
    EmptyTokenName { category: String },

    #[error("Plugin at index {index} has an empty package name.")]
    #[diagnostic(code(stylecfg::plugins::empty_name))]
    EmptyPluginName { index: usize },
}
