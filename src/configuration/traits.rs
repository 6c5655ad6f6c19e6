use miette::Result;

/// A deserialized, not yet validated configuration table.
///
/// `resolve` consumes the raw table and either returns its validated
/// counterpart or an error describing which invariant the input broke.
pub trait ResolvableConfiguration {
    type Resolved;

    fn resolve(self) -> Result<Self::Resolved>;
}


/// Like [`ResolvableConfiguration`], but resolution needs extra information
/// that isn't part of the table itself (e.g. the path the file was read from).
pub trait ResolvableConfigurationWithContext {
    type Context;
    type Resolved;

    fn resolve(self, context: Self::Context) -> Result<Self::Resolved>;
}
