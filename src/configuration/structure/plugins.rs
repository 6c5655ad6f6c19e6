use std::{collections::HashSet, fmt};

use miette::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::configuration::{errors::ConfigurationError, traits::ResolvableConfiguration};


#[derive(Deserialize, Clone, Debug)]
#[serde(transparent)]
pub(super) struct UnresolvedPluginsConfiguration {
    packages: Vec<String>,
}

/// Opaque reference to a plugin, identified by the package that provides it.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PluginHandle {
    package: String,
}

/// Plugins in application order: later entries may override
/// utilities registered by earlier ones.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct PluginReferences {
    handles: Vec<PluginHandle>,
}


impl ResolvableConfiguration for UnresolvedPluginsConfiguration {
    type Resolved = PluginReferences;

    fn resolve(self) -> Result<Self::Resolved> {
        let mut handles = Vec::with_capacity(self.packages.len());
        let mut seen_packages = HashSet::with_capacity(self.packages.len());

        for (index, package) in self.packages.into_iter().enumerate() {
            if package.is_empty() {
                return Err(ConfigurationError::EmptyPluginName { index }.into());
            }

            if !seen_packages.insert(package.clone()) {
                warn!(
                    package = %package,
                    index,
                    "Plugin is registered more than once."
                );
            }

            handles.push(PluginHandle { package });
        }

        Ok(PluginReferences { handles })
    }
}


impl PluginHandle {
    pub const FORMS_PACKAGE: &'static str = "@tailwindcss/forms";

    pub fn new<S: Into<String>>(package: S) -> Self {
        Self {
            package: package.into(),
        }
    }

    /// Form-element base styles.
    pub fn forms() -> Self {
        Self::new(Self::FORMS_PACKAGE)
    }

    pub fn package(&self) -> &str {
        &self.package
    }
}

impl fmt::Display for PluginHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.package)
    }
}


impl PluginReferences {
    pub fn new(handles: Vec<PluginHandle>) -> Self {
        Self { handles }
    }

    pub fn handles(&self) -> &[PluginHandle] {
        &self.handles
    }
}
