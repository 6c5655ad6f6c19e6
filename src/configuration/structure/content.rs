use std::path::Path;

use miette::Result;
use serde::{Deserialize, Serialize};

use crate::configuration::{errors::ConfigurationError, traits::ResolvableConfiguration};


#[derive(Deserialize, Clone, Debug)]
#[serde(transparent)]
pub(super) struct UnresolvedContentConfiguration {
    patterns: Vec<String>,
}

/// Glob patterns, relative to the project root, that the generator scans
/// for class-name usage. Never empty.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct ContentSpec {
    patterns: Vec<String>,
}


impl ResolvableConfiguration for UnresolvedContentConfiguration {
    type Resolved = ContentSpec;

    fn resolve(self) -> Result<Self::Resolved> {
        ContentSpec::new(self.patterns)
    }
}


impl ContentSpec {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();

        if patterns.is_empty() {
            return Err(ConfigurationError::EmptyContent.into());
        }

        for (index, pattern) in patterns.iter().enumerate() {
            if pattern.is_empty() {
                return Err(ConfigurationError::EmptyContentPattern { index }.into());
            }

            // The pattern syntax is the generator's business, but a leading root
            // is already a violation of "relative to the project root".
            if Path::new(pattern).has_root() {
                return Err(ConfigurationError::AbsoluteContentPattern {
                    pattern: pattern.clone(),
                }
                .into());
            }
        }

        Ok(Self { patterns })
    }

    /// For literals compiled into the crate, which are known to be valid.
    pub(crate) fn from_static(patterns: &[&'static str]) -> Self {
        debug_assert!(!patterns.is_empty());

        Self {
            patterns: patterns.iter().map(|pattern| pattern.to_string()).collect(),
        }
    }

    /// The patterns, in authored order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}
