//! This module contains all configuration-relevant code, including
//! the full configuration structure as well as methods needed to load
//! and validate it.
//!
//! Your starting point should probably be [`Configuration::authored`]
//! or [`Configuration::load_from_default_path`].
//!
//! # Internals
//! The entire configuration structure is based on the concept of
//! unvalidated ("unresolved") and validated configuration structures.
//!
//! For example, even though we're interacting with [`Configuration`],
//! loading a file first deserializes it into the [`UnresolvedConfiguration`] structure.
//! Its `resolve` method then recursively turns it (and its fields)
//! into validated ("resolved") versions.
//!
//! The output is a [`Configuration`], which is never mutated afterwards.
//! Shape checks that serde can't express (e.g. a non-empty content list)
//! live in [`resolve`][traits::ResolvableConfiguration::resolve].

#![allow(rustdoc::private_intra_doc_links)]

mod authored;
mod errors;
mod structure;
mod traits;
mod utilities;

pub use errors::ConfigurationError;
pub use structure::*;
