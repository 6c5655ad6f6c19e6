//! Configuration object for a utility-class stylesheet generator.
//!
//! The generator itself (content scanning, class matching, CSS emission and
//! plugin execution) lives elsewhere. This crate only describes *what* that
//! generator should scan, which design tokens it should layer over its
//! built-in defaults, and which plugins it should register, in that order.
//!
//! Start with [`Configuration::authored`][configuration::Configuration::authored]
//! or [`Configuration::load_from_path`][configuration::Configuration::load_from_path].

pub mod configuration;
pub mod logging;
