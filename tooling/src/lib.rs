//! Cyberwatch dashboard tooling.
//!
//! This crate rewrites hardcoded UI strings into translation calls and keeps
//! the translation catalogue honest. It backs the `cyberwatch-migrate` and
//! `cyberwatch-api` binaries and can be driven programmatically in tests.
//!
//! # Modules
//!
//! - [`audit`] - Finds translation keys used in code but missing from the catalogue
//! - [`catalogue`] - Catalogue key extraction and English section fix-ups
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Error types for setup failures
//! - [`flow`] - Command handlers wiring configuration, locale, and output
//! - [`migrate`] - The translation-key migrator
//! - [`report`] - Localised rendering of migration outcomes
//! - [`rules`] - Rule sets mapping literal text to translation calls

pub mod audit;
pub mod catalogue;
pub mod cli;
pub mod error;
pub mod flow;
pub mod migrate;
pub mod report;
pub mod rules;

pub(crate) mod output;
