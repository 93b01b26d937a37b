//! hsa - Bootstrap and launch tooling for the Help Scout analytics take-home demo
//!
//! This library provides the scaffolding (directory tree, template files,
//! virtual environment, initial commit) and launch preflight logic behind the
//! `hsa` CLI. The analytics application itself lives inside the scaffolded
//! project; this crate only sets it up and starts it.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod git;
pub mod launcher;
pub mod output;
pub mod paths;
pub mod scaffold;
pub mod templates;
pub mod venv;
