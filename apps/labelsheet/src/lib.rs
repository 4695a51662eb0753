//! # labelsheet
//!
//! Turns an inventory table into a printable sheet of Code-128 labels.
//!
//! ## Module Organization
//!
//! - [`config`] - Defaults, TOML file, and environment overrides
//! - [`pipeline`] - Load, render, assemble, in that order
//! - [`error`] - Errors that stop a run
//!
//! The binary is a thin wrapper: it initializes logging, loads
//! [`AppConfig`](config::AppConfig), calls [`pipeline::run`], and logs the
//! [`RunSummary`](pipeline::RunSummary).

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use pipeline::{run, RunOutcome, RunSummary, SkippedRecord};
