//! Command Line Interface (CLI) layer for b0field.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that turns flags and presets into
//! a single `b0calc` run through the `b0field::api` interface.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
