//! Core building blocks: parameter record, validation, output naming and
//! argument building. All of them are pure apart from the input existence
//! check; the high-level `api` module wires them to a command runner.
pub mod args;
pub mod naming;
pub mod params;
pub mod validate;
