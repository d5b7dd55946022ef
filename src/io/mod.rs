//! Process I/O layer: the `CommandRunner` seam and its `std::process` implementation.
pub mod runner;
pub use runner::{CommandRunner, Invocation, ProcessOutput, SystemRunner};
