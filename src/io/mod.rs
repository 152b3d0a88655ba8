//! File-facing collaborators of the engine: instance loading, run
//! configuration and result reporting.

mod instance;
mod report;
mod run_config;

pub use instance::{Instance, InstanceFormat};
pub use report::Report;
pub use run_config::{RunConfig, RunEntry};
