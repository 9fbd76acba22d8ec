//! Configuration management

pub mod settings;

pub use settings::{CliOverrides, OutputConfig, OutputFormat, Settings, SolveMode, SolverConfig};
