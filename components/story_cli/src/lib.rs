//! Story Compiler CLI Library
//!
//! Provides the Driver struct and supporting modules for the `storyc` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod driver;
pub mod error;
pub mod logging;
pub mod samples;

pub use cli::Cli;
pub use driver::{CompileReport, Driver, EmitFormat};
pub use error::{CliError, CliResult};
