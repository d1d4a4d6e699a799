//! Result presentation for the CLI

pub mod formatter;

pub use formatter::{ConsoleFormatter, OutputFormat};
