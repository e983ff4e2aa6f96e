//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Load the dataset and serve the HTTP API
//! - query: One-shot query execution
//! - facets: One-shot filter option derivation

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, QueryArgs, SourceArgs};
pub use commands::{configure, facets, load_store, query, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_page, write_page_to, write_response, write_response_to};
