//! Terminal front end for the todo service.
//!
//! Hosts `todo-core`: requests run through `UreqTransport`, delete
//! confirmations are asked on stdin and failures are printed to stderr.

pub mod command;
pub mod error;
pub mod prompt;
pub mod transport;

use clap::Parser;

pub use command::{dispatch, Command, Flow};
pub use error::TermError;
pub use prompt::{StderrNotifier, StdinConfirmer};
pub use transport::UreqTransport;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/v1";

#[derive(Debug, Parser)]
#[command(name = "todo", version, about = "Keep a todo list on a todo server")]
pub struct Args {
    /// Base URL of the API, including its prefix.
    #[arg(long, env = "TODO_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Do not use ANSI styling for completed todos.
    #[arg(long)]
    pub plain: bool,

    /// Log filter for diagnostics on stderr.
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log: String,
}
