//! Menu-driven presentation layer. Everything here is a consumer of the
//! ledger manager's operations and derivation queries.

pub mod charts;
pub mod commands;
pub mod forms;
pub mod output;
mod shell;

pub use shell::{run_cli, CliError};
