//! Command-line interface orchestration for the simgraph generators.
//!
//! Offers one subcommand per generator; each prints a short plain-text
//! summary of the generated graph.

mod commands;

pub use commands::{
    AttachmentCommand, Cli, CliError, Command, ConnectedCommand, ExecutionSummary, GraphKind,
    GroupsCommand, render_summary, run_cli,
};

#[cfg(test)]
mod tests;
