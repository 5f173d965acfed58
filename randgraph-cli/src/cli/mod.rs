//! Command-line interface orchestration for randgraph.
//!
//! The CLI offers a single `generate` command that reads vertex labels from
//! arguments or a file, generates one graph, and renders its adjacency.

mod commands;

pub use commands::{
    Cli, CliError, Command, GenerateCommand, GenerationSummary, KindArg, render_summary, run_cli,
};

#[cfg(test)]
mod tests;
