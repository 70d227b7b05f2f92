//! Command-line interface orchestration for cutline.
//!
//! Offers a `run` command driving the full partition post-processing
//! pipeline against an external solver, and a `paths` command exposing the
//! standalone simple-path enumerator over the same edge-list format.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionReport, PathsCommand, RunCommand, render_report, run_cli,
};
