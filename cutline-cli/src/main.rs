//! CLI entry point for the cutline partition post-processor.
//!
//! Parses command-line arguments with clap, executes the selected command,
//! renders the report to stdout, and maps errors to appropriate exit codes.
//! Logging is initialized eagerly so subsequent operations can emit
//! structured diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use cutline_cli::{
    cli::{Cli, CliError, render_report, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, render the report, and flush
/// the output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let report = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_report(&report, &mut writer).context("failed to render report")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (graph_code, solver_code) = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Pipeline(pipeline) => {
                    Some((pipeline.graph_code(), pipeline.solver_code()))
                }
                CliError::Graph(graph) => Some((Some(graph.code()), None)),
                CliError::Io { .. } => None,
            })
            .unwrap_or((None, None));

        let graph_code_field = graph_code.map(|code| field::display(code.as_str()));
        let solver_code_field = solver_code.map(|code| field::display(code.as_str()));

        error!(
            error = %err,
            graph_code = graph_code_field,
            solver_code = solver_code_field,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn report_logging_init_error(err: &LoggingError) {
    // One-off diagnostic before tracing is initialized.
    eprintln!("failed to initialize logging: {err}");
}
