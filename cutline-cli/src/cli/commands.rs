//! Command implementations and argument parsing for the cutline CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cutline_core::{
    AdjacencyModel, EdgeListFile, GraphError, PathLimits, Pipeline, PipelineError,
    PipelineSummary, SolverConfigBuilder, VertexId, all_simple_paths,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "cutline", about = "Post-process hypergraph partitioner output.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Partition a graph with the external solver and post-process the result.
    Run(RunCommand),
    /// Enumerate simple paths between two vertices of an edge-list file.
    Paths(PathsCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Edge-list input file: partition count, reserved header, then one
    /// edge per line.
    pub input: PathBuf,

    /// Path to the external solver binary.
    #[arg(long)]
    pub solver: PathBuf,

    /// Imbalance (UBfactor) bound on uneven block sizes.
    #[arg(long, default_value_t = 5)]
    pub imbalance: u32,

    /// Number of independent solver runs.
    #[arg(long, default_value_t = 10)]
    pub runs: u32,

    /// Coarsening scheme selector (CType).
    #[arg(long, default_value_t = 1)]
    pub coarsening: u32,

    /// Refinement scheme selector (RType).
    #[arg(long, default_value_t = 1)]
    pub refinement: u32,

    /// V-cycle count.
    #[arg(long, default_value_t = 3)]
    pub vcycles: u32,

    /// Reconstruct hyperedges during uncoarsening.
    #[arg(long)]
    pub reconstruct: bool,

    /// Solver debug verbosity.
    #[arg(long, default_value_t = 0)]
    pub debug_level: u32,

    /// Directory for the intermediate graph file and the artifacts.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

/// Options accepted by the `paths` command.
#[derive(Debug, Args, Clone)]
pub struct PathsCommand {
    /// Edge-list input file in the same format the `run` command accepts.
    pub input: PathBuf,

    /// Start vertex.
    #[arg(long = "from")]
    pub from: u32,

    /// End vertex.
    #[arg(long = "to")]
    pub to: u32,

    /// Longest path (in vertices) that will be explored.
    #[arg(long, default_value_t = PathLimits::default().max_depth)]
    pub max_depth: usize,

    /// Most paths collected before enumeration stops.
    #[arg(long, default_value_t = PathLimits::default().max_paths)]
    pub max_paths: usize,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading an input.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Parsing the edge-list input failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The post-processing pipeline failed.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionReport {
    /// Summary of a full pipeline run.
    Run(PipelineSummary),
    /// Simple paths found between the requested vertices.
    Paths {
        /// Start vertex of the enumeration.
        from: VertexId,
        /// End vertex of the enumeration.
        to: VertexId,
        /// Every simple path found, as ordered vertex sequences.
        paths: Vec<Vec<VertexId>>,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when parsing or execution fails.
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionReport, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_pipeline(run)
        }
        Command::Paths(paths) => {
            Span::current().record("command", field::display("paths"));
            enumerate_paths(paths)
        }
    }
}

#[instrument(
    name = "cli.pipeline",
    err,
    skip(command),
    fields(input = field::Empty, out_dir = field::Empty),
)]
pub(super) fn run_pipeline(command: RunCommand) -> Result<ExecutionReport, CliError> {
    let span = Span::current();
    span.record("input", field::display(command.input.display()));
    span.record("out_dir", field::display(command.out_dir.display()));

    let solver = SolverConfigBuilder::new(command.solver)
        .with_imbalance(command.imbalance)
        .with_runs(command.runs)
        .with_coarsening(command.coarsening)
        .with_refinement(command.refinement)
        .with_vcycles(command.vcycles)
        .with_reconstruct(command.reconstruct)
        .with_debug_level(command.debug_level);
    let pipeline = Pipeline::new(command.out_dir, solver);
    let summary = pipeline.run(&command.input)?;
    info!(
        cross_edges = summary.cross_edges,
        realized = summary.realized_parts,
        "pipeline completed"
    );
    Ok(ExecutionReport::Run(summary))
}

#[instrument(
    name = "cli.paths",
    err,
    skip(command),
    fields(input = field::Empty, from = field::Empty, to = field::Empty),
)]
pub(super) fn enumerate_paths(command: PathsCommand) -> Result<ExecutionReport, CliError> {
    let span = Span::current();
    span.record("input", field::display(command.input.display()));
    span.record("from", command.from);
    span.record("to", command.to);

    let raw = std::fs::read_to_string(&command.input).map_err(|source| CliError::Io {
        path: command.input.clone(),
        source,
    })?;
    let edge_list = EdgeListFile::parse(&raw)?;
    let model = AdjacencyModel::from_edges(edge_list.edges());
    let from = VertexId::new(command.from);
    let to = VertexId::new(command.to);
    let limits = PathLimits {
        max_depth: command.max_depth,
        max_paths: command.max_paths,
    };
    let paths = all_simple_paths(&model, from, to, &limits);
    info!(count = paths.len(), "path enumeration completed");
    Ok(ExecutionReport::Paths { from, to, paths })
}

/// Renders `report` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_report(report: &ExecutionReport, mut writer: impl Write) -> io::Result<()> {
    match report {
        ExecutionReport::Run(summary) => {
            writeln!(writer, "requested parts: {}", summary.requested_parts)?;
            writeln!(writer, "realized parts: {}", summary.realized_parts)?;
            writeln!(writer, "vertices: {}", summary.vertices)?;
            writeln!(writer, "edges: {}", summary.edges)?;
            writeln!(writer, "cross edges: {}", summary.cross_edges)?;
            match summary.hyperedge_cut {
                Some(cut) => writeln!(writer, "hyperedge cut: {cut}")?,
                None => writeln!(writer, "hyperedge cut: unavailable")?,
            }
            writeln!(writer, "dot: {}", summary.dot_path.display())?;
            writeln!(writer, "manifest: {}", summary.manifest_path.display())?;
        }
        ExecutionReport::Paths { from, to, paths } => {
            writeln!(writer, "paths from {from} to {to}: {}", paths.len())?;
            for path in paths {
                let rendered: Vec<String> =
                    path.iter().map(ToString::to_string).collect();
                writeln!(writer, "{}", rendered.join(" -> "))?;
            }
        }
    }
    Ok(())
}
