//! End-to-end partition post-processing.
//!
//! One invocation processes one partitioning result: parse the edge list,
//! hand the graph to the external solver, read its assignment back, group
//! and classify, then persist the cluster graph and the manifest. The
//! flow is single-threaded and synchronous; the only blocking operation
//! is the solver call.

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::{info, instrument, warn};

use crate::{
    assignment::PartitionAssignment,
    blocks::group_blocks,
    classify::classify_edges,
    cluster::ClusterGraph,
    edgelist::EdgeListFile,
    error::{PipelineError, Result, SolverError},
    report::{write_dot, write_manifest},
    solver::{HYPEREDGE_CUT_LABEL, SolverConfigBuilder},
};

/// Well-known name of the intermediate graph file handed to the solver.
///
/// The file is truncated on every run so no stale edges survive across
/// invocations. Because the name is fixed, concurrent runs sharing a
/// working directory would race on it; run them in separate directories.
pub const SOLVER_INPUT_NAME: &str = "solver_input.hgr";

/// Default name of the DOT artifact.
pub const DEFAULT_DOT_NAME: &str = "partitioned_graph.dot";

/// Default name of the manifest artifact.
pub const DEFAULT_MANIFEST_NAME: &str = "partitioned_graph.txt";

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Partition count requested on line 1 of the input.
    pub requested_parts: u32,
    /// Distinct blocks the solver actually realized.
    pub realized_parts: usize,
    /// Number of assigned vertices.
    pub vertices: usize,
    /// Number of parsed edges.
    pub edges: usize,
    /// Number of edges the partitioner cut.
    pub cross_edges: usize,
    /// Total cut weight scraped from solver diagnostics, when present.
    pub hyperedge_cut: Option<u64>,
    /// Where the DOT artifact was written.
    pub dot_path: PathBuf,
    /// Where the manifest artifact was written.
    pub manifest_path: PathBuf,
}

/// Configured post-processing pipeline.
///
/// All entities are rebuilt fresh on each [`Pipeline::run`]; nothing is
/// cached across invocations.
#[derive(Debug, Clone)]
pub struct Pipeline {
    work_dir: PathBuf,
    solver: SolverConfigBuilder,
    dot_name: String,
    manifest_name: String,
}

impl Pipeline {
    /// Creates a pipeline writing intermediates and artifacts under
    /// `work_dir`, invoking the solver described by `solver`. The
    /// partition count on the builder is overridden by the count parsed
    /// from each input file.
    #[must_use]
    pub fn new(work_dir: impl Into<PathBuf>, solver: SolverConfigBuilder) -> Self {
        Self {
            work_dir: work_dir.into(),
            solver,
            dot_name: DEFAULT_DOT_NAME.to_owned(),
            manifest_name: DEFAULT_MANIFEST_NAME.to_owned(),
        }
    }

    /// Overrides the DOT artifact name.
    #[must_use]
    pub fn with_dot_name(mut self, name: impl Into<String>) -> Self {
        self.dot_name = name.into();
        self
    }

    /// Overrides the manifest artifact name.
    #[must_use]
    pub fn with_manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = name.into();
        self
    }

    /// Runs the full post-processing flow on `input`.
    ///
    /// # Errors
    /// Structural problems ([`crate::GraphError`]) and solver failures
    /// ([`SolverError`]) abort immediately; a realized partition count
    /// below the request and a missing cut metric are downgraded to
    /// warnings and the run continues.
    #[instrument(name = "pipeline.run", err, skip(self), fields(input = %input.display()))]
    pub fn run(&self, input: &Path) -> Result<PipelineSummary> {
        let raw = fs::read_to_string(input).map_err(|source| PipelineError::Io {
            path: input.to_path_buf(),
            source,
        })?;
        let edge_list = EdgeListFile::parse(&raw)?;
        let requested = edge_list.requested_parts();

        let graph_path = self.work_dir.join(SOLVER_INPUT_NAME);
        // fs::write truncates, discarding the previous run's graph.
        fs::write(&graph_path, edge_list.solver_input()).map_err(|source| {
            PipelineError::Io {
                path: graph_path.clone(),
                source,
            }
        })?;

        let config = self.solver.clone().with_partitions(requested).build()?;
        let output = config.invoke(&graph_path)?;

        let part_path = config.part_file(&graph_path);
        if !part_path.exists() {
            return Err(SolverError::MissingPartFile { path: part_path }.into());
        }
        let part_raw = fs::read_to_string(&part_path).map_err(|source| PipelineError::Io {
            path: part_path.clone(),
            source,
        })?;

        let assignment = PartitionAssignment::parse(&part_raw)?;
        assignment.verify_part_count(requested);

        let blocks = group_blocks(&assignment, requested)?;
        let classified = classify_edges(edge_list.edges(), &assignment)?;
        let graph = ClusterGraph::build(&blocks, classified);

        let dot_path = self.work_dir.join(&self.dot_name);
        write_artifact(&dot_path, |writer| write_dot(writer, &graph))?;
        let manifest_path = self.work_dir.join(&self.manifest_name);
        write_artifact(&manifest_path, |writer| write_manifest(writer, &blocks))?;

        let hyperedge_cut = match output.metric(HYPEREDGE_CUT_LABEL) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(label = HYPEREDGE_CUT_LABEL, %error, "cut metric unavailable");
                None
            }
        };

        let summary = PipelineSummary {
            requested_parts: requested,
            realized_parts: assignment.realized_parts(),
            vertices: assignment.len(),
            edges: edge_list.edges().len(),
            cross_edges: graph.cross_edge_count(),
            hyperedge_cut,
            dot_path,
            manifest_path,
        };
        info!(
            requested = summary.requested_parts,
            realized = summary.realized_parts,
            vertices = summary.vertices,
            edges = summary.edges,
            cross_edges = summary.cross_edges,
            "post-processing completed"
        );
        Ok(summary)
    }
}

fn write_artifact(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<fs::File>) -> io::Result<()>,
) -> Result<()> {
    let to_pipeline_error = |source: io::Error| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = fs::File::create(path).map_err(to_pipeline_error)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer).map_err(to_pipeline_error)?;
    writer.flush().map_err(to_pipeline_error)?;
    Ok(())
}
