//! Cutline core library.
//!
//! Post-processes the output of an external hypergraph partitioning
//! solver: parses the edge-list input, invokes the solver, reads the
//! per-vertex block assignment back, labels each edge intra- or
//! cross-block, and assembles a renderable cluster graph plus a plain
//! manifest of block membership. A bounded simple-path enumerator over
//! the same adjacency model is provided as an independent capability.

mod assignment;
mod blocks;
mod classify;
mod cluster;
mod edgelist;
mod error;
mod paths;
mod pipeline;
mod report;
mod solver;
mod vertex;

pub use crate::{
    assignment::PartitionAssignment,
    blocks::{Block, group_blocks},
    classify::{ClassifiedEdge, EdgeKind, classify_edges},
    cluster::{Cluster, ClusterGraph},
    edgelist::{Edge, EdgeListFile, parse_edges},
    error::{GraphError, GraphErrorCode, PipelineError, Result, SolverError, SolverErrorCode},
    paths::{AdjacencyModel, PathLimits, all_simple_paths},
    pipeline::{
        DEFAULT_DOT_NAME, DEFAULT_MANIFEST_NAME, Pipeline, PipelineSummary, SOLVER_INPUT_NAME,
    },
    report::{parse_manifest, write_dot, write_manifest},
    solver::{HYPEREDGE_CUT_LABEL, SolverConfig, SolverConfigBuilder, SolverOutput},
    vertex::{BlockId, VertexId},
};
