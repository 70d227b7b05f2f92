//! Error types for the cutline core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use crate::vertex::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            /// Retrieve the stable code for this error.
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Structural error raised while parsing or reconciling graph inputs.
///
/// Every variant is fatal: classification correctness depends on complete,
/// consistent input, so no partial recovery is attempted.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The first input line did not hold the requested partition count.
    #[error("line 1 must be the requested partition count (got `{content}`)")]
    PartCountLine {
        /// Raw contents of the offending line.
        content: String,
    },
    /// The input ended before the reserved header line.
    #[error("input ended before the reserved header line")]
    MissingHeader,
    /// An adjacency line yielded fewer than two integer tokens.
    #[error("line {line} must contain two integer endpoints (got `{content}`)")]
    EdgeLine {
        /// One-based line number within the input file.
        line: usize,
        /// Raw contents of the offending line.
        content: String,
    },
    /// An assignment line was not a parseable block label.
    #[error("assignment line {line} is not an integer block label (got `{content}`)")]
    MalformedAssignment {
        /// One-based line number within the assignment file.
        line: usize,
        /// Raw contents of the offending line.
        content: String,
    },
    /// An edge endpoint is missing from the partition assignment.
    ///
    /// Signals an inconsistency between the edge file and the assignment
    /// file produced by the solver.
    #[error("edge endpoint {vertex} has no block assignment")]
    UnassignedVertex {
        /// The vertex absent from the assignment.
        vertex: VertexId,
    },
    /// A block label fell outside the requested partition range.
    ///
    /// Block indices are confined to `[0, requested)`; anything larger
    /// means the assignment file does not belong to this run.
    #[error("vertex {vertex} is assigned block {label}, outside the requested range 0..{requested}")]
    BlockLabelOutOfRange {
        /// The vertex carrying the out-of-range label.
        vertex: VertexId,
        /// The rejected block label.
        label: u32,
        /// Partition count requested for the run.
        requested: u32,
    },
    /// A manifest line was neither a block header nor a member vertex.
    #[error("manifest line {line} is not a block header or vertex (got `{content}`)")]
    ManifestLine {
        /// One-based line number within the manifest.
        line: usize,
        /// Raw contents of the offending line.
        content: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The first input line did not hold the requested partition count.
        PartCountLine => PartCountLine { .. } => "GRAPH_PART_COUNT_LINE",
        /// The input ended before the reserved header line.
        MissingHeader => MissingHeader => "GRAPH_MISSING_HEADER",
        /// An adjacency line yielded fewer than two integer tokens.
        EdgeLine => EdgeLine { .. } => "GRAPH_EDGE_LINE",
        /// An assignment line was not a parseable block label.
        MalformedAssignment => MalformedAssignment { .. } => "GRAPH_MALFORMED_ASSIGNMENT",
        /// An edge endpoint is missing from the partition assignment.
        UnassignedVertex => UnassignedVertex { .. } => "GRAPH_UNASSIGNED_VERTEX",
        /// A block label fell outside the requested partition range.
        BlockLabelOutOfRange => BlockLabelOutOfRange { .. } => "GRAPH_BLOCK_LABEL_OUT_OF_RANGE",
        /// A manifest line was neither a block header nor a member vertex.
        ManifestLine => ManifestLine { .. } => "GRAPH_MANIFEST_LINE",
    }
}

/// Error raised while configuring or invoking the external solver.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SolverError {
    /// The requested partition count was below the solver's minimum.
    #[error("partition count must be at least 2 (got {got})")]
    InvalidPartCount {
        /// The rejected partition count.
        got: u32,
    },
    /// The imbalance factor fell outside the solver's accepted domain.
    #[error("imbalance factor must be in 1..=49 (got {got})")]
    InvalidImbalance {
        /// The rejected imbalance factor.
        got: u32,
    },
    /// The solver process could not be spawned.
    #[error("failed to launch solver `{binary}`: {source}")]
    Launch {
        /// Path to the solver binary.
        binary: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The solver exited with a non-zero status.
    #[error("solver exited with status {code:?}: {stderr}")]
    NonZeroExit {
        /// Exit code, when the process terminated normally.
        code: Option<i32>,
        /// Captured standard error output.
        stderr: String,
    },
    /// The solver exited cleanly but its partition file never appeared.
    #[error("solver produced no partition file at `{path}`")]
    MissingPartFile {
        /// Expected location of the partition file.
        path: PathBuf,
    },
    /// No `Label: <integer>` line matched in the solver diagnostics.
    ///
    /// Recoverable: the metric is simply unavailable for this run.
    #[error("no `{label}: <integer>` line found in solver output")]
    MetricNotFound {
        /// The label that was searched for.
        label: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`SolverError`] variants.
    enum SolverErrorCode for SolverError {
        /// The requested partition count was below the solver's minimum.
        InvalidPartCount => InvalidPartCount { .. } => "SOLVER_INVALID_PART_COUNT",
        /// The imbalance factor fell outside the solver's accepted domain.
        InvalidImbalance => InvalidImbalance { .. } => "SOLVER_INVALID_IMBALANCE",
        /// The solver process could not be spawned.
        Launch => Launch { .. } => "SOLVER_LAUNCH_FAILED",
        /// The solver exited with a non-zero status.
        NonZeroExit => NonZeroExit { .. } => "SOLVER_NON_ZERO_EXIT",
        /// The solver exited cleanly but its partition file never appeared.
        MissingPartFile => MissingPartFile { .. } => "SOLVER_MISSING_PART_FILE",
        /// No labelled metric line matched in the solver diagnostics.
        MetricNotFound => MetricNotFound { .. } => "SOLVER_METRIC_NOT_FOUND",
    }
}

/// Error surfaced by the end-to-end post-processing pipeline.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Parsing or reconciling graph inputs failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Configuring or invoking the external solver failed.
    #[error(transparent)]
    Solver(#[from] SolverError),
    /// File I/O on an input, intermediate, or artifact path failed.
    #[error("I/O on `{path}` failed: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    /// Retrieve the inner [`GraphErrorCode`] when the error is structural.
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }

    /// Retrieve the inner [`SolverErrorCode`] when the solver failed.
    pub const fn solver_code(&self) -> Option<SolverErrorCode> {
        match self {
            Self::Solver(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the pipeline API.
pub type Result<T> = core::result::Result<T, PipelineError>;
