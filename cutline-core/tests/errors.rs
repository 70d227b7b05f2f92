//! Stable error-code coverage for the public error enums.

use std::io;
use std::path::PathBuf;

use cutline_core::{
    GraphError, GraphErrorCode, PipelineError, SolverError, SolverErrorCode, VertexId,
};
use rstest::rstest;

#[rstest]
#[case(
    GraphError::PartCountLine { content: "x".to_owned() },
    GraphErrorCode::PartCountLine,
)]
#[case(GraphError::MissingHeader, GraphErrorCode::MissingHeader)]
#[case(
    GraphError::EdgeLine { line: 4, content: "abc".to_owned() },
    GraphErrorCode::EdgeLine,
)]
#[case(
    GraphError::MalformedAssignment { line: 2, content: "x".to_owned() },
    GraphErrorCode::MalformedAssignment,
)]
#[case(
    GraphError::UnassignedVertex { vertex: VertexId::new(9) },
    GraphErrorCode::UnassignedVertex,
)]
#[case(
    GraphError::BlockLabelOutOfRange { vertex: VertexId::new(2), label: 4, requested: 2 },
    GraphErrorCode::BlockLabelOutOfRange,
)]
#[case(
    GraphError::ManifestLine { line: 1, content: "?".to_owned() },
    GraphErrorCode::ManifestLine,
)]
fn returns_expected_graph_code(#[case] error: GraphError, #[case] expected: GraphErrorCode) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
}

#[rstest]
#[case(SolverError::InvalidPartCount { got: 1 }, SolverErrorCode::InvalidPartCount)]
#[case(SolverError::InvalidImbalance { got: 0 }, SolverErrorCode::InvalidImbalance)]
#[case(
    SolverError::Launch {
        binary: PathBuf::from("hmetis"),
        source: io::Error::from(io::ErrorKind::NotFound),
    },
    SolverErrorCode::Launch,
)]
#[case(
    SolverError::NonZeroExit { code: Some(3), stderr: String::new() },
    SolverErrorCode::NonZeroExit,
)]
#[case(
    SolverError::MissingPartFile { path: PathBuf::from("g.hgr.part.2") },
    SolverErrorCode::MissingPartFile,
)]
#[case(
    SolverError::MetricNotFound { label: "Hyperedge Cut".to_owned() },
    SolverErrorCode::MetricNotFound,
)]
fn returns_expected_solver_code(#[case] error: SolverError, #[case] expected: SolverErrorCode) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
}

#[test]
fn pipeline_error_exposes_inner_codes() {
    let graph: PipelineError = GraphError::MissingHeader.into();
    assert_eq!(graph.graph_code(), Some(GraphErrorCode::MissingHeader));
    assert_eq!(graph.solver_code(), None);

    let solver: PipelineError = SolverError::InvalidPartCount { got: 0 }.into();
    assert_eq!(solver.solver_code(), Some(SolverErrorCode::InvalidPartCount));
    assert_eq!(solver.graph_code(), None);

    let io_err = PipelineError::Io {
        path: PathBuf::from("input.hgr"),
        source: io::Error::from(io::ErrorKind::PermissionDenied),
    };
    assert_eq!(io_err.graph_code(), None);
    assert_eq!(io_err.solver_code(), None);
}

#[test]
fn messages_identify_the_offending_location() {
    let err = GraphError::EdgeLine {
        line: 7,
        content: "abc".to_owned(),
    };
    assert_eq!(
        err.to_string(),
        "line 7 must contain two integer endpoints (got `abc`)"
    );

    let err = GraphError::UnassignedVertex {
        vertex: VertexId::new(12),
    };
    assert_eq!(err.to_string(), "edge endpoint 12 has no block assignment");
}
