//! Classification of edges against a partition assignment.

use crate::{
    assignment::PartitionAssignment,
    edgelist::Edge,
    error::GraphError,
};

/// Whether an edge stays inside one block or spans two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Both endpoints share a block.
    Intra,
    /// The endpoints fall in different blocks: the partitioner cut here.
    Cross,
}

/// An edge tagged with its classification.
///
/// # Examples
/// ```
/// use cutline_core::{ClassifiedEdge, Edge, EdgeKind, VertexId};
///
/// let edge = Edge::new(VertexId::new(1), VertexId::new(2));
/// let classified = ClassifiedEdge::new(edge, EdgeKind::Cross);
/// assert!(classified.is_cross());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedEdge {
    edge: Edge,
    kind: EdgeKind,
}

impl ClassifiedEdge {
    /// Tags an edge with its classification.
    #[must_use]
    pub const fn new(edge: Edge, kind: EdgeKind) -> Self {
        Self { edge, kind }
    }

    /// Returns the underlying edge.
    #[rustfmt::skip]
    #[must_use]
    pub const fn edge(self) -> Edge { self.edge }

    /// Returns the classification.
    #[rustfmt::skip]
    #[must_use]
    pub const fn kind(self) -> EdgeKind { self.kind }

    /// Whether this edge spans two blocks.
    #[must_use]
    pub const fn is_cross(self) -> bool {
        matches!(self.kind, EdgeKind::Cross)
    }
}

/// Labels each edge intra-block or cross-block.
///
/// The output covers the input exactly: every edge appears once with one
/// classification, in input order.
///
/// # Errors
/// Returns [`GraphError::UnassignedVertex`] when either endpoint is absent
/// from the assignment, which indicates the edge file and the assignment
/// file disagree about the vertex universe. Such edges are never silently
/// skipped.
///
/// # Examples
/// ```
/// use cutline_core::{classify_edges, parse_edges, EdgeKind, PartitionAssignment};
///
/// let edges = parse_edges(["1 2", "2 3", "3 4"], 1)?;
/// let assignment = PartitionAssignment::parse("0\n0\n1\n1\n")?;
/// let classified = classify_edges(&edges, &assignment)?;
/// let kinds: Vec<_> = classified.iter().map(|c| c.kind()).collect();
/// assert_eq!(kinds, vec![EdgeKind::Intra, EdgeKind::Cross, EdgeKind::Intra]);
/// # Ok::<(), cutline_core::GraphError>(())
/// ```
pub fn classify_edges(
    edges: &[Edge],
    assignment: &PartitionAssignment,
) -> Result<Vec<ClassifiedEdge>, GraphError> {
    edges
        .iter()
        .map(|&edge| {
            let source_block = assignment
                .block_of(edge.source())
                .ok_or(GraphError::UnassignedVertex {
                    vertex: edge.source(),
                })?;
            let target_block = assignment
                .block_of(edge.target())
                .ok_or(GraphError::UnassignedVertex {
                    vertex: edge.target(),
                })?;
            let kind = if source_block == target_block {
                EdgeKind::Intra
            } else {
                EdgeKind::Cross
            };
            Ok(ClassifiedEdge::new(edge, kind))
        })
        .collect()
}
