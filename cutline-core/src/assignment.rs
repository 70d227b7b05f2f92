//! Per-vertex block assignments read back from the solver.
//!
//! The solver writes one integer block label per line; vertex `i`
//! (1-indexed) is assigned the label on line `i`.

use std::collections::HashSet;

use tracing::warn;

use crate::{
    error::GraphError,
    vertex::{BlockId, VertexId},
};

/// Mapping from vertex to assigned block index.
///
/// # Examples
/// ```
/// use cutline_core::{PartitionAssignment, VertexId};
///
/// let assignment = PartitionAssignment::parse("0\n0\n1\n1\n")?;
/// assert_eq!(assignment.len(), 4);
/// assert_eq!(assignment.block_of(VertexId::new(3)).map(|b| b.get()), Some(1));
/// # Ok::<(), cutline_core::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionAssignment {
    labels: Vec<BlockId>,
}

impl PartitionAssignment {
    /// Parses a solver partition file: one integer label per line.
    ///
    /// # Errors
    /// Returns [`GraphError::MalformedAssignment`] for any line that is not
    /// a parseable block label.
    pub fn parse(input: &str) -> Result<Self, GraphError> {
        let labels = input
            .lines()
            .enumerate()
            .map(|(index, line)| {
                line.trim()
                    .parse::<u32>()
                    .map(BlockId::new)
                    .map_err(|_| GraphError::MalformedAssignment {
                        line: index + 1,
                        content: line.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { labels })
    }

    /// Number of assigned vertices.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the assignment covers no vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Looks up the block assigned to `vertex`, or `None` when the vertex
    /// lies outside `[1, len]`.
    #[must_use]
    pub fn block_of(&self, vertex: VertexId) -> Option<BlockId> {
        let index = usize::try_from(vertex.get()).ok()?.checked_sub(1)?;
        self.labels.get(index).copied()
    }

    /// Iterates vertices with their assigned blocks in ascending vertex
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, BlockId)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, block)| (VertexId::new(index as u32 + 1), *block))
    }

    /// Counts the distinct block labels actually realized by the solver.
    #[must_use]
    pub fn realized_parts(&self) -> usize {
        self.labels
            .iter()
            .copied()
            .collect::<HashSet<_>>()
            .len()
    }

    /// Warns when the solver realized fewer blocks than requested.
    ///
    /// An undersized graph can leave a block empty; downstream consumers
    /// tolerate fewer blocks, so this is diagnostic only. Returns `true`
    /// when the realized count matches the request.
    pub fn verify_part_count(&self, requested: u32) -> bool {
        let realized = self.realized_parts();
        if realized < requested as usize {
            warn!(
                expected = requested,
                realized,
                "solver placed vertices in fewer blocks than requested; \
                 the graph is likely too small for the desired partition count"
            );
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_one_label_per_line() {
        let assignment = PartitionAssignment::parse("1\n1\n0\n1\n0\n0\n").expect("input is valid");
        assert_eq!(assignment.len(), 6);
        assert_eq!(
            assignment.block_of(VertexId::new(1)),
            Some(BlockId::new(1))
        );
        assert_eq!(
            assignment.block_of(VertexId::new(6)),
            Some(BlockId::new(0))
        );
    }

    #[rstest]
    #[case::out_of_range(7)]
    #[case::zero_is_not_a_vertex(0)]
    fn block_of_rejects_vertices_outside_range(#[case] vertex: u32) {
        let assignment = PartitionAssignment::parse("0\n1\n0\n1\n0\n1\n").expect("input is valid");
        assert_eq!(assignment.block_of(VertexId::new(vertex)), None);
    }

    #[test]
    fn rejects_non_integer_label() {
        let err = PartitionAssignment::parse("0\nx\n1\n").expect_err("label must be rejected");
        assert_eq!(
            err,
            GraphError::MalformedAssignment {
                line: 2,
                content: "x".to_owned(),
            }
        );
    }

    #[rstest]
    #[case("0\n0\n1\n1\n", 2)]
    #[case("0\n0\n0\n", 1)]
    #[case("2\n1\n0\n", 3)]
    fn counts_realized_parts(#[case] input: &str, #[case] expected: usize) {
        let assignment = PartitionAssignment::parse(input).expect("input is valid");
        assert_eq!(assignment.realized_parts(), expected);
    }

    #[test]
    fn verify_part_count_accepts_exact_match() {
        let assignment = PartitionAssignment::parse("0\n1\n").expect("input is valid");
        assert!(assignment.verify_part_count(2));
        assert!(!assignment.verify_part_count(3));
    }
}
