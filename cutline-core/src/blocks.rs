//! Grouping of vertices into per-block collections.

use crate::{
    assignment::PartitionAssignment,
    error::GraphError,
    vertex::{BlockId, VertexId},
};

/// Ordered collection of the vertices assigned to one block.
///
/// Member order is the order of first appearance while scanning the
/// assignment, which for a dense vertex range is ascending vertex order.
///
/// # Examples
/// ```
/// use cutline_core::{Block, BlockId, VertexId};
///
/// let block = Block::new(BlockId::new(0), vec![VertexId::new(1), VertexId::new(2)]);
/// assert_eq!(block.len(), 2);
/// assert!(!block.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    id: BlockId,
    members: Vec<VertexId>,
}

impl Block {
    /// Creates a block from its index and member vertices.
    #[must_use]
    pub const fn new(id: BlockId, members: Vec<VertexId>) -> Self {
        Self { id, members }
    }

    /// Returns the block index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn id(&self) -> BlockId { self.id }

    /// Returns the member vertices in first-appearance order.
    #[must_use]
    pub fn members(&self) -> &[VertexId] {
        &self.members
    }

    /// Number of member vertices.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the solver left this block empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Groups vertices into ordered blocks with a single ascending pass.
///
/// Exactly `requested_parts` blocks are returned so block indices stay
/// aligned with the solver's label space even when some blocks end up
/// empty. A label at or beyond `requested_parts` means the assignment
/// file does not match the run and is rejected before any grouping
/// happens. Stable and O(V).
///
/// # Errors
/// Returns [`GraphError::BlockLabelOutOfRange`] when any vertex carries a
/// label outside `[0, requested_parts)`.
///
/// # Examples
/// ```
/// use cutline_core::{group_blocks, PartitionAssignment};
///
/// let assignment = PartitionAssignment::parse("0\n0\n1\n1\n")?;
/// let blocks = group_blocks(&assignment, 2)?;
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].members().len(), 2);
/// # Ok::<(), cutline_core::GraphError>(())
/// ```
pub fn group_blocks(
    assignment: &PartitionAssignment,
    requested_parts: u32,
) -> Result<Vec<Block>, GraphError> {
    let mut members: Vec<Vec<VertexId>> = vec![Vec::new(); requested_parts as usize];
    for (vertex, block) in assignment.iter() {
        let label = block.get();
        if label >= requested_parts {
            return Err(GraphError::BlockLabelOutOfRange {
                vertex,
                label,
                requested: requested_parts,
            });
        }
        members[label as usize].push(vertex);
    }

    Ok(members
        .into_iter()
        .enumerate()
        .map(|(index, vertices)| Block::new(BlockId::new(index as u32), vertices))
        .collect())
}
