//! Cluster-graph assembly from blocks and classified edges.
//!
//! The cluster graph is the renderable product of the pipeline: one named
//! cluster per non-empty block, plus the full edge set with per-edge
//! classification so a reviewer can see where the partitioner cut.

use crate::{
    blocks::Block,
    classify::ClassifiedEdge,
    vertex::{BlockId, VertexId},
};

/// A named, visually grouped region holding one block's vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    id: BlockId,
    name: String,
    members: Vec<VertexId>,
}

impl Cluster {
    /// Returns the source block index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn id(&self) -> BlockId { self.id }

    /// Returns the cluster name (`cluster_<index>`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the member vertices.
    #[must_use]
    pub fn members(&self) -> &[VertexId] {
        &self.members
    }
}

/// Cluster-annotated graph model ready for serialization.
///
/// # Examples
/// ```
/// use cutline_core::{
///     classify_edges, group_blocks, parse_edges, ClusterGraph, PartitionAssignment,
/// };
///
/// let edges = parse_edges(["1 2", "2 3", "3 4"], 1)?;
/// let assignment = PartitionAssignment::parse("0\n0\n1\n1\n")?;
/// let blocks = group_blocks(&assignment, 2)?;
/// let classified = classify_edges(&edges, &assignment)?;
/// let graph = ClusterGraph::build(&blocks, classified);
/// assert_eq!(graph.clusters().len(), 2);
/// assert_eq!(graph.cross_edge_count(), 1);
/// # Ok::<(), cutline_core::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterGraph {
    clusters: Vec<Cluster>,
    edges: Vec<ClassifiedEdge>,
}

impl ClusterGraph {
    /// Assembles the cluster graph from grouped blocks and classified
    /// edges.
    ///
    /// Empty blocks contribute no cluster. Each vertex belongs to exactly
    /// one cluster because each vertex carries exactly one block label.
    #[must_use]
    pub fn build(blocks: &[Block], edges: Vec<ClassifiedEdge>) -> Self {
        let clusters = blocks
            .iter()
            .filter(|block| !block.is_empty())
            .map(|block| Cluster {
                id: block.id(),
                name: format!("cluster_{}", block.id()),
                members: block.members().to_vec(),
            })
            .collect();
        Self { clusters, edges }
    }

    /// Returns the clusters in block order.
    #[must_use]
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Returns every edge with its classification, in input order.
    #[must_use]
    pub fn edges(&self) -> &[ClassifiedEdge] {
        &self.edges
    }

    /// Counts the edges the partitioner cut.
    #[must_use]
    pub fn cross_edge_count(&self) -> usize {
        self.edges.iter().filter(|edge| edge.is_cross()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assignment::PartitionAssignment,
        blocks::group_blocks,
        classify::classify_edges,
        edgelist::parse_edges,
    };

    #[test]
    fn skips_empty_blocks() {
        let assignment = PartitionAssignment::parse("0\n0\n2\n2\n").expect("input is valid");
        let blocks = group_blocks(&assignment, 3).expect("labels are in range");
        assert_eq!(blocks.len(), 3);

        let graph = ClusterGraph::build(&blocks, Vec::new());
        let names: Vec<_> = graph.clusters().iter().map(Cluster::name).collect();
        assert_eq!(names, vec!["cluster_0", "cluster_2"]);
    }

    #[test]
    fn carries_every_edge_with_its_classification() {
        let edges = parse_edges(["1 2", "2 3", "3 4"], 1).expect("edges are valid");
        let assignment = PartitionAssignment::parse("0\n0\n1\n1\n").expect("input is valid");
        let blocks = group_blocks(&assignment, 2).expect("labels are in range");
        let classified = classify_edges(&edges, &assignment).expect("all endpoints assigned");

        let graph = ClusterGraph::build(&blocks, classified);
        assert_eq!(graph.edges().len(), 3);
        assert_eq!(graph.cross_edge_count(), 1);
    }

    #[test]
    fn each_vertex_belongs_to_one_cluster() {
        let assignment = PartitionAssignment::parse("0\n1\n0\n1\n").expect("input is valid");
        let blocks = group_blocks(&assignment, 2).expect("labels are in range");
        let graph = ClusterGraph::build(&blocks, Vec::new());

        let mut seen: Vec<u32> = graph
            .clusters()
            .iter()
            .flat_map(|cluster| cluster.members().iter().map(|v| v.get()))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }
}
