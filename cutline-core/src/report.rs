//! Persisted artifacts: the block-membership manifest and the Graphviz
//! DOT rendering of the cluster graph.

use std::io::{self, Write};

use crate::{
    blocks::Block,
    cluster::ClusterGraph,
    error::GraphError,
    vertex::{BlockId, VertexId},
};

/// Writes the plain manifest: one `block:<index>` header per non-empty
/// block, followed by one member vertex per line, in block order.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use cutline_core::{write_manifest, Block, BlockId, VertexId};
///
/// let blocks = vec![Block::new(
///     BlockId::new(0),
///     vec![VertexId::new(1), VertexId::new(2)],
/// )];
/// let mut out = Vec::new();
/// write_manifest(&mut out, &blocks)?;
/// assert_eq!(out, b"block:0\n1\n2\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_manifest(mut writer: impl Write, blocks: &[Block]) -> io::Result<()> {
    for block in blocks.iter().filter(|block| !block.is_empty()) {
        writeln!(writer, "block:{}", block.id())?;
        for vertex in block.members() {
            writeln!(writer, "{vertex}")?;
        }
    }
    Ok(())
}

/// Re-parses a manifest back into blocks.
///
/// Exists so downstream tools (and the round-trip tests) can recover the
/// exact block membership that [`write_manifest`] persisted.
///
/// # Errors
/// Returns [`GraphError::ManifestLine`] when a line is neither a
/// `block:<index>` header nor a member vertex, or when a vertex precedes
/// the first header.
pub fn parse_manifest(input: &str) -> Result<Vec<Block>, GraphError> {
    let mut blocks: Vec<(BlockId, Vec<VertexId>)> = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let malformed = || GraphError::ManifestLine {
            line: index + 1,
            content: line.to_owned(),
        };
        if let Some(label) = line.strip_prefix("block:") {
            let id = label.trim().parse::<u32>().map_err(|_| malformed())?;
            blocks.push((BlockId::new(id), Vec::new()));
        } else {
            let vertex = line.trim().parse::<u32>().map_err(|_| malformed())?;
            let (_, members) = blocks.last_mut().ok_or_else(malformed)?;
            members.push(VertexId::new(vertex));
        }
    }
    Ok(blocks
        .into_iter()
        .map(|(id, members)| Block::new(id, members))
        .collect())
}

/// Serializes the cluster graph as a Graphviz digraph.
///
/// Each cluster becomes a `subgraph cluster_<index>` region so the
/// renderer groups its vertices visually; every edge is emitted, with
/// cross-block edges highlighted in orange to show where the partitioner
/// cut. Layout quality is the renderer's concern.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn write_dot(mut writer: impl Write, graph: &ClusterGraph) -> io::Result<()> {
    writeln!(writer, "digraph partitioned {{")?;
    writeln!(writer, "    graph [size=\"15,10\", splines=ortho, newrank=true];")?;
    for cluster in graph.clusters() {
        writeln!(writer, "    subgraph {} {{", cluster.name())?;
        for vertex in cluster.members() {
            writeln!(writer, "        \"{vertex}\";")?;
        }
        writeln!(writer, "    }}")?;
    }
    for classified in graph.edges() {
        let edge = classified.edge();
        if classified.is_cross() {
            writeln!(
                writer,
                "    \"{}\" -> \"{}\" [color=\"orange\"];",
                edge.source(),
                edge.target()
            )?;
        } else {
            writeln!(writer, "    \"{}\" -> \"{}\";", edge.source(), edge.target())?;
        }
    }
    writeln!(writer, "}}")?;
    Ok(())
}
