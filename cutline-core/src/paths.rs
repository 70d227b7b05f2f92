//! Simple-path enumeration over a directed adjacency model.
//!
//! This is a standalone capability sharing the graph model with the
//! pipeline; nothing in the partition post-processing flow depends on it.

use std::collections::BTreeMap;

use crate::{edgelist::Edge, vertex::VertexId};

/// Mapping from vertex to its ordered out-neighbours.
///
/// # Examples
/// ```
/// use cutline_core::{parse_edges, AdjacencyModel, VertexId};
///
/// let edges = parse_edges(["1 2", "1 3"], 1)?;
/// let model = AdjacencyModel::from_edges(&edges);
/// assert_eq!(model.neighbours(VertexId::new(1)).len(), 2);
/// assert!(model.neighbours(VertexId::new(3)).is_empty());
/// # Ok::<(), cutline_core::GraphError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyModel {
    adjacency: BTreeMap<VertexId, Vec<VertexId>>,
}

impl AdjacencyModel {
    /// Builds the model from the raw edge set, preserving edge order per
    /// source vertex. Both endpoints of every edge get an entry, so sinks
    /// resolve to an empty neighbour list rather than an absent key.
    #[must_use]
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut adjacency: BTreeMap<VertexId, Vec<VertexId>> = BTreeMap::new();
        for edge in edges {
            adjacency.entry(edge.source()).or_default().push(edge.target());
            adjacency.entry(edge.target()).or_default();
        }
        Self { adjacency }
    }

    /// Returns the out-neighbours of `vertex`, empty when the vertex is
    /// unknown.
    #[must_use]
    pub fn neighbours(&self, vertex: VertexId) -> &[VertexId] {
        self.adjacency
            .get(&vertex)
            .map_or(&[], |neighbours| neighbours.as_slice())
    }

    /// Whether the model contains `vertex` at all.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }
}

/// Bounds on path enumeration.
///
/// Enumeration is exponential in the worst case on dense or cyclic
/// graphs, so both the recursion depth and the number of collected paths
/// are capped. Hitting either cap truncates the result set; it is not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathLimits {
    /// Longest path (in vertices) that will be explored.
    pub max_depth: usize,
    /// Most paths that will be collected before enumeration stops.
    pub max_paths: usize,
}

impl Default for PathLimits {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_paths: 10_000,
        }
    }
}

/// Enumerates all simple paths from `start` to `end`.
///
/// A vertex already on the current prefix is never revisited, so cycles
/// cannot recurse. When `start == end` the trivial single-vertex path is
/// returned. A `start` with no adjacency entry yields an empty collection.
/// The order of returned paths follows neighbour order and is
/// deterministic, but callers should treat the collection as unordered.
///
/// # Examples
/// ```
/// use cutline_core::{all_simple_paths, parse_edges, AdjacencyModel, PathLimits, VertexId};
///
/// let edges = parse_edges(["1 2", "1 3", "2 4", "3 4"], 1)?;
/// let model = AdjacencyModel::from_edges(&edges);
/// let paths = all_simple_paths(
///     &model,
///     VertexId::new(1),
///     VertexId::new(4),
///     &PathLimits::default(),
/// );
/// assert_eq!(paths.len(), 2);
/// # Ok::<(), cutline_core::GraphError>(())
/// ```
#[must_use]
pub fn all_simple_paths(
    model: &AdjacencyModel,
    start: VertexId,
    end: VertexId,
    limits: &PathLimits,
) -> Vec<Vec<VertexId>> {
    let mut paths = Vec::new();
    if limits.max_paths == 0 || limits.max_depth == 0 {
        return paths;
    }
    if start == end {
        paths.push(vec![start]);
        return paths;
    }
    if !model.contains(start) {
        return paths;
    }
    let mut prefix = vec![start];
    extend_paths(model, end, limits, &mut prefix, &mut paths);
    paths
}

fn extend_paths(
    model: &AdjacencyModel,
    end: VertexId,
    limits: &PathLimits,
    prefix: &mut Vec<VertexId>,
    paths: &mut Vec<Vec<VertexId>>,
) {
    let Some(&current) = prefix.last() else {
        return;
    };
    if prefix.len() >= limits.max_depth {
        return;
    }
    for &next in model.neighbours(current) {
        if paths.len() >= limits.max_paths {
            return;
        }
        if prefix.contains(&next) {
            continue;
        }
        prefix.push(next);
        if next == end {
            paths.push(prefix.clone());
        } else {
            extend_paths(model, end, limits, prefix, paths);
        }
        prefix.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edgelist::parse_edges;
    use rstest::rstest;

    fn diamond() -> AdjacencyModel {
        let edges = parse_edges(["1 2", "1 3", "2 4", "3 4"], 1).expect("edges are valid");
        AdjacencyModel::from_edges(&edges)
    }

    fn path(ids: &[u32]) -> Vec<VertexId> {
        ids.iter().copied().map(VertexId::new).collect()
    }

    #[test]
    fn enumerates_both_diamond_paths() {
        let mut paths = all_simple_paths(
            &diamond(),
            VertexId::new(1),
            VertexId::new(4),
            &PathLimits::default(),
        );
        paths.sort();
        assert_eq!(paths, vec![path(&[1, 2, 4]), path(&[1, 3, 4])]);
    }

    #[test]
    fn start_equal_to_end_yields_trivial_path() {
        let paths = all_simple_paths(
            &diamond(),
            VertexId::new(2),
            VertexId::new(2),
            &PathLimits::default(),
        );
        assert_eq!(paths, vec![path(&[2])]);
    }

    #[test]
    fn unknown_start_yields_no_paths() {
        let paths = all_simple_paths(
            &diamond(),
            VertexId::new(9),
            VertexId::new(4),
            &PathLimits::default(),
        );
        assert!(paths.is_empty());
    }

    #[test]
    fn cycles_do_not_recurse() {
        let edges = parse_edges(["1 2", "2 1", "2 3"], 1).expect("edges are valid");
        let model = AdjacencyModel::from_edges(&edges);
        let paths = all_simple_paths(
            &model,
            VertexId::new(1),
            VertexId::new(3),
            &PathLimits::default(),
        );
        assert_eq!(paths, vec![path(&[1, 2, 3])]);
    }

    #[rstest]
    #[case::depth_cap(PathLimits { max_depth: 2, max_paths: 100 }, 0)]
    #[case::path_cap(PathLimits { max_depth: 64, max_paths: 1 }, 1)]
    fn limits_truncate_enumeration(#[case] limits: PathLimits, #[case] expected: usize) {
        let paths = all_simple_paths(&diamond(), VertexId::new(1), VertexId::new(4), &limits);
        assert_eq!(paths.len(), expected);
    }
}
