//! Edge-list input parsing.
//!
//! The input format reserves exactly two lines before edge data begins:
//! line 1 carries the requested partition count and line 2 is a header
//! owned by the external solver (consumed here, never interpreted). Every
//! following line describes one edge as two integer tokens separated by
//! non-digit characters.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    error::GraphError,
    vertex::VertexId,
};

static INTEGER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit-run pattern is valid"));

/// Ordered pair of vertices parsed from one adjacency line.
///
/// Parse order is preserved, but the graph is treated as undirected for
/// classification purposes.
///
/// # Examples
/// ```
/// use cutline_core::{Edge, VertexId};
///
/// let edge = Edge::new(VertexId::new(1), VertexId::new(2));
/// assert_eq!(edge.source().get(), 1);
/// assert_eq!(edge.target().get(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
}

impl Edge {
    /// Creates an edge from its two endpoints in parse order.
    #[must_use]
    pub const fn new(source: VertexId, target: VertexId) -> Self {
        Self { source, target }
    }

    /// Returns the first endpoint.
    #[rustfmt::skip]
    #[must_use]
    pub const fn source(self) -> VertexId { self.source }

    /// Returns the second endpoint.
    #[rustfmt::skip]
    #[must_use]
    pub const fn target(self) -> VertexId { self.target }
}

/// Parsed contents of an edge-list input file.
///
/// # Examples
/// ```
/// use cutline_core::EdgeListFile;
///
/// let input = EdgeListFile::parse("2\n3 4\n1 2\n2 3\n3 4\n")?;
/// assert_eq!(input.requested_parts(), 2);
/// assert_eq!(input.edges().len(), 3);
/// # Ok::<(), cutline_core::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeListFile {
    requested_parts: u32,
    header: String,
    solver_input: String,
    edges: Vec<Edge>,
}

impl EdgeListFile {
    /// Parses the full input file: count line, reserved header, then one
    /// edge per line. Blank lines in the edge section are ignored.
    ///
    /// # Errors
    /// Returns [`GraphError::PartCountLine`] when line 1 is not an integer,
    /// [`GraphError::MissingHeader`] when the input ends before the
    /// reserved header, and [`GraphError::EdgeLine`] when any non-blank
    /// edge line yields fewer than two integer tokens.
    pub fn parse(input: &str) -> Result<Self, GraphError> {
        let mut lines = input.lines();
        let count_line = lines.next().unwrap_or_default();
        let requested_parts =
            count_line
                .trim()
                .parse::<u32>()
                .map_err(|_| GraphError::PartCountLine {
                    content: count_line.to_owned(),
                })?;

        let header = lines.next().ok_or(GraphError::MissingHeader)?.to_owned();

        // The solver re-reads everything after the count line verbatim, so
        // the body is retained byte-for-byte rather than re-serialized.
        let solver_input = input
            .split_once('\n')
            .map(|(_, rest)| rest.to_owned())
            .ok_or(GraphError::MissingHeader)?;

        let edges = parse_edges(lines, 3)?;

        Ok(Self {
            requested_parts,
            header,
            solver_input,
            edges,
        })
    }

    /// Returns the partition count requested on line 1.
    #[must_use]
    pub const fn requested_parts(&self) -> u32 {
        self.requested_parts
    }

    /// Returns the reserved solver header from line 2.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns the input body handed to the solver: everything after the
    /// count line, byte-for-byte.
    #[must_use]
    pub fn solver_input(&self) -> &str {
        &self.solver_input
    }

    /// Returns the parsed edges in input order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Parses adjacency lines into edges, preserving input order.
///
/// `first_line` is the one-based number of the first line in the iterator,
/// used to report errors against the input file. Whitespace-only lines are
/// skipped; editors commonly leave one at the end of the file. Every other
/// line must yield at least two integer tokens; any further tokens are
/// ignored (hyperedges are not supported).
///
/// # Errors
/// Returns [`GraphError::EdgeLine`] for any non-blank line with fewer than
/// two integer tokens.
pub fn parse_edges<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    first_line: usize,
) -> Result<Vec<Edge>, GraphError> {
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(offset, line)| {
            let mut tokens = INTEGER_TOKEN
                .find_iter(line)
                .map(|m| m.as_str().parse::<u32>());
            match (tokens.next(), tokens.next()) {
                (Some(Ok(source)), Some(Ok(target))) => {
                    Ok(Edge::new(VertexId::new(source), VertexId::new(target)))
                }
                _ => Err(GraphError::EdgeLine {
                    line: first_line + offset,
                    content: line.to_owned(),
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_count_header_and_edges() {
        let input = EdgeListFile::parse("3\n4 5\n1 2\n2 3\n3 4\n4 1\n").expect("input is valid");
        assert_eq!(input.requested_parts(), 3);
        assert_eq!(input.header(), "4 5");
        assert_eq!(
            input.edges(),
            &[
                Edge::new(VertexId::new(1), VertexId::new(2)),
                Edge::new(VertexId::new(2), VertexId::new(3)),
                Edge::new(VertexId::new(3), VertexId::new(4)),
                Edge::new(VertexId::new(4), VertexId::new(1)),
            ]
        );
    }

    #[test]
    fn edge_count_equals_line_count_minus_two() {
        let input = "2\nheader\n1 2\n2 3\n3 4\n";
        let parsed = EdgeListFile::parse(input).expect("input is valid");
        assert_eq!(parsed.edges().len(), input.lines().count() - 2);
    }

    #[test]
    fn solver_input_drops_only_the_count_line() {
        let parsed = EdgeListFile::parse("2\n3 4\n1 2\n2 3\n3 4\n").expect("input is valid");
        assert_eq!(parsed.solver_input(), "3 4\n1 2\n2 3\n3 4\n");
    }

    #[rstest]
    #[case::separated_by_tabs("1\t2", 1, 2)]
    #[case::separated_by_words("edge 7 to 9", 7, 9)]
    #[case::extra_tokens_ignored("1 2 3 4", 1, 2)]
    fn tokenises_on_digit_runs(#[case] line: &str, #[case] source: u32, #[case] target: u32) {
        let edges = parse_edges([line], 1).expect("line has two tokens");
        assert_eq!(
            edges,
            vec![Edge::new(VertexId::new(source), VertexId::new(target))]
        );
    }

    #[rstest]
    #[case::trailing_newline("2\n3 4\n1 2\n2 3\n3 4\n\n")]
    #[case::interior_blank("2\n3 4\n1 2\n\n2 3\n3 4\n")]
    #[case::whitespace_only_line("2\n3 4\n1 2\n2 3\n   \n3 4\n")]
    fn blank_lines_are_skipped(#[case] input: &str) {
        let parsed = EdgeListFile::parse(input).expect("blank lines are not edges");
        assert_eq!(parsed.edges().len(), 3);
        assert_eq!(
            parsed.edges()[2],
            Edge::new(VertexId::new(3), VertexId::new(4))
        );
    }

    #[test]
    fn error_line_numbers_count_skipped_blanks() {
        let err = parse_edges(["1 2", "", "abc"], 3).expect_err("line must be rejected");
        assert_eq!(
            err,
            GraphError::EdgeLine {
                line: 5,
                content: "abc".to_owned(),
            }
        );
    }

    #[rstest]
    #[case::no_digits("abc")]
    #[case::one_token("17")]
    fn rejects_lines_with_fewer_than_two_tokens(#[case] line: &str) {
        let err = parse_edges(["1 2", line], 3).expect_err("line must be rejected");
        assert_eq!(
            err,
            GraphError::EdgeLine {
                line: 4,
                content: line.to_owned(),
            }
        );
    }

    #[test]
    fn rejects_non_integer_count_line() {
        let err = EdgeListFile::parse("many\n1 1\n1 2\n").expect_err("count must be rejected");
        assert_eq!(
            err,
            GraphError::PartCountLine {
                content: "many".to_owned(),
            }
        );
    }

    #[test]
    fn rejects_input_without_header_line() {
        let err = EdgeListFile::parse("2").expect_err("header is required");
        assert_eq!(err, GraphError::MissingHeader);
    }
}
