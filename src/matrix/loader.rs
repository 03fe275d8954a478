//! Edge-list matrix source.
//!
//! The file format is line oriented: the first line is a header and is
//! skipped, every following line holds one `source target weight` triple
//! of integers separated by whitespace. Blank lines and `#` comments are
//! ignored. Pairs that never appear stay unconnected (+∞).
//!
//! ```text
//! source target weight
//! 0 1 10
//! 1 2 7
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::distance::DistanceMatrix;
use crate::error::MatrixError;

/// One parsed `source target weight` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge {
    line: usize,
    source: usize,
    target: usize,
    weight: i64,
}

/// Reads an edge list from a file.
///
/// `nodes` fixes the matrix size; `None` sizes it to the largest node
/// index seen plus one.
pub fn load_edge_list(
    path: impl AsRef<Path>,
    nodes: Option<usize>,
) -> Result<DistanceMatrix, MatrixError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| MatrixError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let matrix = parse_edge_list(BufReader::new(file), nodes)?;
    tracing::debug!(path = %path.display(), nodes = matrix.size(), "loaded edge list");
    Ok(matrix)
}

/// Parses an edge list from any buffered reader.
///
/// # Examples
///
/// ```
/// use u_antpath::matrix::parse_edge_list;
///
/// let text = "source target weight\n0 1 4\n1 2 3\n";
/// let dm = parse_edge_list(text.as_bytes(), None).unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 1), 4.0);
/// assert!(dm.get(2, 0).is_infinite());
/// ```
pub fn parse_edge_list<R: BufRead>(
    reader: R,
    nodes: Option<usize>,
) -> Result<DistanceMatrix, MatrixError> {
    let mut edges = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line_no == 1 {
            continue; // header
        }
        if let Some(edge) = parse_line(&line, line_no)? {
            edges.push(edge);
        }
    }

    let size = match nodes {
        Some(n) => n,
        None => edges
            .iter()
            .map(|e| e.source.max(e.target) + 1)
            .max()
            .unwrap_or(0),
    };
    if size == 0 {
        return Err(MatrixError::Empty);
    }

    let mut matrix = DistanceMatrix::unconnected(size);
    for edge in edges {
        for node in [edge.source, edge.target] {
            if node >= size {
                return Err(MatrixError::NodeOutOfRange {
                    line: edge.line,
                    node,
                    size,
                });
            }
        }
        matrix.set(edge.source, edge.target, edge.weight as f64);
    }
    Ok(matrix)
}

fn parse_line(raw: &str, line: usize) -> Result<Option<Edge>, MatrixError> {
    let content = raw.split('#').next().unwrap_or("").trim();
    if content.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = content.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(MatrixError::Parse {
            line,
            message: format!("expected 3 columns, found {}", fields.len()),
        });
    }

    let node = |s: &str, what: &str| {
        s.parse::<usize>().map_err(|_| MatrixError::Parse {
            line,
            message: format!("invalid {what} node {s:?}"),
        })
    };
    let source = node(fields[0], "source")?;
    let target = node(fields[1], "target")?;
    let weight = fields[2].parse::<i64>().map_err(|_| MatrixError::Parse {
        line,
        message: format!("invalid weight {:?}", fields[2]),
    })?;
    if weight < 0 {
        return Err(MatrixError::NegativeWeight { line, weight });
    }

    Ok(Some(Edge {
        line,
        source,
        target,
        weight,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let text = "src dst w\n0 1 10\n1 2 7\n2 0 3\n";
        let dm = parse_edge_list(text.as_bytes(), Some(4)).expect("valid");
        assert_eq!(dm.size(), 4);
        assert_eq!(dm.get(0, 1), 10.0);
        assert_eq!(dm.get(1, 2), 7.0);
        assert_eq!(dm.get(2, 0), 3.0);
        assert!(dm.get(1, 0).is_infinite());
        assert!(dm.get(3, 3).is_infinite());
    }

    #[test]
    fn test_infers_size() {
        let text = "header\n0 5 1\n";
        let dm = parse_edge_list(text.as_bytes(), None).expect("valid");
        assert_eq!(dm.size(), 6);
    }

    #[test]
    fn test_skips_blank_and_comments() {
        let text = "header\n\n# a comment\n0 1 2 # trailing\n   \n";
        let dm = parse_edge_list(text.as_bytes(), None).expect("valid");
        assert_eq!(dm.size(), 2);
        assert_eq!(dm.get(0, 1), 2.0);
    }

    #[test]
    fn test_header_is_not_parsed() {
        // A header that looks like data is still skipped.
        let text = "0 1 99\n0 1 5\n";
        let dm = parse_edge_list(text.as_bytes(), None).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let text = "h\n0 1 5\n0 1 8\n";
        let dm = parse_edge_list(text.as_bytes(), None).expect("valid");
        assert_eq!(dm.get(0, 1), 8.0);
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let text = "h\n0 1 5\n1 x 2\n";
        let err = parse_edge_list(text.as_bytes(), None).unwrap_err();
        assert!(matches!(err, MatrixError::Parse { line: 3, .. }), "{err}");
    }

    #[test]
    fn test_wrong_column_count() {
        let text = "h\n0 1\n";
        let err = parse_edge_list(text.as_bytes(), None).unwrap_err();
        assert!(matches!(err, MatrixError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_float_weight_rejected() {
        let text = "h\n0 1 2.5\n";
        assert!(matches!(
            parse_edge_list(text.as_bytes(), None),
            Err(MatrixError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_negative_weight() {
        let text = "h\n0 1 -4\n";
        assert!(matches!(
            parse_edge_list(text.as_bytes(), None),
            Err(MatrixError::NegativeWeight { line: 2, weight: -4 })
        ));
    }

    #[test]
    fn test_node_out_of_range() {
        let text = "h\n0 1 1\n0 7 1\n";
        assert!(matches!(
            parse_edge_list(text.as_bytes(), Some(3)),
            Err(MatrixError::NodeOutOfRange {
                line: 3,
                node: 7,
                size: 3
            })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_edge_list("header only\n".as_bytes(), None),
            Err(MatrixError::Empty)
        ));
        assert!(matches!(
            parse_edge_list("".as_bytes(), Some(0)),
            Err(MatrixError::Empty)
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_edge_list("/definitely/not/here/1000.txt", Some(10)).unwrap_err();
        assert!(matches!(err, MatrixError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("u-antpath-{}.txt", std::process::id()));
        std::fs::write(&path, "source target weight\n0 1 3\n1 2 4\n").expect("write temp file");
        let dm = load_edge_list(&path, Some(3)).expect("valid");
        std::fs::remove_file(&path).ok();
        assert_eq!(dm.get(0, 1), 3.0);
        assert_eq!(dm.get(1, 2), 4.0);
    }
}
