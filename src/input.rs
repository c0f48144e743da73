//! Parsers for the plain-text puzzle inputs the search functions are usually fed from.
//!
//! Each parser works on a `&str`; the `read_*` functions read a file with [`read_data`] first.
//! Line numbers in errors count from 1.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use itertools::Itertools;
use regex::Regex;

use crate::clique::AdjacencyMap;
use crate::error::InputError;
use crate::grid::Grid;
use crate::location::Location;

static INT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn int_pattern() -> &'static Regex {
    INT_PATTERN.get_or_init(|| Regex::new(r"-?\d+").expect("integer pattern is a valid regex"))
}

fn parse_int<T: FromStr<Err = std::num::ParseIntError>>(token: &str, line: usize) -> Result<T, InputError> {
    token.trim().parse().map_err(|source| InputError::ParseInt { line, source })
}

/// The contents of the file at `path` with surrounding whitespace removed.
pub fn read_data(path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| InputError::from_io(path.to_path_buf(), source))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read input");

    Ok(text.trim().to_string())
}

/// Non-blank lines, each trimmed.
pub fn lines(text: &str) -> Vec<&str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty()).collect_vec()
}

/// One integer per non-blank line.
pub fn ints(text: &str) -> Result<Vec<i64>, InputError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_int(line, i + 1))
        .collect()
}

/// A grid with one cell per character, one row per non-blank line.
pub fn char_grid(text: &str) -> Result<Grid<char>, InputError> {
    Grid::from_rows(lines(text).into_iter().map(|line| line.chars().collect_vec()).collect_vec())
}

/// A grid of single digits; any character that is not a decimal digit becomes `empty_value`.
pub fn int_grid(text: &str, empty_value: i64) -> Result<Grid<i64>, InputError> {
    Grid::from_rows(
        lines(text).into_iter()
            .map(|line| line.chars()
                .map(|c| c.to_digit(10).map_or(empty_value, i64::from))
                .collect_vec())
            .collect_vec(),
    )
}

/// One `x{sep}y` location per non-blank line, e.g. `6,1`.
pub fn coord_pairs(text: &str, sep: &str) -> Result<Vec<Location>, InputError> {
    let mut pairs = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((x, y)) = line.split_once(sep) else {
            return Err(InputError::MalformedLine { line: i + 1, reason: format!("expected two values separated by {sep:?}") });
        };
        pairs.push(Location(parse_int(x, i + 1)?, parse_int(y, i + 1)?));
    }

    Ok(pairs)
}

/// An adjacency map from one `a{sep}b` edge per non-blank line, e.g. `kh-tc`.
///
/// Undirected edges are recorded both ways. Directed edges also register their target, with no neighbors of its own unless it appears as a source.
pub fn graph_edges(text: &str, sep: &str, directed: bool) -> Result<AdjacencyMap<String>, InputError> {
    let mut graph: AdjacencyMap<String> = HashMap::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((a, b)) = line.split_once(sep).map(|(a, b)| (a.trim(), b.trim())) else {
            return Err(InputError::MalformedLine { line: i + 1, reason: format!("expected an edge separated by {sep:?}") });
        };

        graph.entry(a.to_string()).or_default().insert(b.to_string());
        let reverse = graph.entry(b.to_string()).or_default();
        if !directed {
            reverse.insert(a.to_string());
        }
    }

    Ok(graph)
}

/// Blocks of text separated by blank lines, each trimmed.
pub fn sections(text: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut start = None;
    let mut end = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            if let Some(begin) = start.take() {
                sections.push(text[begin..end].trim());
            }
        } else {
            start.get_or_insert(offset);
            end = offset + line.len();
        }
        offset += line.len();
    }
    if let Some(begin) = start {
        sections.push(text[begin..end].trim());
    }

    sections
}

/// Whitespace-separated integers read down the columns, e.g. `"3 4\n8 10"` gives `[[3, 8], [4, 10]]`.
pub fn columns(text: &str) -> Result<Vec<Vec<i64>>, InputError> {
    let mut columns: Vec<Vec<i64>> = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let row = line.split_whitespace().map(|token| parse_int(token, i + 1)).collect::<Result<Vec<i64>, _>>()?;
        if columns.is_empty() {
            columns = vec![Vec::new(); row.len()];
        } else if row.len() != columns.len() {
            return Err(InputError::MalformedLine { line: i + 1, reason: format!("expected {} columns, found {}", columns.len(), row.len()) });
        }

        for (column, value) in columns.iter_mut().zip(row) {
            column.push(value);
        }
    }

    Ok(columns)
}

/// Every integer embedded in `text`, including negatives, in reading order: `"p=100,351 v=-10,25"` gives `[100, 351, -10, 25]`.
pub fn extract_ints(text: &str) -> Result<Vec<i64>, InputError> {
    let mut found = Vec::new();
    for (i, line) in text.lines().enumerate() {
        for token in int_pattern().find_iter(line) {
            found.push(parse_int(token.as_str(), i + 1)?);
        }
    }

    Ok(found)
}

/// [`lines`] of the file at `path`.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    Ok(lines(&read_data(path)?).into_iter().map(str::to_string).collect_vec())
}

/// [`ints`] of the file at `path`.
pub fn read_ints(path: impl AsRef<Path>) -> Result<Vec<i64>, InputError> {
    ints(&read_data(path)?)
}

/// [`char_grid`] of the file at `path`.
pub fn read_char_grid(path: impl AsRef<Path>) -> Result<Grid<char>, InputError> {
    char_grid(&read_data(path)?)
}

/// [`int_grid`] of the file at `path`.
pub fn read_int_grid(path: impl AsRef<Path>, empty_value: i64) -> Result<Grid<i64>, InputError> {
    int_grid(&read_data(path)?, empty_value)
}

/// [`graph_edges`] of the file at `path`.
pub fn read_graph_edges(path: impl AsRef<Path>, sep: &str, directed: bool) -> Result<AdjacencyMap<String>, InputError> {
    graph_edges(&read_data(path)?, sep, directed)
}
