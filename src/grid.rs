//! The letter grid.
//!
//! Cells hold lower-cased tokens, normally a single letter. Some boards print
//! digraphs such as "qu" on one tile, so a token is a `String` rather than a
//! `char`.

use std::fmt;

use crate::error::{Error, Result};

/// A `(row, col)` cell position, 0-based from the top-left corner.
pub type Coord = (usize, usize);

static ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
static DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A rectangular grid of tokens, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<String>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from rows of tokens.
    ///
    /// Tokens are trimmed and lower-cased. Every row must be as long as the
    /// first one, otherwise `Error::InvalidInput` names the offending row.
    /// A token that trims to nothing is rejected with `Error::EmptyToken`.
    pub fn new<S: AsRef<str>>(rows: Vec<Vec<S>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (row, tokens) in rows.iter().enumerate() {
            if tokens.len() != cols {
                return Err(Error::InvalidInput {
                    row,
                    expected: cols,
                    found: tokens.len(),
                });
            }
            for (col, token) in tokens.iter().enumerate() {
                let token = token.as_ref().trim().to_lowercase();
                if token.is_empty() {
                    return Err(Error::EmptyToken { row, col });
                }
                cells.push(token);
            }
        }

        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Parse a `size` x `size` grid from text.
    ///
    /// Accepted forms:
    /// - multiline rows: `"rnsm\ntduo\nrasa\nethh"`, or space-separated
    ///   tokens per line: `"r n s m\nt d u o\n..."`
    /// - slash-separated rows: `"r n s m / t d u o / r a s a / e t h h"`
    /// - compact: `"rnsmtduorasaethh"`
    pub fn parse(input: &str, size: usize) -> Result<Self> {
        let s = input.trim().to_lowercase();

        let rows = if s.contains('\n') {
            parse_multiline(&s, size)?
        } else if s.contains('/') {
            parse_slashed(&s, size)?
        } else {
            parse_compact(&s, size)?
        };

        Self::new(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if there is nothing to search: no rows, or rows with no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn token(&self, (row, col): Coord) -> &str {
        &self.cells[self.index((row, col))]
    }

    pub(crate) fn index(&self, (row, col): Coord) -> usize {
        row * self.cols + col
    }

    /// All cells in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
    }

    /// Cells adjacent to `(row, col)`, never wrapping around an edge.
    ///
    /// Order is fixed: up, down, left, right, then (if enabled) up-left,
    /// up-right, down-left, down-right.
    pub fn neighbors(
        &self,
        (row, col): Coord,
        allow_diagonal: bool,
    ) -> impl Iterator<Item = Coord> + '_ {
        let diagonals: &'static [(isize, isize)] = if allow_diagonal { &DIAGONAL } else { &[] };
        ORTHOGONAL.iter().chain(diagonals).filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.rows && c < self.cols).then_some((r, c))
        })
    }

    /// Iterate over rows as token slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        // chunks panics on 0
        self.cells.chunks(self.cols.max(1))
    }
}

/// True if `a` and `b` are distinct and touch under the given adjacency rule.
pub fn is_adjacent(a: Coord, b: Coord, allow_diagonal: bool) -> bool {
    let dr = a.0.abs_diff(b.0);
    let dc = a.1.abs_diff(b.1);
    match (dr, dc) {
        (0, 1) | (1, 0) => true,
        (1, 1) => allow_diagonal,
        _ => false,
    }
}

fn letters(s: &str) -> Vec<String> {
    s.chars()
        .filter(|c| c.is_alphabetic())
        .map(String::from)
        .collect()
}

fn tokens(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

fn parse_multiline(s: &str, size: usize) -> Result<Vec<Vec<String>>> {
    let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    if lines.len() != size {
        return Err(Error::GridParse(format!(
            "expected {} rows, got {}",
            size,
            lines.len()
        )));
    }

    lines
        .into_iter()
        .map(|line| {
            let row = if line.contains(' ') { tokens(line) } else { letters(line) };
            if row.len() != size {
                return Err(Error::GridParse(format!(
                    "each row must have {} letters, got {:?}",
                    size, line
                )));
            }
            Ok(row)
        })
        .collect()
}

fn parse_slashed(s: &str, size: usize) -> Result<Vec<Vec<String>>> {
    let rows = s
        .split('/')
        .map(str::trim)
        .map(|row| {
            let parts = tokens(row);
            if parts.len() == size {
                return Ok(parts);
            }
            let row_letters = letters(row);
            if row_letters.len() != size {
                return Err(Error::GridParse(format!(
                    "expected {} letters per row in slash format, got {:?}",
                    size, row
                )));
            }
            Ok(row_letters)
        })
        .collect::<Result<Vec<_>>>()?;

    if rows.len() != size {
        return Err(Error::GridParse(format!(
            "expected {} rows in slash format, got {}",
            size,
            rows.len()
        )));
    }
    Ok(rows)
}

fn parse_compact(s: &str, size: usize) -> Result<Vec<Vec<String>>> {
    let cells = size
        .checked_mul(size)
        .ok_or_else(|| Error::GridParse(format!("grid size {} is too large", size)))?;

    let compact = letters(s);
    if compact.len() != cells {
        return Err(Error::GridParse(format!(
            "expected {} letters, got {}",
            cells,
            compact.len()
        )));
    }
    Ok(compact.chunks(size.max(1)).map(<[String]>::to_vec).collect())
}

impl fmt::Display for Grid {
    /// Board layout with 1-based row labels and a column footer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            let line: Vec<String> = row.iter().map(|t| t.to_uppercase()).collect();
            writeln!(f, "{}: {}", r + 1, line.join(" "))?;
        }
        let footer: Vec<String> = (1..=self.cols).map(|c| c.to_string()).collect();
        write!(f, "    {}", footer.join(" "))
    }
}
