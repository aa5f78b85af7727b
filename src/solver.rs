//! Grid word search using trie-pruned backtracking.
//!
//! A depth-first walk starts from every cell. Each step appends the cell's
//! token to the current candidate and descends the trie by that token. If the
//! trie has no node for the candidate, no dictionary word can start with it and
//! the whole branch is abandoned. Without this pruning the number of simple
//! paths on a 4x4 board runs into the millions.
//!
//! Traversal order is fixed so results are reproducible: start cells in
//! row-major order, neighbors as documented on [`Grid::neighbors`]. In path
//! mode the first path found for a word in that order is the one returned.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::{Deref, DerefMut};

use rayon::prelude::*;
use tracing::{debug, debug_span};

use crate::grid::{Coord, Grid};
use crate::trie::{Trie, TrieNode};
use crate::DEFAULT_MIN_LEN;

/// Search options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    /// Shortest word (in chars) that is reported
    pub min_len: usize,
    /// Allow 8-direction moves instead of only up/down/left/right
    pub allow_diagonal: bool,
}

impl SolveConfig {
    pub fn new(min_len: usize, allow_diagonal: bool) -> Self {
        Self {
            min_len,
            allow_diagonal,
        }
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LEN, true)
    }
}

/// Receives words as the walk finds them.
trait Collector: Default + Send {
    /// Whether the walker maintains the path buffer at all
    const TRACKS_PATH: bool;

    fn record(&mut self, word: &str, path: &[Coord]);

    /// Fold in results from a walk that started later in row-major order.
    fn merge(&mut self, later: Self);

    fn len(&self) -> usize;
}

#[derive(Default)]
struct WordSet(BTreeSet<String>);

impl Collector for WordSet {
    const TRACKS_PATH: bool = false;

    fn record(&mut self, word: &str, _path: &[Coord]) {
        if !self.0.contains(word) {
            self.0.insert(word.to_string());
        }
    }

    fn merge(&mut self, later: Self) {
        self.0.extend(later.0);
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Default)]
struct PathMap(BTreeMap<String, Vec<Coord>>);

impl Collector for PathMap {
    const TRACKS_PATH: bool = true;

    fn record(&mut self, word: &str, path: &[Coord]) {
        // first path wins
        if !self.0.contains_key(word) {
            self.0.insert(word.to_string(), path.to_vec());
        }
    }

    fn merge(&mut self, later: Self) {
        for (word, path) in later.0 {
            self.0.entry(word).or_insert(path);
        }
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Mutable state of one depth-first walk.
///
/// `visited` marks only the cells on the current path, so sibling branches
/// can reuse a cell once the walk has backed out of it.
struct Walker<'a, C> {
    grid: &'a Grid,
    config: SolveConfig,
    visited: Vec<bool>,
    word: String,
    path: Vec<Coord>,
    found: C,
}

impl<'a, C: Collector> Walker<'a, C> {
    fn new(grid: &'a Grid, config: SolveConfig) -> Self {
        Self {
            grid,
            config,
            visited: vec![false; grid.cell_count()],
            word: String::new(),
            path: Vec::new(),
            found: C::default(),
        }
    }

    /// Put `cell` on the current path. The cell comes off again when the
    /// returned step is dropped.
    fn enter(&mut self, cell: Coord) -> Step<'_, 'a, C> {
        let index = self.grid.index(cell);
        let mark = self.word.len();

        self.visited[index] = true;
        self.word.push_str(self.grid.token(cell));
        if C::TRACKS_PATH {
            self.path.push(cell);
        }

        Step {
            walker: self,
            index,
            mark,
        }
    }

    fn walk(&mut self, cell: Coord, parent: &TrieNode) {
        let grid = self.grid;
        let SolveConfig {
            min_len,
            allow_diagonal,
        } = self.config;

        let mut step = self.enter(cell);

        let Some(node) = parent.descend(grid.token(cell)) else {
            return;
        };

        if node.is_word() && step.word.chars().count() >= min_len {
            step.record();
        }

        for next in grid.neighbors(cell, allow_diagonal) {
            if !step.visited[grid.index(next)] {
                step.walk(next, node);
            }
        }
    }

    fn record(&mut self) {
        self.found.record(&self.word, &self.path);
    }
}

/// A cell held on the walker's current path.
struct Step<'w, 'a, C: Collector> {
    walker: &'w mut Walker<'a, C>,
    index: usize,
    mark: usize,
}

impl<'a, C: Collector> Deref for Step<'_, 'a, C> {
    type Target = Walker<'a, C>;

    fn deref(&self) -> &Self::Target {
        &*self.walker
    }
}

impl<C: Collector> DerefMut for Step<'_, '_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.walker
    }
}

impl<C: Collector> Drop for Step<'_, '_, C> {
    fn drop(&mut self) {
        self.walker.visited[self.index] = false;
        self.walker.word.truncate(self.mark);
        if C::TRACKS_PATH {
            self.walker.path.pop();
        }
    }
}

fn search<C: Collector>(grid: &Grid, trie: &Trie, config: SolveConfig) -> C {
    if grid.is_empty() {
        return C::default();
    }

    let _span = debug_span!(
        "solve",
        rows = grid.rows(),
        cols = grid.cols(),
        min_len = config.min_len,
        diagonal = config.allow_diagonal,
        paths = C::TRACKS_PATH
    )
    .entered();

    let starts: Vec<Coord> = grid.coords().collect();

    // Each worker reuses one walker; results stay in start-cell order so the
    // merge below keeps the sequential first-found path.
    let per_start: Vec<C> = starts
        .par_iter()
        .map_init(
            || Walker::<C>::new(grid, config),
            |walker, &start| {
                walker.walk(start, trie.root());
                std::mem::take(&mut walker.found)
            },
        )
        .collect();

    let found = per_start.into_iter().fold(C::default(), |mut acc, later| {
        acc.merge(later);
        acc
    });

    debug!(words = found.len());
    found
}

/// Find every dictionary word of at least `config.min_len` chars that can be
/// traced through adjacent, non-repeating cells.
pub fn solve_grid(grid: &Grid, trie: &Trie, config: SolveConfig) -> BTreeSet<String> {
    search::<WordSet>(grid, trie, config).0
}

/// Like [`solve_grid`], but also returns one path per word: the 0-based
/// `(row, col)` cells from the first letter to the last.
pub fn solve_grid_with_paths(
    grid: &Grid,
    trie: &Trie,
    config: SolveConfig,
) -> BTreeMap<String, Vec<Coord>> {
    search::<PathMap>(grid, trie, config).0
}

/// A dictionary plus search options, reusable across many grids.
#[derive(Debug, Clone)]
pub struct WordHuntSolver {
    trie: Trie,
    config: SolveConfig,
}

impl WordHuntSolver {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            trie: words.into_iter().collect(),
            config: SolveConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SolveConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> SolveConfig {
        self.config
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn word_count(&self) -> usize {
        self.trie.len()
    }

    pub fn solve(&self, grid: &Grid) -> BTreeSet<String> {
        solve_grid(grid, &self.trie, self.config)
    }

    pub fn solve_with_paths(&self, grid: &Grid) -> BTreeMap<String, Vec<Coord>> {
        solve_grid_with_paths(grid, &self.trie, self.config)
    }
}
