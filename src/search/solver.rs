//! Recursive exhaustive search over seeded boards
//!
//! Every board moves through a fixed sequence of checks: hole validity, then
//! mirror symmetry, then completion, and finally expansion of its candidate
//! placements. Boards are immutable values, so a failed branch is abandoned
//! without undoing anything. Solutions are reported in depth-first candidate
//! order, which makes the output deterministic.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::board::grid::Board;
use crate::board::placement::place;
use crate::board::rectangle::RectangleSize;
use crate::board::seeding::{initial_boards, seeded_boards};
use crate::io::error::Result;
use crate::search::holes::holes_valid;
use crate::search::placements::find_placements;
use crate::search::symmetry::symmetry_pruned;
use crate::shapes::tree::ShapeTree;

/// Outcome of examining one board
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchStep {
    /// Some hole cannot be covered by pentominoes
    HoleRejected,
    /// Mirror image of a board explored elsewhere
    SymmetryRejected,
    /// Every cell is filled
    Solved,
    /// No remaining pentomino fits at the anchor square
    DeadEnd,
    /// Leaves to place next, in tree order
    Expand(Vec<usize>),
}

/// Counters collected during a search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards examined, including the seed
    pub boards_visited: u64,
    /// Boards rejected by the hole check
    pub hole_rejections: u64,
    /// Boards rejected by the symmetry check
    pub symmetry_rejections: u64,
    /// Boards with no candidate placement
    pub dead_ends: u64,
    /// Completed boards
    pub solutions: u64,
}

impl SearchStats {
    /// Add another run's counters to this one
    pub const fn merge(&mut self, other: &Self) {
        self.boards_visited += other.boards_visited;
        self.hole_rejections += other.hole_rejections;
        self.symmetry_rejections += other.symmetry_rejections;
        self.dead_ends += other.dead_ends;
        self.solutions += other.solutions;
    }
}

/// Solutions found from one or more seeds, with search counters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Solved boards in search order
    pub solutions: Vec<Board>,
    /// Counters accumulated while searching
    pub stats: SearchStats,
}

impl SearchOutcome {
    fn absorb(&mut self, other: Self) {
        self.stats.merge(&other.stats);
        self.solutions.extend(other.solutions);
    }
}

/// How the seeds of a rectangle are distributed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Seeds are searched one after another on the calling thread
    #[default]
    Sequential,
    /// Seeds are searched on the rayon pool; output order is unchanged
    Parallel,
}

/// Solutions of one rectangle size
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RectangleReport {
    /// Rectangle that was solved
    pub size: RectangleSize,
    /// Number of seeded boards searched
    pub seeds: usize,
    /// Solutions and counters across all seeds
    pub outcome: SearchOutcome,
}

/// Stateless solver over a shared, read-only shape tree
#[derive(Clone, Copy, Debug)]
pub struct Solver<'t> {
    tree: &'t ShapeTree,
}

impl<'t> Solver<'t> {
    /// Create a solver reading from a shape tree
    pub const fn new(tree: &'t ShapeTree) -> Self {
        Self { tree }
    }

    /// Shape tree the solver places pieces from
    pub const fn tree(&self) -> &'t ShapeTree {
        self.tree
    }

    /// Run the board through the hole, symmetry and completion checks
    pub fn classify(&self, board: &Board) -> SearchStep {
        if !holes_valid(board) {
            return SearchStep::HoleRejected;
        }
        if symmetry_pruned(board) {
            return SearchStep::SymmetryRejected;
        }
        if board.is_complete() {
            return SearchStep::Solved;
        }

        let candidates = find_placements(self.tree, board);
        if candidates.is_empty() {
            SearchStep::DeadEnd
        } else {
            SearchStep::Expand(candidates)
        }
    }

    /// Find every solution reachable from a board
    ///
    /// # Errors
    ///
    /// Returns an error if a candidate placement violates its preconditions,
    /// which indicates a defect in the shape tree or the placement finder
    pub fn solve(&self, board: &Board) -> Result<SearchOutcome> {
        let mut outcome = SearchOutcome::default();
        self.search(board, None, &mut outcome)?;
        Ok(outcome)
    }

    /// Find at most `limit` solutions reachable from a board
    ///
    /// # Errors
    ///
    /// Same conditions as [`Solver::solve`]
    pub fn solve_with_limit(&self, board: &Board, limit: usize) -> Result<SearchOutcome> {
        let mut outcome = SearchOutcome::default();
        self.search(board, Some(limit), &mut outcome)?;
        Ok(outcome)
    }

    /// First solution in search order, if any
    ///
    /// # Errors
    ///
    /// Same conditions as [`Solver::solve`]
    pub fn first_solution(&self, board: &Board) -> Result<Option<Board>> {
        Ok(self.solve_with_limit(board, 1)?.solutions.into_iter().next())
    }

    /// Count every solution reachable from a board
    ///
    /// # Errors
    ///
    /// Same conditions as [`Solver::solve`]
    pub fn count_solutions(&self, board: &Board) -> Result<usize> {
        Ok(self.solve(board)?.solutions.len())
    }

    /// Search several seeds, reporting each finished seed to `on_seed`
    ///
    /// Solutions are concatenated in seed order regardless of the mode.
    ///
    /// # Errors
    ///
    /// Returns the first error in seed order
    pub fn solve_seeds<F>(
        &self,
        seeds: &[Board],
        mode: SearchMode,
        on_seed: F,
    ) -> Result<SearchOutcome>
    where
        F: Fn(usize, &SearchOutcome) + Sync,
    {
        let run = |(index, seed): (usize, &Board)| -> Result<SearchOutcome> {
            let outcome = self.solve(seed)?;
            debug!(
                seed = index,
                solutions = outcome.solutions.len(),
                visited = outcome.stats.boards_visited,
                hole_rejections = outcome.stats.hole_rejections,
                symmetry_rejections = outcome.stats.symmetry_rejections,
                "seed searched"
            );
            on_seed(index, &outcome);
            Ok(outcome)
        };

        let results: Vec<Result<SearchOutcome>> = match mode {
            SearchMode::Sequential => seeds.iter().enumerate().map(run).collect(),
            SearchMode::Parallel => seeds.par_iter().enumerate().map(run).collect(),
        };

        let mut combined = SearchOutcome::default();
        for result in results {
            combined.absorb(result?);
        }
        Ok(combined)
    }

    fn search(
        self,
        board: &Board,
        limit: Option<usize>,
        outcome: &mut SearchOutcome,
    ) -> Result<()> {
        outcome.stats.boards_visited += 1;

        match self.classify(board) {
            SearchStep::HoleRejected => outcome.stats.hole_rejections += 1,
            SearchStep::SymmetryRejected => outcome.stats.symmetry_rejections += 1,
            SearchStep::DeadEnd => outcome.stats.dead_ends += 1,
            SearchStep::Solved => {
                outcome.stats.solutions += 1;
                outcome.solutions.push(board.clone());
            }
            SearchStep::Expand(candidates) => {
                for leaf in candidates {
                    if limit.is_some_and(|limit| outcome.solutions.len() >= limit) {
                        break;
                    }
                    let next = place(self.tree, board, leaf)?;
                    self.search(&next, limit, outcome)?;
                }
            }
        }

        Ok(())
    }
}

/// Solve every seeded board of one rectangle size
///
/// # Errors
///
/// Propagates seeding and search errors
pub fn solve_rectangle(
    tree: &ShapeTree,
    size: RectangleSize,
    mode: SearchMode,
) -> Result<RectangleReport> {
    let seeds = seeded_boards(size)?;
    let outcome = Solver::new(tree).solve_seeds(&seeds, mode, |_, _| {})?;
    info!(
        %size,
        seeds = seeds.len(),
        solutions = outcome.solutions.len(),
        "rectangle solved"
    );
    Ok(RectangleReport {
        size,
        seeds: seeds.len(),
        outcome,
    })
}

/// Every solution of every rectangle size, in size then seed order
///
/// # Errors
///
/// Propagates seeding and search errors
pub fn solve_all(tree: &ShapeTree) -> Result<Vec<Board>> {
    let solver = Solver::new(tree);
    let mut solutions = Vec::new();
    for (size, seeds) in initial_boards()? {
        let outcome = solver.solve_seeds(&seeds, SearchMode::Sequential, |_, _| {})?;
        info!(%size, solutions = outcome.solutions.len(), "rectangle solved");
        solutions.extend(outcome.solutions);
    }
    Ok(solutions)
}
