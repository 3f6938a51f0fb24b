//! Solve runner: scramble, search, reconstruct.
//!
//! The runner uses ONLY board and search crate APIs. Each call to
//! [`SolveRunner::run`] performs one complete cycle with its own frontier,
//! visited set, and node arena; concurrent callers construct independent
//! runners.

use std::fmt;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use taquin_board::board::Board;
use taquin_board::scramble::Scrambler;
use taquin_search::search::{reconstruct_path, search, SearchStats, Termination};

use crate::report::SolveReport;

/// Error during a solve run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunError {
    /// The search drained its frontier without reaching the goal.
    /// Unreachable for scrambler-produced starts, which are parity-checked
    /// solvable.
    SearchExhausted,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SearchExhausted => {
                write!(f, "search exhausted the frontier without reaching the goal")
            }
        }
    }
}

impl std::error::Error for RunError {}

/// A completed scramble-and-solve cycle.
#[derive(Debug)]
pub struct SolveRun {
    /// The scrambled start board.
    pub start: Board,
    /// The full board sequence, start first, goal last.
    pub path: Vec<Board>,
    /// Search counters for this run.
    pub stats: SearchStats,
}

impl SolveRun {
    /// The untruncated report over the full path.
    #[must_use]
    pub fn report(&self) -> SolveReport {
        SolveReport::full(&self.path)
    }

    /// The delivery view (truncation policy applied).
    #[must_use]
    pub fn delivery_report(&self) -> SolveReport {
        SolveReport::delivery(&self.path)
    }
}

/// Orchestrates one solve per [`SolveRunner::run`] call.
#[derive(Debug)]
pub struct SolveRunner<R> {
    scrambler: Scrambler<R>,
}

impl<R: Rng> SolveRunner<R> {
    /// Build a runner around a caller-supplied scrambler.
    pub fn new(scrambler: Scrambler<R>) -> Self {
        Self { scrambler }
    }

    /// Scramble a start board, search, and reconstruct the path.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::SearchExhausted`] if the search drains its
    /// frontier, which the scrambler's parity check rules out.
    pub fn run(&mut self) -> Result<SolveRun, RunError> {
        let start = self.scrambler.generate();
        debug!("scrambled start board:\n{start}");

        let result = search(start.clone());
        let stats = result.stats;
        match result.termination {
            Termination::Solved { node } => {
                let path = reconstruct_path(&result.nodes, node);
                info!(
                    "solved in {} moves: {} expansions, {} nodes, frontier high water {}",
                    path.len() - 1,
                    stats.expansions,
                    stats.nodes_created,
                    stats.frontier_high_water,
                );
                Ok(SolveRun { start, path, stats })
            }
            Termination::Exhausted => Err(RunError::SearchExhausted),
        }
    }
}

impl SolveRunner<StdRng> {
    /// Runner over an OS-entropy-seeded scrambler.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(Scrambler::from_entropy())
    }

    /// Deterministic runner for reproducible runs and tests.
    #[must_use]
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(Scrambler::seed_from_u64(seed))
    }
}
