//! Scrambling and the inversion-parity solvability check.
//!
//! A permutation of 0..=8 is reachable from the goal iff its inversion
//! count over the non-blank values is even, the standard parity invariant
//! of the sliding-puzzle group action. The [`Scrambler`] shuffles until
//! that check passes, so every board it hands out has a reachable goal.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::{Board, CELL_COUNT, GOAL};

/// Number of pairs of non-blank values out of natural order.
#[must_use]
pub fn count_inversions(cells: &[u8; CELL_COUNT]) -> u32 {
    let mut inversions = 0;
    for (index, &value) in cells.iter().enumerate() {
        if value == 0 {
            continue;
        }
        for &later in &cells[index + 1..] {
            if later != 0 && later < value {
                inversions += 1;
            }
        }
    }
    inversions
}

/// True iff the permutation can reach the goal by legal slides.
///
/// For the 3×3 puzzle this is exactly "even inversion count"; the blank's
/// row does not enter the parity on an odd-sided grid.
#[must_use]
pub fn is_solvable(cells: &[u8; CELL_COUNT]) -> bool {
    count_inversions(cells) % 2 == 0
}

/// Generator of uniformly random, solvable start boards.
///
/// The random source is injected so callers (and tests) control
/// determinism; [`Scrambler::seed_from_u64`] gives a reproducible stream.
#[derive(Debug)]
pub struct Scrambler<R> {
    rng: R,
}

impl<R: Rng> Scrambler<R> {
    /// Wrap a caller-supplied random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Produce a uniformly random solvable board.
    ///
    /// Fisher–Yates shuffles the tile values and re-shuffles until the
    /// parity check accepts; half of all permutations are solvable, so
    /// the loop settles after two attempts on average.
    pub fn generate(&mut self) -> Board {
        let mut cells = GOAL;
        loop {
            cells.shuffle(&mut self.rng);
            if !is_solvable(&cells) {
                continue;
            }
            // `cells` stays a permutation of 0..=8 under shuffle.
            if let Ok(board) = Board::from_tiles(cells) {
                return board;
            }
        }
    }
}

impl Scrambler<StdRng> {
    /// Scrambler over an OS-entropy-seeded generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic scrambler for reproducible runs and tests.
    #[must_use]
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}
