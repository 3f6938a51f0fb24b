//! Shared fixtures for the taquin benchmark suites.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

use taquin_board::board::{Board, CELL_COUNT};

/// Start cells with known optimal depths, shallow to hardest.
///
/// The depth-31 entry is the farthest configuration of the 3×3 puzzle,
/// so solving it bounds worst-case search work.
pub const DEPTH_FIXTURES: &[(u32, [u8; CELL_COUNT])] = &[
    (1, [1, 2, 3, 4, 5, 6, 7, 0, 8]),
    (4, [0, 1, 2, 4, 5, 3, 7, 8, 6]),
    (31, [8, 6, 7, 2, 5, 4, 3, 0, 1]),
];

/// Build a fixture board.
///
/// # Panics
///
/// Panics if `cells` are not a permutation of 0..=8. Benchmark fixture
/// failures are fatal.
#[must_use]
pub fn fixture_board(cells: [u8; CELL_COUNT]) -> Board {
    Board::from_tiles(cells).expect("fixture cells must form a permutation")
}
