//! Taquin Harness: one-solve orchestration over the search crate.
//!
//! The harness composes the board and search crates only: it scrambles a
//! start, runs one search, reconstructs the path, and packages the result
//! as a flat-snapshot report. It does NOT implement search logic itself,
//! and the delivery truncation policy lives here, never in `taquin_search`
//! (the search layer always returns the full path).
//!
//! # Pipeline
//!
//! ```text
//! Scrambler::generate() → search() → reconstruct_path()
//!   → SolveReport::full() → SolveReport::delivery()
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod report;
pub mod runner;
