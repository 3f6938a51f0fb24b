//! Taquin Board: the 3×3 sliding-tile state carrier.
//!
//! This crate owns the puzzle domain and depends on nothing internal.
//!
//! # Crate dependency graph
//!
//! ```text
//! taquin_board  ←  taquin_search  ←  taquin_harness
//! (tiles, parity)   (frontier, nodes)   (runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`board::Board`] — immutable 3×3 grid with a cached blank position
//! - [`board::BoardKey`] — canonical serialization for set membership
//! - [`scramble::Scrambler`] — solvable-board generator over an injected RNG

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod scramble;
