//! Taquin Search: deterministic A* over the sliding-tile board.
//!
//! This crate provides the search layer. It depends only on
//! `taquin_board` — it does NOT depend on `taquin_harness`.
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
//! - [`node::SearchNode`] — arena-allocated node with f = g + h fixed at creation
//! - [`frontier::Frontier`] — min-heap keyed by `(total, creation_order)`
//! - [`frontier::VisitedSet`] — closed-board keys, marked at pop time
//! - [`search::SearchResult`] — termination, node arena, and run statistics

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod frontier;
pub mod node;
pub mod search;
