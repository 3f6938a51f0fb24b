//! Search entry point and expansion loop.

use taquin_board::board::Board;

use crate::frontier::{Frontier, VisitedSet};
use crate::node::{FrontierKey, NodeId, SearchNode};

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The goal board was popped; `node` indexes it in the arena.
    Solved { node: NodeId },
    /// The frontier emptied without reaching the goal: the expected
    /// outcome for unsolvable starts, never a failure.
    Exhausted,
}

/// Counters describing one search invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded (goal and stale pops excluded).
    pub expansions: u64,
    /// Nodes appended to the arena, root included.
    pub nodes_created: u64,
    /// Successors dropped at push time because their board was closed.
    pub duplicates_suppressed: u64,
    /// Pops skipped because the board was closed after the entry was queued.
    pub stale_pops: u64,
    /// High-water mark of frontier size.
    pub frontier_high_water: usize,
}

/// Result of a search execution.
///
/// The arena holds every node created during the run (root at index 0),
/// so parent links stay resolvable for path reconstruction regardless of
/// how the search terminated.
#[derive(Debug)]
pub struct SearchResult {
    /// Why the loop stopped.
    pub termination: Termination,
    /// All nodes created during search, indexed by [`NodeId`].
    pub nodes: Vec<SearchNode>,
    /// Run counters.
    pub stats: SearchStats,
}

impl SearchResult {
    /// Returns `true` if the search terminated on the goal board.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.termination, Termination::Solved { .. })
    }

    /// The ordered board sequence from start to goal, or `None` when the
    /// search exhausted its frontier.
    #[must_use]
    pub fn solution_path(&self) -> Option<Vec<Board>> {
        match self.termination {
            Termination::Solved { node } => Some(reconstruct_path(&self.nodes, node)),
            Termination::Exhausted => None,
        }
    }
}

/// Run A* from `start` until the goal is popped or the frontier empties.
///
/// One invocation owns its frontier, visited set, and node arena; nothing
/// is shared across calls. The loop pops the minimum `(total,
/// creation_order)` key, tests the goal, closes the popped board, and
/// pushes every successor whose board is still open. A board can wait in
/// the frontier at several depths, so pops re-check the visited set and
/// skip entries whose board closed in the meantime.
///
/// # Precondition
///
/// `Solved` termination is guaranteed only for solvable starts (even
/// inversion parity, as `taquin_board::scramble::Scrambler` enforces).
/// An unsolvable start exhausts the reachable half of the permutation
/// space (9!/2 boards) and terminates [`Termination::Exhausted`].
#[must_use]
pub fn search(start: Board) -> SearchResult {
    let mut nodes = vec![SearchNode::root(start)];
    let mut frontier = Frontier::new();
    let mut visited = VisitedSet::new();
    let mut stats = SearchStats {
        nodes_created: 1,
        ..SearchStats::default()
    };

    frontier.push(
        FrontierKey {
            total: nodes[0].total,
            creation_order: 0,
        },
        0,
    );

    let termination = loop {
        let Some(current) = frontier.pop() else {
            break Termination::Exhausted;
        };

        let current_key = nodes[current].board.key();
        if visited.contains(&current_key) {
            stats.stale_pops += 1;
            continue;
        }

        if nodes[current].board.is_goal() {
            break Termination::Solved { node: current };
        }

        visited.insert(current_key);
        stats.expansions += 1;

        let child_depth = nodes[current].depth + 1;
        for successor in nodes[current].board.successors() {
            if visited.contains(&successor.key()) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let id = nodes.len();
            let child = SearchNode::child(successor, current, child_depth);
            frontier.push(
                FrontierKey {
                    total: child.total,
                    creation_order: id,
                },
                id,
            );
            nodes.push(child);
            stats.nodes_created += 1;
        }
    };

    stats.frontier_high_water = frontier.high_water();
    SearchResult {
        termination,
        nodes,
        stats,
    }
}

/// Reconstruct the board sequence from the root to `goal`, start first.
///
/// Walks `parent` indices from `goal` back to the root, then reverses.
#[must_use]
pub fn reconstruct_path(nodes: &[SearchNode], goal: NodeId) -> Vec<Board> {
    let mut path = Vec::new();
    let mut current = Some(goal);

    while let Some(id) = current {
        path.push(nodes[id].board.clone());
        current = nodes[id].parent;
    }

    path.reverse();
    path
}

/// Convenience wrapper: search and reconstruct in one call.
///
/// Returns `None` when the frontier exhausts (unsolvable start).
#[must_use]
pub fn solve(start: Board) -> Option<Vec<Board>> {
    search(start).solution_path()
}
