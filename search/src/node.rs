//! Search node and frontier ordering key.

use taquin_board::board::Board;

/// Index of a node in the search arena.
///
/// Nodes are appended in creation order, so the index doubles as the
/// FIFO tie-break key for the frontier.
pub type NodeId = usize;

/// An immutable node in the search arena.
///
/// `total` is computed once at construction and never mutated, so keys
/// cannot change under a queued frontier entry.
/// Parents are referenced by arena index; many children may share one
/// parent, and the arena keeps every node alive until the search returns.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Full board configuration at this node.
    pub board: Board,
    /// Parent arena index (`None` for the root).
    pub parent: Option<NodeId>,
    /// Path length from the root (g-cost).
    pub depth: u32,
    /// Manhattan estimate to the goal (h-cost).
    pub heuristic: u32,
    /// Frontier priority: `depth + heuristic` (f-cost).
    pub total: u32,
}

impl SearchNode {
    /// The root node: depth 0, no parent.
    #[must_use]
    pub fn root(board: Board) -> Self {
        let heuristic = board.manhattan();
        Self {
            board,
            parent: None,
            depth: 0,
            heuristic,
            total: heuristic,
        }
    }

    /// A successor node one slide below `parent`.
    #[must_use]
    pub fn child(board: Board, parent: NodeId, depth: u32) -> Self {
        let heuristic = board.manhattan();
        Self {
            board,
            parent: Some(parent),
            depth,
            heuristic,
            total: depth + heuristic,
        }
    }
}

/// The frontier ordering key: `(total, creation_order)`.
///
/// Lower `total` first; ties broken FIFO by creation order, so among
/// equal-priority nodes the earliest-generated one pops first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub total: u32,
    pub creation_order: NodeId,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.total
            .cmp(&other.total)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
