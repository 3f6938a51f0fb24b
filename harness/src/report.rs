//! Flat board snapshots and the delivery truncation policy.

use serde::{Deserialize, Serialize};

use taquin_board::board::{Board, CELL_COUNT};

/// One board flattened to its 9 row-major cell values.
pub type BoardSnapshot = [u8; CELL_COUNT];

/// Paths longer than this many snapshots are truncated in the delivery
/// view.
pub const TRUNCATE_THRESHOLD: usize = 100;

/// How many leading and trailing snapshots a truncated view keeps.
pub const TRUNCATE_KEEP: usize = 50;

/// Flatten a reconstructed path for the delivery layer.
#[must_use]
pub fn snapshot_path(path: &[Board]) -> Vec<BoardSnapshot> {
    path.iter().map(Board::cells).collect()
}

/// Serializable outcome of one solve, start to goal inclusive.
///
/// `move_count` always counts the swaps of the full path, even when the
/// delivery view drops interior snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Board snapshots in path order.
    pub steps: Vec<BoardSnapshot>,
    /// Number of blank slides in the full path.
    pub move_count: usize,
    /// Whether interior snapshots were dropped by the delivery policy.
    pub truncated: bool,
}

impl SolveReport {
    /// The complete path, untruncated.
    #[must_use]
    pub fn full(path: &[Board]) -> Self {
        let steps = snapshot_path(path);
        let move_count = steps.len().saturating_sub(1);
        Self {
            steps,
            move_count,
            truncated: false,
        }
    }

    /// The delivery view: beyond [`TRUNCATE_THRESHOLD`] snapshots, keep
    /// only the first and last [`TRUNCATE_KEEP`].
    #[must_use]
    pub fn delivery(path: &[Board]) -> Self {
        let mut report = Self::full(path);
        if report.steps.len() > TRUNCATE_THRESHOLD {
            let tail = report.steps.split_off(report.steps.len() - TRUNCATE_KEEP);
            report.steps.truncate(TRUNCATE_KEEP);
            report.steps.extend(tail);
            report.truncated = true;
        }
        report
    }
}
