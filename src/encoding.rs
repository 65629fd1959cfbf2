//! Canonical state keys for value-table lookup.
//!
//! Observations are keyed by value, not identity: two structurally identical
//! observations must map to the same table entry. The key is a structured
//! record with derived equality and hashing rather than a concatenated
//! string, so adjacent fields cannot run together (coordinates "1","23"
//! versus "12","3" stay distinct).

use serde::{Deserialize, Serialize};

use crate::{grid::BitGrid, types::Point};

/// Canonical, hashable key derived from one observation.
///
/// Holds the agent position, the opponent positions in host order, and the
/// collectible grid flattened row-major together with its width. Key equality
/// is exactly structural equality of the underlying observation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateKey {
    position: Point,
    opponents: Vec<Point>,
    grid_width: usize,
    collectibles: Vec<bool>,
}

impl StateKey {
    /// Encode one observation into its canonical key.
    ///
    /// Pure and deterministic: the host must supply opponents in a stable
    /// order for keys to be consistent run-to-run.
    pub fn encode(position: Point, opponents: &[Point], grid: &BitGrid) -> Self {
        StateKey {
            position,
            opponents: opponents.to_vec(),
            grid_width: grid.width(),
            collectibles: grid.cells().to_vec(),
        }
    }
}
