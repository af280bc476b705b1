//! Drag selection over the grid.

use super::grid::{Direction, Position};

/// Ordered cells the pointer has crossed since the drag began.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    positions: Vec<Position>,
    active: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, pos: Position) {
        self.positions.clear();
        self.positions.push(pos);
        self.active = true;
    }

    /// Append `pos` while dragging. Re-entering the last cell is a no-op.
    pub fn extend(&mut self, pos: Position) -> bool {
        if !self.active || self.positions.last() == Some(&pos) {
            return false;
        }
        self.positions.push(pos);
        true
    }

    /// Stop dragging and hand back the cells, leaving the selection empty.
    pub fn take(&mut self) -> Vec<Position> {
        self.active = false;
        std::mem::take(&mut self.positions)
    }

    pub fn clear(&mut self) {
        self.active = false;
        self.positions.clear();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Direction of a contiguous straight run, either way round.
///
/// Needs at least two cells, and every consecutive step must be the same unit
/// move along one of the placement directions (or its reverse).
pub fn line_direction(positions: &[Position]) -> Option<Direction> {
    let step = |a: Position, b: Position| {
        (
            b.row as isize - a.row as isize,
            b.col as isize - a.col as isize,
        )
    };
    let (first, rest) = positions.split_first()?;
    let second = *rest.first()?;
    let delta = step(*first, second);
    let direction = Direction::from_step(delta)?;
    positions
        .windows(2)
        .all(|w| step(w[0], w[1]) == delta)
        .then_some(direction)
}
