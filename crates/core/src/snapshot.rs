use arrayvec::ArrayVec;

use crate::types::{Piece, QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Read-only copy of a supply, for rendering and journaling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SupplySnapshot {
    /// Front to back.
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Top to base.
    pub reserve: ArrayVec<Piece, RESERVE_CAPACITY>,
    pub next_id: u32,
}

impl SupplySnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.reserve.clear();
        self.next_id = 0;
    }

    pub fn queue_front(&self) -> Option<Piece> {
        self.queue.first().copied()
    }

    pub fn reserve_top(&self) -> Option<Piece> {
        self.reserve.first().copied()
    }
}
