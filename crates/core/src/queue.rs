//! Queue module - fixed-capacity circular queue of upcoming pieces
//!
//! Backed by a plain array with `front`, `back` and `len`. Indices always
//! move modulo [`QUEUE_CAPACITY`]; the array is never resized.

use crate::types::{Piece, PieceKind, SupplyError, QUEUE_CAPACITY};

/// Filler for slots outside the live range. Never observable.
const VACANT: Piece = Piece::new(PieceKind::I, 0);

/// Bounded FIFO of pieces over a ring buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceRing {
    slots: [Piece; QUEUE_CAPACITY],
    /// Slot of the oldest piece.
    front: usize,
    /// Slot of the newest piece.
    back: usize,
    len: usize,
}

impl PieceRing {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            slots: [VACANT; QUEUE_CAPACITY],
            front: 0,
            back: QUEUE_CAPACITY - 1,
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        QUEUE_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    /// Append a piece at the back.
    pub fn push_back(&mut self, piece: Piece) -> Result<(), SupplyError> {
        if self.is_full() {
            return Err(SupplyError::QueueFull);
        }
        self.back = (self.back + 1) % QUEUE_CAPACITY;
        self.slots[self.back] = piece;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front piece.
    pub fn pop_front(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        let piece = self.slots[self.front];
        self.front = (self.front + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        if self.len == 0 {
            self.reset_indices();
        }
        Some(piece)
    }

    /// Peek at the front piece without removing it
    pub fn front(&self) -> Option<Piece> {
        self.get(0)
    }

    pub fn front_mut(&mut self) -> Option<&mut Piece> {
        self.get_mut(0)
    }

    /// Piece at logical position `i` (0 = front).
    pub fn get(&self, i: usize) -> Option<Piece> {
        (i < self.len).then(|| self.slots[self.slot_index(i)])
    }

    pub fn get_mut(&mut self, i: usize) -> Option<&mut Piece> {
        if i >= self.len {
            return None;
        }
        let idx = self.slot_index(i);
        Some(&mut self.slots[idx])
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.len).map(move |i| self.slots[self.slot_index(i)])
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.reset_indices();
    }

    /// Physical slot of the current front (for diagnostics).
    pub fn front_slot(&self) -> usize {
        self.front
    }

    #[inline(always)]
    fn slot_index(&self, i: usize) -> usize {
        (self.front + i) % QUEUE_CAPACITY
    }

    fn reset_indices(&mut self) {
        self.front = 0;
        self.back = QUEUE_CAPACITY - 1;
    }
}

impl Default for PieceRing {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(id: u32) -> Piece {
        Piece::new(PieceKind::T, id)
    }

    #[test]
    fn test_new_queue_is_empty() {
        let q = PieceRing::new();
        assert!(q.is_empty());
        assert!(!q.is_full());
        assert_eq!(q.len(), 0);
        assert_eq!(q.capacity(), QUEUE_CAPACITY);
        assert_eq!(q.front(), None);
    }

    #[test]
    fn test_push_until_full() {
        let mut q = PieceRing::new();
        for id in 0..QUEUE_CAPACITY as u32 {
            q.push_back(piece(id)).unwrap();
        }
        assert!(q.is_full());
        assert_eq!(q.push_back(piece(99)), Err(SupplyError::QueueFull));
        assert_eq!(q.len(), QUEUE_CAPACITY);
    }

    #[test]
    fn test_fifo_order() {
        let mut q = PieceRing::new();
        for id in 0..3 {
            q.push_back(piece(id)).unwrap();
        }
        assert_eq!(q.pop_front().map(|p| p.id), Some(0));
        assert_eq!(q.pop_front().map(|p| p.id), Some(1));
        assert_eq!(q.pop_front().map(|p| p.id), Some(2));
        assert_eq!(q.pop_front(), None);
    }

    #[test]
    fn test_wraparound_keeps_order() {
        let mut q = PieceRing::new();
        for id in 0..5 {
            q.push_back(piece(id)).unwrap();
        }
        // Rotate through the buffer several times.
        for id in 5..17 {
            q.pop_front().unwrap();
            q.push_back(piece(id)).unwrap();
        }
        let ids: Vec<u32> = q.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![12, 13, 14, 15, 16]);
        assert_eq!(q.front_slot(), 12 % QUEUE_CAPACITY);
    }

    #[test]
    fn test_draining_resets_indices() {
        let mut q = PieceRing::new();
        q.push_back(piece(0)).unwrap();
        q.push_back(piece(1)).unwrap();
        q.pop_front();
        q.pop_front();
        assert!(q.is_empty());
        assert_eq!(q.front_slot(), 0);

        q.push_back(piece(2)).unwrap();
        assert_eq!(q.front().map(|p| p.id), Some(2));
    }

    #[test]
    fn test_get_out_of_range() {
        let mut q = PieceRing::new();
        q.push_back(piece(0)).unwrap();
        assert!(q.get(0).is_some());
        assert!(q.get(1).is_none());
        assert!(q.get_mut(1).is_none());
    }

    #[test]
    fn test_get_mut_edits_logical_slot() {
        let mut q = PieceRing::new();
        for id in 0..5 {
            q.push_back(piece(id)).unwrap();
        }
        q.pop_front();
        q.push_back(piece(5)).unwrap();

        *q.get_mut(4).unwrap() = Piece::new(PieceKind::O, 50);
        assert_eq!(q.get(4), Some(Piece::new(PieceKind::O, 50)));
    }

    #[test]
    fn test_clear() {
        let mut q = PieceRing::new();
        q.push_back(piece(0)).unwrap();
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.iter().count(), 0);
    }
}
