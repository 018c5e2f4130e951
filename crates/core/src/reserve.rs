//! Reserve module - fixed-capacity stack of held pieces

use crate::types::{Piece, PieceKind, SupplyError, RESERVE_CAPACITY};

const VACANT: Piece = Piece::new(PieceKind::I, 0);

/// Bounded LIFO of reserved pieces.
///
/// `len` plays the role of a classic `top + 1`; [`top`](ReserveStack::top)
/// returns `None` where a `top` index would be -1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveStack {
    slots: [Piece; RESERVE_CAPACITY],
    len: usize,
}

impl ReserveStack {
    pub fn new() -> Self {
        Self {
            slots: [VACANT; RESERVE_CAPACITY],
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        RESERVE_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == RESERVE_CAPACITY
    }

    /// Index of the top slot, `None` when empty.
    pub fn top(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    pub fn push(&mut self, piece: Piece) -> Result<(), SupplyError> {
        if self.is_full() {
            return Err(SupplyError::StackFull);
        }
        self.slots[self.len] = piece;
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Piece> {
        let top = self.top()?;
        self.len = top;
        Some(self.slots[top])
    }

    pub fn peek(&self) -> Option<Piece> {
        self.from_top(0)
    }

    pub fn top_mut(&mut self) -> Option<&mut Piece> {
        self.from_top_mut(0)
    }

    /// Piece `depth` slots below the top (0 = top).
    pub fn from_top(&self, depth: usize) -> Option<Piece> {
        let top = self.top()?;
        top.checked_sub(depth).map(|i| self.slots[i])
    }

    pub fn from_top_mut(&mut self, depth: usize) -> Option<&mut Piece> {
        let idx = self.top()?.checked_sub(depth)?;
        Some(&mut self.slots[idx])
    }

    /// Iterate top to base.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        self.slots[..self.len].iter().rev().copied()
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for ReserveStack {
    fn default() -> Self {
        Self::new()
    }
}
