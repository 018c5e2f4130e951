//! Supply module - the queue of upcoming pieces plus the reserve
//!
//! [`PieceSupply`] owns one [`PieceRing`], one [`ReserveStack`] and the
//! [`PieceFactory`] that stamps new pieces. Every operation either succeeds
//! completely or returns a [`SupplyError`] without touching either
//! collection.

use std::fmt;
use std::mem;

use crate::queue::PieceRing;
use crate::reserve::ReserveStack;
use crate::rng::{PieceFactory, RandomPieceFactory};
use crate::snapshot::SupplySnapshot;
use crate::types::{Piece, SupplyAction, SupplyError, RESERVE_CAPACITY, SWAP_BLOCK_LEN};

/// Result of a successfully applied [`SupplyAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Played(Piece),
    Reserved(Piece),
    Used(Piece),
    Swapped,
    SwappedBlock,
    Inserted(Piece),
}

impl ActionOutcome {
    /// The piece the action moved out of (or into) the supply, if any.
    pub fn piece(&self) -> Option<Piece> {
        match *self {
            ActionOutcome::Played(p)
            | ActionOutcome::Reserved(p)
            | ActionOutcome::Used(p)
            | ActionOutcome::Inserted(p) => Some(p),
            ActionOutcome::Swapped | ActionOutcome::SwappedBlock => None,
        }
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::Played(p) => write!(f, "Played {}", p),
            ActionOutcome::Reserved(p) => write!(f, "Reserved {}", p),
            ActionOutcome::Used(p) => write!(f, "Used {}", p),
            ActionOutcome::Swapped => f.write_str("Swapped queue front with reserve top"),
            ActionOutcome::SwappedBlock => {
                f.write_str("Swapped first 3 queued with the 3 reserved")
            }
            ActionOutcome::Inserted(p) => write!(f, "Inserted {}", p),
        }
    }
}

/// Upcoming-piece queue and reserve stack.
#[derive(Debug, Clone)]
pub struct PieceSupply<F = RandomPieceFactory> {
    queue: PieceRing,
    reserve: ReserveStack,
    factory: F,
}

impl PieceSupply<RandomPieceFactory> {
    /// Create a supply with random pieces and fill the queue.
    pub fn new(seed: u32) -> Self {
        Self::with_factory(RandomPieceFactory::new(seed))
    }
}

impl<F: PieceFactory> PieceSupply<F> {
    /// Create a supply from `factory` and fill the queue.
    pub fn with_factory(factory: F) -> Self {
        let mut supply = Self::empty(factory);
        supply.refill_to_capacity();
        supply
    }

    /// Create a supply with an empty queue and reserve.
    pub fn empty(factory: F) -> Self {
        Self {
            queue: PieceRing::new(),
            reserve: ReserveStack::new(),
            factory,
        }
    }

    pub fn queue(&self) -> &PieceRing {
        &self.queue
    }

    pub fn reserve_stack(&self) -> &ReserveStack {
        &self.reserve
    }

    /// Id the next created piece will receive.
    pub fn next_id(&self) -> u32 {
        self.factory.next_id()
    }

    /// Append new pieces until the queue is full. Returns how many were added.
    pub fn refill_to_capacity(&mut self) -> usize {
        let mut added = 0;
        while self.replenish() {
            added += 1;
        }
        added
    }

    /// Take the front piece and replenish the queue.
    pub fn play(&mut self) -> Result<Piece, SupplyError> {
        let piece = self.queue.pop_front().ok_or(SupplyError::EmptyQueue)?;
        self.replenish();
        Ok(piece)
    }

    /// Move the front piece onto the reserve and replenish the queue.
    ///
    /// A full reserve is reported before an empty queue.
    pub fn reserve(&mut self) -> Result<Piece, SupplyError> {
        if self.reserve.is_full() {
            return Err(SupplyError::StackFull);
        }
        let piece = self.queue.pop_front().ok_or(SupplyError::EmptyQueue)?;
        self.reserve.push(piece)?;
        self.replenish();
        Ok(piece)
    }

    /// Pop the reserve top. Does not touch the queue.
    pub fn use_reserve(&mut self) -> Result<Piece, SupplyError> {
        self.reserve.pop().ok_or(SupplyError::EmptyStack)
    }

    /// Exchange the queue front with the reserve top in place.
    pub fn swap_one(&mut self) -> Result<(), SupplyError> {
        let (Some(front), Some(top)) = (self.queue.front_mut(), self.reserve.top_mut()) else {
            return Err(SupplyError::InvalidState);
        };
        mem::swap(front, top);
        Ok(())
    }

    /// Exchange queue positions 0..3 with reserve positions top..top-2.
    ///
    /// Needs at least three queued pieces and an exactly full reserve.
    pub fn swap_three(&mut self) -> Result<(), SupplyError> {
        if self.queue.len() < SWAP_BLOCK_LEN || self.reserve.len() != RESERVE_CAPACITY {
            return Err(SupplyError::InvalidState);
        }
        for i in 0..SWAP_BLOCK_LEN {
            if let (Some(queued), Some(held)) =
                (self.queue.get_mut(i), self.reserve.from_top_mut(i))
            {
                mem::swap(queued, held);
            }
        }
        Ok(())
    }

    /// Enqueue one new piece. No id is consumed when the queue is full.
    pub fn insert(&mut self) -> Result<Piece, SupplyError> {
        if self.queue.is_full() {
            return Err(SupplyError::QueueFull);
        }
        let piece = self.factory.create();
        self.queue.push_back(piece)?;
        Ok(piece)
    }

    /// Apply a menu action
    pub fn apply_action(&mut self, action: SupplyAction) -> Result<ActionOutcome, SupplyError> {
        match action {
            SupplyAction::Play => self.play().map(ActionOutcome::Played),
            SupplyAction::Reserve => self.reserve().map(ActionOutcome::Reserved),
            SupplyAction::UseReserve => self.use_reserve().map(ActionOutcome::Used),
            SupplyAction::SwapOne => self.swap_one().map(|()| ActionOutcome::Swapped),
            SupplyAction::SwapThree => self.swap_three().map(|()| ActionOutcome::SwappedBlock),
            SupplyAction::Insert => self.insert().map(ActionOutcome::Inserted),
        }
    }

    pub fn snapshot(&self) -> SupplySnapshot {
        let mut out = SupplySnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    /// Fill `out` without allocating.
    pub fn snapshot_into(&self, out: &mut SupplySnapshot) {
        out.clear();
        out.queue.extend(self.queue.iter());
        out.reserve.extend(self.reserve.iter());
        out.next_id = self.factory.next_id();
    }

    /// Add one new piece if there is room.
    fn replenish(&mut self) -> bool {
        if self.queue.is_full() {
            return false;
        }
        let piece = self.factory.create();
        self.queue.push_back(piece).is_ok()
    }
}

impl Default for PieceSupply<RandomPieceFactory> {
    fn default() -> Self {
        Self::new(1)
    }
}
