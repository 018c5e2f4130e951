//! RNG module - piece factories
//!
//! New pieces get a uniformly random kind out of [`PieceKind::ALL`] and the
//! next id from a monotonic counter. Ids are never reused, even after the
//! piece they were stamped on has been played.
//!
//! Also provides a simple LCG for deterministic testing, and a cycling
//! factory for tests and benchmarks that need a known kind sequence.

use crate::types::{Piece, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG have short periods; use the high half.
        (self.next_u32() >> 16) % max
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Source of new pieces for a supply.
pub trait PieceFactory {
    /// Create a piece with the next unused id.
    ///
    /// The id counter saturates at `u32::MAX`: once reached, every further
    /// piece carries that id.
    fn create(&mut self) -> Piece;

    /// The id the next call to [`create`](PieceFactory::create) will assign.
    fn next_id(&self) -> u32;
}

/// Uniformly random kinds, ids counting up from 0.
#[derive(Debug, Clone)]
pub struct RandomPieceFactory {
    rng: SimpleRng,
    next_id: u32,
}

impl RandomPieceFactory {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 0,
        }
    }
}

impl Default for RandomPieceFactory {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceFactory for RandomPieceFactory {
    fn create(&mut self) -> Piece {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        let piece = Piece::new(PieceKind::ALL[idx], self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        piece
    }

    fn next_id(&self) -> u32 {
        self.next_id
    }
}

/// Hands out kinds in a fixed repeating order.
#[derive(Debug, Clone)]
pub struct CyclePieceFactory {
    kinds: Vec<PieceKind>,
    cursor: usize,
    next_id: u32,
}

impl CyclePieceFactory {
    /// An empty `kinds` slice falls back to [`PieceKind::ALL`].
    pub fn new(kinds: &[PieceKind]) -> Self {
        let kinds = if kinds.is_empty() {
            PieceKind::ALL.to_vec()
        } else {
            kinds.to_vec()
        };
        Self {
            kinds,
            cursor: 0,
            next_id: 0,
        }
    }
}

impl Default for CyclePieceFactory {
    fn default() -> Self {
        Self::new(&PieceKind::ALL)
    }
}

impl PieceFactory for CyclePieceFactory {
    fn create(&mut self) -> Piece {
        let piece = Piece::new(self.kinds[self.cursor], self.next_id);
        self.cursor = (self.cursor + 1) % self.kinds.len();
        self.next_id = self.next_id.saturating_add(1);
        piece
    }

    fn next_id(&self) -> u32 {
        self.next_id
    }
}
