//! Core supply logic module - pure, deterministic, and testable
//!
//! This module contains the piece supply: a bounded circular queue of upcoming
//! pieces, a bounded stack of reserved pieces, and the operations that move
//! pieces between them. It has **zero dependencies** on terminal, input, or
//! file I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Every operation is a plain method returning `Result`
//! - **Allocation-free**: Both collections are fixed arrays
//!
//! # Module Structure
//!
//! - [`queue`]: Ring buffer of upcoming pieces (capacity 5)
//! - [`reserve`]: Stack of reserved pieces (capacity 3)
//! - [`rng`]: LCG and piece factories (random kinds, monotonic ids)
//! - [`supply`]: `PieceSupply`, the operations on queue + reserve
//! - [`snapshot`]: Read-only copies for rendering
//!
//! # Rules
//!
//! - **Play**: Take the queue front, then enqueue one new piece
//! - **Reserve**: Move the queue front onto the reserve, then enqueue one new piece
//! - **Use reserve**: Pop the reserve top; the queue is not refilled
//! - **Swap one**: Exchange the queue front with the reserve top
//! - **Swap three**: Exchange the first three queued pieces with the three reserved ones
//! - **Insert**: Enqueue one new piece if there is room
//!
//! Failures never leave either collection partially modified.
//!
//! # Example
//!
//! ```
//! use tetris_supply_core::PieceSupply;
//! use tetris_supply_types::{SupplyAction, SupplyError};
//!
//! // Create a supply; the queue starts full
//! let mut supply = PieceSupply::new(12345);
//! assert_eq!(supply.queue().len(), 5);
//!
//! // Reserve the front piece, queue stays full
//! let reserved = supply.reserve().unwrap();
//! assert_eq!(supply.reserve_stack().peek(), Some(reserved));
//! assert_eq!(supply.queue().len(), 5);
//!
//! // Swap it back in front
//! supply.apply_action(SupplyAction::SwapOne).unwrap();
//! assert_eq!(supply.queue().front(), Some(reserved));
//!
//! // Block swap needs a full reserve
//! assert_eq!(supply.swap_three(), Err(SupplyError::InvalidState));
//! ```

pub mod queue;
pub mod reserve;
pub mod rng;
pub mod snapshot;
pub mod supply;

pub use tetris_supply_types as types;

// Re-export commonly used types for convenience
pub use queue::PieceRing;
pub use reserve::ReserveStack;
pub use rng::{CyclePieceFactory, PieceFactory, RandomPieceFactory, SimpleRng};
pub use snapshot::SupplySnapshot;
pub use supply::{ActionOutcome, PieceSupply};
