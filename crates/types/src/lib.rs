//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (supply logic, terminal rendering, action journal).
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces held by the circular queue |
//! | `RESERVE_CAPACITY` | 3 | Reserved pieces held by the stack |
//! | `SWAP_BLOCK_LEN` | 3 | Pieces exchanged by a block swap |
//!
//! # Examples
//!
//! ```
//! use tetris_supply_types::{Piece, PieceKind, SupplyAction, SupplyError, QUEUE_CAPACITY};
//!
//! // Parse a piece kind (case-insensitive)
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! // Pieces render as `[K id]`
//! let piece = Piece::new(kind, 7);
//! assert_eq!(piece.to_string(), "[T 7]");
//!
//! // Parse a supply action
//! assert_eq!(SupplyAction::from_str("swapOne"), Some(SupplyAction::SwapOne));
//!
//! // Errors carry a stable code
//! assert_eq!(SupplyError::StackFull.code(), "stack_full");
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Number of upcoming pieces the queue holds when full.
pub const QUEUE_CAPACITY: usize = 5;

/// Number of pieces the reserve stack can hold.
pub const RESERVE_CAPACITY: usize = 3;

/// Number of pieces exchanged by [`SupplyAction::SwapThree`].
///
/// The reserve must be exactly full for a block swap, so this equals the
/// reserve capacity.
pub const SWAP_BLOCK_LEN: usize = RESERVE_CAPACITY;

/// The four piece kinds handed out by the supply
///
/// - **I**: horizontal bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Every kind, in declaration order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_supply_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to uppercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
        }
    }

    /// Single display character for this kind.
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

/// A piece handed out by the supply.
///
/// Pieces are plain values: once created they are only ever copied between
/// the queue and the reserve, never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Unique, monotonically assigned at creation. Never reused.
    pub id: u32,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.as_str(), self.id)
    }
}

/// Actions that can be applied to a piece supply
///
/// These are produced by the menu input layer and dispatched by
/// `PieceSupply::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyAction {
    /// Remove the queue front and replenish the queue
    Play,
    /// Move the queue front onto the reserve and replenish the queue
    Reserve,
    /// Pop the reserve top
    UseReserve,
    /// Exchange the queue front with the reserve top
    SwapOne,
    /// Exchange the first three queued pieces with the three reserved ones
    SwapThree,
    /// Enqueue one new piece if there is room
    Insert,
}

impl SupplyAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_supply_types::SupplyAction;
    ///
    /// assert_eq!(SupplyAction::from_str("play"), Some(SupplyAction::Play));
    /// assert_eq!(SupplyAction::from_str("useReserve"), Some(SupplyAction::UseReserve));
    /// assert_eq!(SupplyAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(SupplyAction::Play),
            "reserve" => Some(SupplyAction::Reserve),
            "usereserve" => Some(SupplyAction::UseReserve),
            "swapone" => Some(SupplyAction::SwapOne),
            "swapthree" => Some(SupplyAction::SwapThree),
            "insert" => Some(SupplyAction::Insert),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplyAction::Play => "play",
            SupplyAction::Reserve => "reserve",
            SupplyAction::UseReserve => "useReserve",
            SupplyAction::SwapOne => "swapOne",
            SupplyAction::SwapThree => "swapThree",
            SupplyAction::Insert => "insert",
        }
    }
}

/// Recoverable failures of supply operations.
///
/// None of these leave the queue or reserve in a partially mutated state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyError {
    EmptyQueue,
    EmptyStack,
    StackFull,
    QueueFull,
    /// Not enough pieces on one side for a swap.
    InvalidState,
}

impl SupplyError {
    pub fn code(self) -> &'static str {
        match self {
            SupplyError::EmptyQueue => "empty_queue",
            SupplyError::EmptyStack => "empty_stack",
            SupplyError::StackFull => "stack_full",
            SupplyError::QueueFull => "queue_full",
            SupplyError::InvalidState => "invalid_state",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SupplyError::EmptyQueue => "queue is empty",
            SupplyError::EmptyStack => "reserve is empty",
            SupplyError::StackFull => "reserve is full, cannot reserve",
            SupplyError::QueueFull => "queue is full, cannot insert",
            SupplyError::InvalidState => "not enough pieces to swap",
        }
    }
}

impl fmt::Display for SupplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for SupplyError {}
