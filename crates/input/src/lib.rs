//! Terminal input module (menu-facing).
//!
//! This module maps `crossterm` key events onto [`crate::types::SupplyAction`]
//! menu choices and detects quit keys. It holds no state; the menu loop in the
//! binary owns everything else.

pub mod map;

pub use tetris_supply_types as types;

pub use map::{action_for_char, handle_key_event, should_quit, MenuEntry, MENU};
