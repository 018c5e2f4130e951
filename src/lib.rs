//! Tetris piece supply (workspace facade crate).
//!
//! Re-exports the workspace crates as `tetris_supply::{core,input,term,types}`
//! and adds the application layer used by the binary: environment
//! configuration, the JSONL action journal, and the menu session.

pub use tetris_supply_core as core;
pub use tetris_supply_input as input;
pub use tetris_supply_term as term;
pub use tetris_supply_types as types;

pub mod config;
pub mod journal;
pub mod session;

pub use config::SupplyConfig;
pub use journal::{ActionJournal, JournalRecord};
pub use session::Session;
