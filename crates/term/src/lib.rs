//! Terminal rendering module for the supply menu.
//!
//! Renders into a simple framebuffer that is flushed to a terminal backend,
//! instead of printing line by line.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Redraw only the cells that changed between frames

pub mod fb;
pub mod renderer;
pub mod supply_view;

pub use tetris_supply_core as core;
pub use tetris_supply_input as input;
pub use tetris_supply_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use supply_view::{StatusView, SupplyView, Viewport, PANEL_H, PANEL_W};
