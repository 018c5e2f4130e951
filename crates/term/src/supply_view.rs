//! SupplyView: maps a `SupplySnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SupplySnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::input::MENU;
use crate::types::{Piece, PieceKind};

/// Panel width in columns, border included.
pub const PANEL_W: u16 = 52;

/// Panel height in rows, border included.
pub const PANEL_H: u16 = 7;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Result line of the last menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView<'a> {
    pub text: &'a str,
    pub error: bool,
}

/// Renders the queue, the reserve, the last status line and the menu.
#[derive(Debug, Default)]
pub struct SupplyView;

impl SupplyView {
    pub fn new() -> Self {
        Self
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(
        &self,
        snap: &SupplySnapshot,
        status: Option<&StatusView<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let start_x = viewport.width.saturating_sub(PANEL_W) / 2;
        let start_y = 0;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let dim = CellStyle {
            dim: true,
            ..CellStyle::default()
        };

        self.draw_border(fb, start_x, start_y, PANEL_W, PANEL_H, border);
        fb.put_str(start_x + 2, start_y, " PIECE SUPPLY ", label);

        let inner_x = start_x + 2;
        fb.put_str(inner_x, start_y + 1, "Queue (front -> back):", label);
        self.draw_pieces(fb, inner_x, start_y + 2, snap.queue.iter().copied());

        fb.put_str(inner_x, start_y + 3, "Reserve (top -> base):", label);
        self.draw_pieces(fb, inner_x, start_y + 4, snap.reserve.iter().copied());

        let x = fb.put_str(inner_x, start_y + 5, "Next id: ", dim);
        fb.put_u32(x, start_y + 5, snap.next_id, dim);

        let mut y = start_y + PANEL_H + 1;
        if let Some(st) = status {
            let style = CellStyle {
                fg: if st.error {
                    Rgb::new(230, 90, 90)
                } else {
                    Rgb::new(120, 220, 120)
                },
                bold: true,
                ..CellStyle::default()
            };
            let x = fb.put_str(start_x, y, "> ", style);
            fb.put_str(x, y, st.text, style);
        }
        y = y.saturating_add(2);

        for entry in MENU.iter() {
            fb.put_char(start_x + 1, y, entry.key, label);
            fb.put_str(start_x + 4, y, entry.label, CellStyle::default());
            y = y.saturating_add(1);
        }
        fb.put_char(start_x + 1, y, '0', label);
        fb.put_str(start_x + 4, y, "Quit", CellStyle::default());
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &SupplySnapshot,
        status: Option<&StatusView<'_>>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Draw `[K id]` cells separated by one space; `-` when there are none.
    fn draw_pieces(&self, fb: &mut FrameBuffer, x: u16, y: u16, pieces: impl Iterator<Item = Piece>) {
        let bracket = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        let mut cx = x;
        for piece in pieces {
            let kind_style = CellStyle {
                fg: kind_color(piece.kind),
                bold: true,
                ..CellStyle::default()
            };
            fb.put_char(cx, y, '[', bracket);
            fb.put_char(cx + 1, y, piece.kind.as_char(), kind_style);
            cx = fb.put_u32(cx + 3, y, piece.id, CellStyle::default());
            fb.put_char(cx, y, ']', bracket);
            cx = cx.saturating_add(2);
        }
        if cx == x {
            fb.put_char(x, y, '-', bracket);
        }
    }
}

fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}
