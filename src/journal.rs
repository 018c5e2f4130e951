//! Action journal - one JSON line per dispatched menu action.
//!
//! ```text
//! {"seq":1,"action":"play","ok":true,"piece":{"kind":"T","id":0},"error":null,"queue_len":5,"reserve_len":0}
//! {"seq":2,"action":"useReserve","ok":false,"piece":null,"error":"empty_stack","queue_len":5,"reserve_len":0}
//! ```

use std::fs::{File, OpenOptions};
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{ActionOutcome, SupplySnapshot};
use crate::types::{Piece, SupplyAction, SupplyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceRecord {
    pub kind: &'static str,
    pub id: u32,
}

impl From<Piece> for PieceRecord {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind.as_str(),
            id: value.id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JournalRecord {
    pub seq: u64,
    pub action: &'static str,
    pub ok: bool,
    pub piece: Option<PieceRecord>,
    pub error: Option<&'static str>,
    pub queue_len: usize,
    pub reserve_len: usize,
}

impl JournalRecord {
    pub fn new(
        seq: u64,
        action: SupplyAction,
        result: &Result<ActionOutcome, SupplyError>,
        after: &SupplySnapshot,
    ) -> Self {
        let (ok, piece, error) = match result {
            Ok(outcome) => (true, outcome.piece().map(PieceRecord::from), None),
            Err(e) => (false, None, Some(e.code())),
        };
        Self {
            seq,
            action: action.as_str(),
            ok,
            piece,
            error,
            queue_len: after.queue.len(),
            reserve_len: after.reserve.len(),
        }
    }
}

/// Appends [`JournalRecord`]s to a writer. A disabled journal drops them.
pub struct ActionJournal<W: Write = File> {
    out: Option<W>,
    seq: u64,
    buf: Vec<u8>,
}

impl ActionJournal<File> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open journal {}", path))?;
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> ActionJournal<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out: Some(out),
            seq: 0,
            buf: Vec::with_capacity(256),
        }
    }

    pub fn disabled() -> Self {
        Self {
            out: None,
            seq: 0,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Stop writing. Used after a write failure.
    pub fn disable(&mut self) {
        self.out = None;
    }

    /// Number of records written so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn record(
        &mut self,
        action: SupplyAction,
        result: &Result<ActionOutcome, SupplyError>,
        after: &SupplySnapshot,
    ) -> Result<()> {
        let Some(out) = self.out.as_mut() else {
            return Ok(());
        };

        self.seq += 1;
        let record = JournalRecord::new(self.seq, action, result, after);

        self.buf.clear();
        serde_json::to_writer(&mut self.buf, &record).context("failed to encode journal record")?;
        self.buf.push(b'\n');
        out.write_all(&self.buf).context("failed to write journal")?;
        out.flush().context("failed to flush journal")?;
        Ok(())
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}
