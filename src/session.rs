//! Menu session: one supply, the last status line, and the journal.
//!
//! This is the glue the menu loop talks to. It owns no terminal state and can
//! be driven directly from tests.

use std::fs::File;
use std::io::Write;

use crate::core::{ActionOutcome, PieceFactory, PieceSupply, RandomPieceFactory, SupplySnapshot};
use crate::journal::ActionJournal;
use crate::term::StatusView;
use crate::types::{SupplyAction, SupplyError};

pub struct Session<F = RandomPieceFactory, W: Write = File> {
    supply: PieceSupply<F>,
    journal: ActionJournal<W>,
    status: String,
    status_error: bool,
    journal_error: Option<anyhow::Error>,
    scratch: SupplySnapshot,
}

impl<F: PieceFactory, W: Write> Session<F, W> {
    pub fn new(supply: PieceSupply<F>, journal: ActionJournal<W>) -> Self {
        Self {
            supply,
            journal,
            status: String::new(),
            status_error: false,
            journal_error: None,
            scratch: SupplySnapshot::default(),
        }
    }

    pub fn supply(&self) -> &PieceSupply<F> {
        &self.supply
    }

    pub fn journal(&self) -> &ActionJournal<W> {
        &self.journal
    }

    /// Apply a menu action, update the status line and journal it.
    ///
    /// A journal write failure disables the journal; it is kept for
    /// [`take_journal_error`](Session::take_journal_error).
    pub fn apply(&mut self, action: SupplyAction) -> Result<ActionOutcome, SupplyError> {
        let result = self.supply.apply_action(action);

        self.status.clear();
        match &result {
            Ok(outcome) => {
                self.status.push_str(&outcome.to_string());
                self.status_error = false;
            }
            Err(e) => {
                self.status.push_str(e.message());
                self.status_error = true;
            }
        }

        self.supply.snapshot_into(&mut self.scratch);
        if let Err(e) = self.journal.record(action, &result, &self.scratch) {
            self.journal.disable();
            self.journal_error.get_or_insert(e);
        }

        result
    }

    /// Report a key that is not on the menu.
    pub fn reject_key(&mut self) {
        self.status.clear();
        self.status.push_str("Invalid option");
        self.status_error = true;
    }

    /// Status line of the last action, if any.
    pub fn status(&self) -> Option<StatusView<'_>> {
        (!self.status.is_empty()).then(|| StatusView {
            text: &self.status,
            error: self.status_error,
        })
    }

    pub fn snapshot_into(&self, out: &mut SupplySnapshot) {
        self.supply.snapshot_into(out);
    }

    pub fn take_journal_error(&mut self) -> Option<anyhow::Error> {
        self.journal_error.take()
    }
}
