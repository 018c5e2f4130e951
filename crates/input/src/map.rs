//! Key mapping from terminal events to menu actions.

use crate::types::SupplyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One selectable menu line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: char,
    pub action: SupplyAction,
    pub label: &'static str,
}

/// Menu in display order. `0` / `q` quit and are not listed here.
pub const MENU: [MenuEntry; 6] = [
    MenuEntry {
        key: '1',
        action: SupplyAction::Play,
        label: "Play the front piece",
    },
    MenuEntry {
        key: '2',
        action: SupplyAction::Reserve,
        label: "Reserve the front piece",
    },
    MenuEntry {
        key: '3',
        action: SupplyAction::UseReserve,
        label: "Use the reserved piece",
    },
    MenuEntry {
        key: '4',
        action: SupplyAction::SwapOne,
        label: "Swap queue front with reserve top",
    },
    MenuEntry {
        key: '5',
        action: SupplyAction::SwapThree,
        label: "Swap first 3 queued with the 3 reserved",
    },
    MenuEntry {
        key: '6',
        action: SupplyAction::Insert,
        label: "Insert a new piece",
    },
];

/// Look up a menu digit.
pub fn action_for_char(c: char) -> Option<SupplyAction> {
    MENU.iter().find(|e| e.key == c).map(|e| e.action)
}

/// Map keyboard input to supply actions.
pub fn handle_key_event(key: KeyEvent) -> Option<SupplyAction> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => action_for_char(c),
        _ => None,
    }
}

/// Check if key should quit the menu.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('0') | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
