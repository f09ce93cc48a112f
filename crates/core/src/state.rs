use serde::{Deserialize, Serialize};

use crate::dialect::ScriptDialect;

/// One numbered menu choice: a display label plus the command dispatched
/// when that number is picked.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub command: String,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            command: command.into(),
        }
    }
}

/// The full input to script generation.
///
/// Menu entry order is display and dispatch order; duplicates are allowed
/// and entries have no identity beyond their position. Mutated only through
/// [`crate::apply`].
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct BuilderState {
    pub dialect: ScriptDialect,
    pub banner_text: String,
    pub body_text: String,
    pub menu_entries: Vec<MenuEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_empty_posix() {
        let state = BuilderState::default();
        assert_eq!(state.dialect, ScriptDialect::Posix);
        assert!(state.banner_text.is_empty());
        assert!(state.body_text.is_empty());
        assert!(state.menu_entries.is_empty());
    }

    #[test]
    fn state_round_trips_through_json() {
        let state = BuilderState {
            dialect: ScriptDialect::PowerShell,
            banner_text: "art".to_string(),
            body_text: "Get-Date".to_string(),
            menu_entries: vec![MenuEntry::new("Ping", "ping google.com")],
        };

        let json = serde_json::to_string(&state).expect("serialize state");
        let restored: BuilderState = serde_json::from_str(&json).expect("deserialize state");
        assert_eq!(restored, state);
    }
}
