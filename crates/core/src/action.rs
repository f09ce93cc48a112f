use crate::dialect::ScriptDialect;
use crate::state::{BuilderState, MenuEntry};

/// A discrete user edit to the builder state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SetDialect(ScriptDialect),
    SetBannerText(String),
    SetBodyText(String),
    /// Appends a snippet command to the script body on a fresh line.
    InsertSnippet { command: String },
    /// Ignored when either field is empty.
    AddMenuEntry { label: String, command: String },
    /// Ignored when the index is out of range.
    RemoveMenuEntry(usize),
}

/// Applies one action to the state.
///
/// Total over all inputs: degenerate edits (empty menu fields, out-of-range
/// removals, an empty snippet selection) are silently ignored rather than
/// reported.
pub fn apply(state: &mut BuilderState, action: Action) {
    match action {
        Action::SetDialect(dialect) => state.dialect = dialect,
        Action::SetBannerText(text) => state.banner_text = text,
        Action::SetBodyText(text) => state.body_text = text,
        Action::InsertSnippet { command } => {
            if command.is_empty() {
                return;
            }
            state.body_text.push('\n');
            state.body_text.push_str(&command);
        }
        Action::AddMenuEntry { label, command } => {
            if label.is_empty() || command.is_empty() {
                return;
            }
            state.menu_entries.push(MenuEntry { label, command });
        }
        Action::RemoveMenuEntry(index) => {
            if index < state.menu_entries.len() {
                state.menu_entries.remove(index);
            }
        }
    }
}
