//! Script text generation.
//!
//! Maps a [`BuilderState`] to the rendered script: a fixed preview header,
//! an optional banner-echo block, an optional menu-and-dispatch block, then
//! the raw body text, in that order.

use crate::dialect::ScriptDialect;
use crate::state::BuilderState;

/// Renders the script text for the given state.
///
/// Deterministic and total: identical input yields byte-identical output,
/// and empty or whitespace-only fields suppress their block instead of
/// failing. Only banner lines are escaped; menu labels, commands and the
/// body are emitted verbatim.
pub fn generate(state: &BuilderState) -> String {
    let mut out = String::from("# Script Preview\n\n");
    push_banner_block(&mut out, state);
    push_menu_block(&mut out, state);
    out.push_str(&state.body_text);
    out
}

/// One print statement per banner line, terminated by a blank line.
///
/// The banner is trimmed as a whole before splitting, so leading and
/// trailing blank lines vanish while interior indentation survives.
fn push_banner_block(out: &mut String, state: &BuilderState) {
    let banner = state.banner_text.trim();
    if banner.is_empty() {
        return;
    }
    for line in banner.split('\n') {
        let escaped = state.dialect.escape_banner_line(line);
        match state.dialect {
            ScriptDialect::Posix => {
                out.push_str("echo \"");
                out.push_str(&escaped);
                out.push_str("\"\n");
            }
            ScriptDialect::PowerShell => {
                out.push_str("Write-Host \"");
                out.push_str(&escaped);
                out.push_str("\"\n");
            }
        }
    }
    out.push('\n');
}

/// Prompt, numbered choice list, read statement and dispatch construct.
///
/// Entries are numbered 1..N in insertion order; the dispatch construct has
/// exactly one branch per entry plus a catch-all printing "Invalid option".
fn push_menu_block(out: &mut String, state: &BuilderState) {
    if state.menu_entries.is_empty() {
        return;
    }
    match state.dialect {
        ScriptDialect::Posix => {
            out.push_str("echo \"Select an option:\"\n");
            for (idx, entry) in state.menu_entries.iter().enumerate() {
                out.push_str(&format!("echo \"{}) {}\"\n", idx + 1, entry.label));
            }
            out.push_str("read -p \"Choice: \" choice\n");
            out.push_str("case $choice in\n");
            for (idx, entry) in state.menu_entries.iter().enumerate() {
                out.push_str(&format!("  {}) {} ;;\n", idx + 1, entry.command));
            }
            out.push_str("  *) echo \"Invalid option\" ;;\n");
            out.push_str("esac\n");
        }
        ScriptDialect::PowerShell => {
            out.push_str("Write-Host \"Select an option:\"\n");
            for (idx, entry) in state.menu_entries.iter().enumerate() {
                out.push_str(&format!("Write-Host \"{}) {}\"\n", idx + 1, entry.label));
            }
            out.push_str("$choice = Read-Host \"Choice\"\n");
            out.push_str("switch ($choice) {\n");
            for (idx, entry) in state.menu_entries.iter().enumerate() {
                out.push_str(&format!("  \"{}\" {{ {} }}\n", idx + 1, entry.command));
            }
            out.push_str("  default { Write-Host \"Invalid option\" }\n");
            out.push_str("}\n");
        }
    }
}

#[cfg(test)]
#[path = "tests/generate_tests.rs"]
mod tests;
