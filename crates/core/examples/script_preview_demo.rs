//! Example: building a script from actions and rendering the preview.

use script_builder_core::{apply, generate, Action, BuilderState, ScriptDialect};

fn main() {
    let mut state = BuilderState::default();

    apply(
        &mut state,
        Action::SetBannerText("  ___  \n / _ \\ \n| (_) |\n \\___/ ".to_string()),
    );
    apply(
        &mut state,
        Action::AddMenuEntry {
            label: "Show date".to_string(),
            command: "date".to_string(),
        },
    );
    apply(
        &mut state,
        Action::AddMenuEntry {
            label: "List files".to_string(),
            command: "ls -la".to_string(),
        },
    );
    apply(
        &mut state,
        Action::SetBodyText("echo \"goodbye\"".to_string()),
    );

    println!("=== POSIX shell ===");
    println!("{}", generate(&state));

    apply(&mut state, Action::SetDialect(ScriptDialect::PowerShell));
    println!("=== PowerShell ===");
    println!("{}", generate(&state));
}
