use std::fs;

use tempfile::tempdir;

use script_builder_core::{generate, Action, ScriptDialect};
use script_builder_gui::{BuilderApp, BuilderConfig, ToastKind};

fn new_app() -> BuilderApp {
    BuilderApp::new(BuilderConfig::default())
}

#[test]
fn add_pending_entry_commits_and_clears_fields() {
    let mut app = new_app();
    app.pending_label = "List".to_string();
    app.pending_command = "ls -la".to_string();

    app.add_pending_entry();

    assert_eq!(app.state.menu_entries.len(), 1);
    assert_eq!(app.state.menu_entries[0].label, "List");
    assert!(app.pending_label.is_empty());
    assert!(app.pending_command.is_empty());
}

#[test]
fn add_pending_entry_keeps_fields_when_incomplete() {
    let mut app = new_app();
    app.pending_label = "List".to_string();

    app.add_pending_entry();

    assert!(app.state.menu_entries.is_empty());
    assert_eq!(app.pending_label, "List");
}

#[test]
fn insert_selected_snippet_appends_and_clears_selection() {
    let mut app = new_app();
    app.dispatch(Action::SetBodyText("echo start".to_string()));
    app.selected_snippet = Some(2); // "pwd"

    app.insert_selected_snippet();

    assert_eq!(app.state.body_text, "echo start\npwd");
    assert_eq!(app.selected_snippet, None);

    // No selection: nothing happens
    app.insert_selected_snippet();
    assert_eq!(app.state.body_text, "echo start\npwd");
}

#[test]
fn generate_preview_reflects_current_state() {
    let mut app = new_app();
    app.dispatch(Action::SetBannerText("hello".to_string()));

    app.generate_preview();

    assert_eq!(app.preview, "# Script Preview\n\necho \"hello\"\n\n");
}

#[test]
fn export_regenerates_from_current_state() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("script.sh");

    let mut app = new_app();
    app.dispatch(Action::SetBodyText("echo one".to_string()));
    app.generate_preview();

    // Edit after the preview was generated; the export must pick it up.
    app.dispatch(Action::SetBodyText("echo two".to_string()));
    app.export_to(&path);

    let written = fs::read_to_string(&path).expect("read exported script");
    assert_eq!(written, generate(&app.state));
    assert!(written.ends_with("echo two"));
    assert_eq!(app.preview, written);

    let toast = app.toast.as_ref().expect("success toast");
    assert_eq!(toast.kind, ToastKind::Success);
}

#[test]
fn export_failure_raises_error_toast() {
    let dir = tempdir().expect("tempdir");

    let mut app = new_app();
    // The target path is an existing directory, so the write must fail.
    app.export_to(dir.path());

    let toast = app.toast.as_ref().expect("error toast");
    assert_eq!(toast.kind, ToastKind::Error);
}

#[test]
fn default_file_name_follows_dialect() {
    let mut app = new_app();
    assert_eq!(app.state.dialect.file_name(), "script.sh");

    app.dispatch(Action::SetDialect(ScriptDialect::PowerShell));
    assert_eq!(app.state.dialect.file_name(), "script.ps1");
}
