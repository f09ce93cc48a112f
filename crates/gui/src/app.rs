use std::path::Path;

use eframe::egui;
use rfd::FileDialog;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use script_builder_core::{apply, generate, Action, BuilderState, ScriptDialect, SNIPPETS};

use crate::export::write_script_to;
use crate::widgets::{render_toast, ToastState};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct BuilderConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub start_dark: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            title: "Script Builder".to_string(),
            width: 1000.0,
            height: 760.0,
            start_dark: false,
        }
    }
}

/// Runs the builder as a standalone application.
pub fn run_builder(config: Option<BuilderConfig>) -> Result<(), eframe::Error> {
    let config = config.unwrap_or_default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width.max(1.0), config.height.max(1.0)])
            .with_title(config.title.clone()),
        ..Default::default()
    };
    let title = config.title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(BuilderApp::new(config))),
    )
}

/// Main builder application state and UI.
pub struct BuilderApp {
    pub config: BuilderConfig,
    pub state: BuilderState,

    // Menu builder inputs, not yet committed to the state
    pub pending_label: String,
    pub pending_command: String,

    // Snippet picker selection (index into SNIPPETS)
    pub selected_snippet: Option<usize>,

    /// Last-generated script text shown in the preview pane.
    pub preview: String,

    // UI state
    pub dark_mode: bool,
    applied_dark: Option<bool>,
    pub toast: Option<ToastState>,
}

impl BuilderApp {
    pub fn new(config: BuilderConfig) -> Self {
        let dark_mode = config.start_dark;
        Self {
            config,
            state: BuilderState::default(),
            pending_label: String::new(),
            pending_command: String::new(),
            selected_snippet: None,
            preview: String::new(),
            dark_mode,
            applied_dark: None,
            toast: None,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        apply(&mut self.state, action);
    }

    /// Regenerates the preview pane from the current state.
    pub fn generate_preview(&mut self) {
        self.preview = generate(&self.state);
    }

    /// Commits the pending label/command fields as a menu entry.
    ///
    /// Leaves the fields untouched when either is empty, mirroring the
    /// reducer's add semantics.
    pub fn add_pending_entry(&mut self) {
        if self.pending_label.is_empty() || self.pending_command.is_empty() {
            return;
        }
        let label = std::mem::take(&mut self.pending_label);
        let command = std::mem::take(&mut self.pending_command);
        self.dispatch(Action::AddMenuEntry { label, command });
    }

    /// Appends the selected catalog snippet to the body and clears the
    /// selection.
    pub fn insert_selected_snippet(&mut self) {
        let Some(index) = self.selected_snippet.take() else {
            return;
        };
        if let Some(snippet) = SNIPPETS.get(index) {
            self.dispatch(Action::InsertSnippet {
                command: snippet.command.to_string(),
            });
        }
    }

    /// Regenerates from the current state and writes the script to `path`.
    ///
    /// Export never reuses a stale preview: the file always reflects the
    /// state at the moment of export, and the preview pane is refreshed to
    /// match what was written.
    pub fn export_to(&mut self, path: &Path) {
        self.generate_preview();
        match write_script_to(path, &self.preview) {
            Ok(()) => {
                info!(path = %path.display(), "exported script");
                self.toast = Some(ToastState::success(format!(
                    "Exported to {}",
                    path.display()
                )));
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "export failed");
                self.toast = Some(ToastState::error(format!("Export failed: {err}")));
            }
        }
    }

    fn export_dialog(&mut self) {
        if let Some(path) = FileDialog::new()
            .set_title("Export Script")
            .set_file_name(self.state.dialect.file_name())
            .save_file()
        {
            self.export_to(&path);
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        if self.applied_dark != Some(self.dark_mode) {
            let visuals = if self.dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            };
            ctx.set_visuals(visuals);
            self.applied_dark = Some(self.dark_mode);
        }
    }

    fn render_settings(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Script Settings");
            let mut dialect = self.state.dialect;
            egui::ComboBox::from_id_source("dialect_selector")
                .selected_text(dialect.label())
                .show_ui(ui, |ui| {
                    for candidate in ScriptDialect::ALL {
                        ui.selectable_value(&mut dialect, candidate, candidate.label());
                    }
                });
            if dialect != self.state.dialect {
                self.dispatch(Action::SetDialect(dialect));
            }
        });
    }

    fn render_banner(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("ASCII Art (optional)");
            let mut banner = self.state.banner_text.clone();
            let response = ui.add(
                egui::TextEdit::multiline(&mut banner)
                    .desired_rows(5)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Monospace)
                    .hint_text("Paste your ASCII art here..."),
            );
            if response.changed() {
                self.dispatch(Action::SetBannerText(banner));
            }
        });
    }

    fn render_snippets(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Common Snippets");
            ui.horizontal(|ui| {
                let selected_text = self
                    .selected_snippet
                    .and_then(|index| SNIPPETS.get(index))
                    .map(|snippet| snippet.label)
                    .unwrap_or("-- Select a snippet --");
                egui::ComboBox::from_id_source("snippet_picker")
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        for (index, snippet) in SNIPPETS.iter().enumerate() {
                            ui.selectable_value(
                                &mut self.selected_snippet,
                                Some(index),
                                snippet.label,
                            );
                        }
                    });
                if ui.button("Insert").clicked() {
                    self.insert_selected_snippet();
                }
            });
        });
    }

    fn render_body(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Script Content");
            let mut body = self.state.body_text.clone();
            let response = ui.add(
                egui::TextEdit::multiline(&mut body)
                    .desired_rows(10)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Monospace)
                    .hint_text("Write your script here..."),
            );
            if response.changed() {
                self.dispatch(Action::SetBodyText(body));
            }
        });
    }

    fn render_menu_builder(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Menu Builder");
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.pending_label)
                        .hint_text("Label")
                        .desired_width(200.0),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut self.pending_command)
                        .hint_text("Command")
                        .desired_width(260.0),
                );
                if ui.button("Add").clicked() {
                    self.add_pending_entry();
                }
            });

            let mut remove_index = None;
            for (index, entry) in self.state.menu_entries.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(format!("{}) {}", index + 1, entry.label));
                    ui.monospace(&entry.command);
                    if ui.button("Remove").clicked() {
                        remove_index = Some(index);
                    }
                });
            }
            if let Some(index) = remove_index {
                self.dispatch(Action::RemoveMenuEntry(index));
            }
        });
    }

    fn render_actions(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Actions");
            ui.horizontal(|ui| {
                if ui.button("Generate Preview").clicked() {
                    self.generate_preview();
                }
                if ui.button("Export Script").clicked() {
                    self.export_dialog();
                }
            });
        });
    }

    fn render_preview(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Script Preview");
            ui.add(
                egui::TextEdit::multiline(&mut self.preview.as_str())
                    .desired_rows(16)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Monospace),
            );
        });
    }
}

impl eframe::App for BuilderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.heading(&self.config.title);
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                let icon = if self.dark_mode { "🌙" } else { "☀" };
                                if ui.button(icon).clicked() {
                                    self.dark_mode = !self.dark_mode;
                                }
                            },
                        );
                    });
                    ui.separator();
                    self.render_settings(ui);
                    self.render_banner(ui);
                    self.render_snippets(ui);
                    self.render_body(ui);
                    self.render_menu_builder(ui);
                    self.render_actions(ui);
                    self.render_preview(ui);
                });
        });

        render_toast(ctx, &mut self.toast);
    }
}
