mod app;
mod export;
mod widgets;

pub use app::{run_builder, BuilderApp, BuilderConfig};
pub use export::{write_script_to, ExportError};
pub use widgets::{ToastKind, ToastState};
