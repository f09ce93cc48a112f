use std::fs;
use std::path::Path;

/// Errors raised while writing an exported script to disk.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ExportError {
    #[error("io error: {0}")]
    #[diagnostic(code(export::io_error))]
    Io(#[from] std::io::Error),
}

/// Writes the rendered script to `path` as UTF-8, creating parent
/// directories as needed.
pub fn write_script_to(path: &Path, contents: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
