mod action;
mod dialect;
mod generate;
mod snippet;
mod state;

pub use action::{apply, Action};
pub use dialect::ScriptDialect;
pub use generate::generate;
pub use snippet::{Snippet, SNIPPETS};
pub use state::{BuilderState, MenuEntry};
