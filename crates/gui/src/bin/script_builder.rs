//! Script Builder - an interactive form for assembling shell scripts.
//!
//! This binary launches the builder window: banner, snippet, body and menu
//! sections on the left of the preview pane, with export to `.sh` or `.ps1`.

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match script_builder_gui::run_builder(None) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error running script builder: {e}");
            std::process::exit(1);
        }
    }
}
