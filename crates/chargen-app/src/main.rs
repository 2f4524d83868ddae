//! Chargen terminal host entry point.

use std::error::Error;
use std::sync::Arc;

use chargen_catalog::ArchetypeCatalog;
use chargen_core::clock::SystemClock;
use chargen_core::rng::EntropyRng;
use chargen_wizard::application::controller::WizardController;
use tracing_subscriber::EnvFilter;

mod host;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber. Logs go to stderr and default to
    // warn so the alternate screen stays clean unless RUST_LOG asks for
    // more.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Read configuration from environment.
    let catalog = match std::env::var("CHARGEN_CATALOG") {
        Ok(path) => {
            tracing::info!(%path, "loading catalog override");
            let source = std::fs::read_to_string(&path)?;
            ArchetypeCatalog::from_yaml(&source)?
        }
        Err(_) => ArchetypeCatalog::builtin(),
    };

    let controller = WizardController::new(
        Arc::new(catalog),
        Box::new(SystemClock),
        Box::new(EntropyRng::new()),
    );

    let chosen = host::run(controller)?;

    // Hand the final hero to whatever invoked us.
    if let Some(character) = chosen {
        println!("{}", serde_json::to_string_pretty(&character)?);
    }

    Ok(())
}
