pub mod doctor;
pub mod format;
pub mod generate;
pub mod inspect;

use pyreport_core::config::{ConfigLoader, ResolvedConfig};
use pyreport_core::notebook::{self, Notebook};
use pyreport_core::snapshot::{self, VariableSet};
use std::fs;
use std::path::Path;

use crate::logging;

/// Load configuration and install logging, exiting on a config error.
fn load_config(config: Option<&Path>, verbosity: i16) -> ResolvedConfig {
    let cfg = match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    logging::init(&cfg, verbosity);
    cfg
}

/// Read and parse the notebook and snapshot, exiting on the first failure.
fn load_inputs(notebook_path: &Path, snapshot_path: &Path) -> (Notebook, VariableSet) {
    let nb_text = read_or_exit(notebook_path, "notebook");
    let nb = notebook::parse(&nb_text).unwrap_or_else(|e| {
        eprintln!("Failed to parse notebook {}: {e}", notebook_path.display());
        std::process::exit(1);
    });

    let snapshot_text = read_or_exit(snapshot_path, "snapshot");
    let vars = snapshot::parse(&snapshot_text).unwrap_or_else(|e| {
        eprintln!("Failed to parse snapshot {}: {e}", snapshot_path.display());
        std::process::exit(1);
    });

    tracing::info!(
        "Loaded {} cells and {} variables",
        nb.cells.len(),
        vars.len()
    );
    (nb, vars)
}

fn read_or_exit(path: &Path, what: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {what} {}: {e}", path.display());
        std::process::exit(1);
    })
}
