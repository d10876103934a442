//! Report generation command.

use pyreport_core::config::OutputConfig;
use pyreport_core::generate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::GenerateArgs;

/// Run the generate command.
pub fn run(config: Option<&Path>, verbosity: i16, args: &GenerateArgs) {
    let cfg = super::load_config(config, verbosity);
    let (nb, vars) = super::load_inputs(&args.notebook, &args.snapshot);

    let report = generate(vars, &nb, &cfg);

    if args.stdout {
        print!("{}", report.markdown);
        return;
    }

    let report_path = args
        .output
        .clone()
        .unwrap_or_else(|| sibling_path(&args.notebook, &cfg.output.report_suffix));
    write_or_exit(&report_path, &report.markdown);
    println!("Report written to: {}", report_path.display());

    if let Some(vars_path) = vars_json_path(args, &cfg.output) {
        let json = match report.variables.to_json_pretty() {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to serialize variables: {e}");
                std::process::exit(1);
            }
        };
        write_or_exit(&vars_path, &json);
        println!("Variables written to: {}", vars_path.display());
    }
}

/// Where the variables document goes, or `None` when it is disabled.
fn vars_json_path(args: &GenerateArgs, output: &OutputConfig) -> Option<PathBuf> {
    if args.no_vars_json {
        return None;
    }
    match &args.vars_json {
        Some(path) => Some(path.clone()),
        None if output.write_vars => Some(sibling_path(&args.notebook, &output.vars_suffix)),
        None => None,
    }
}

/// `dir/calc.ipynb` + `_report.md` -> `dir/calc_report.md`.
fn sibling_path(notebook: &Path, suffix: &str) -> PathBuf {
    let stem = notebook.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    notebook.with_file_name(format!("{stem}{suffix}"))
}

fn write_or_exit(path: &Path, content: &str) {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
        && let Err(e) = fs::create_dir_all(parent)
    {
        eprintln!("Failed to create directory {}: {e}", parent.display());
        std::process::exit(1);
    }
    if let Err(e) = fs::write(path, content) {
        eprintln!("Failed to write {}: {e}", path.display());
        std::process::exit(1);
    }
    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
}
