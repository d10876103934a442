use pyreport_core::config::loader::{ConfigLoader, default_config_path};
use std::path::Path;

pub fn run(config: Option<&Path>, verbosity: i16) {
    match ConfigLoader::load(config) {
        Ok(rc) => {
            println!("OK   pyreport doctor");
            println!(
                "path: {}",
                rc.source.as_ref().map_or_else(
                    || format!("{} (not found, using defaults)", default_config_path().display()),
                    |p| p.display().to_string()
                )
            );
            println!("logging.level: {}", rc.logging.level);
            println!(
                "logging.file: {}",
                rc.logging.file.as_ref().map_or("-".to_string(), |p| p.display().to_string())
            );
            println!("markers.true_value_suffix: {}", rc.markers.true_value_suffix);
            println!("markers.auto_scale_call: {}", rc.markers.auto_scale_call);
            println!("markers.unit_constructors: {}", rc.markers.unit_constructors.join(", "));
            println!("tables.directive: {}", rc.tables.directive);
            println!("output.report_suffix: {}", rc.output.report_suffix);
            println!("output.vars_suffix: {}", rc.output.vars_suffix);
            println!("output.write_vars: {}", rc.output.write_vars);
            crate::logging::init(&rc, verbosity);
            tracing::debug!("Configuration validated");
        }
        Err(e) => {
            println!("FAIL pyreport doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
