use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub markers: MarkerConfig,
    #[serde(default)]
    pub tables: TableConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Source markers the scalar renderer strips or reacts to.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct MarkerConfig {
    /// Accessor appended to unit quantities to unwrap their raw number.
    #[serde(default = "default_true_value_suffix")]
    pub true_value_suffix: String,
    /// Method call that rescales a unit quantity; noise in a rendered equation.
    #[serde(default = "default_auto_scale_call")]
    pub auto_scale_call: String,
    /// Constructor names whose call marks an expression as a pure unit declaration.
    #[serde(default = "default_unit_constructors")]
    pub unit_constructors: Vec<String>,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            true_value_suffix: default_true_value_suffix(),
            auto_scale_call: default_auto_scale_call(),
            unit_constructors: default_unit_constructors(),
        }
    }
}

fn default_true_value_suffix() -> String {
    ".true_value".to_string()
}

fn default_auto_scale_call() -> String {
    ".auto_scale()".to_string()
}

fn default_unit_constructors() -> Vec<String> {
    vec!["Unit".to_string()]
}

/// Configuration for table directives in notebook source.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Keyword that opens a table directive comment (default: `@table`).
    #[serde(default = "default_table_directive")]
    pub directive: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { directive: default_table_directive() }
    }
}

fn default_table_directive() -> String {
    "@table".to_string()
}

/// Where `generate` writes its artifacts relative to the notebook.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "default_report_suffix")]
    pub report_suffix: String,
    #[serde(default = "default_vars_suffix")]
    pub vars_suffix: String,
    #[serde(default = "default_write_vars")]
    pub write_vars: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_suffix: default_report_suffix(),
            vars_suffix: default_vars_suffix(),
            write_vars: default_write_vars(),
        }
    }
}

fn default_report_suffix() -> String {
    "_report.md".to_string()
}

fn default_vars_suffix() -> String {
    "_vars.json".to_string()
}

fn default_write_vars() -> bool {
    true
}

#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// Config file the settings came from; `None` when running on defaults.
    pub source: Option<PathBuf>,
    pub logging: LoggingConfig,
    pub markers: MarkerConfig,
    pub tables: TableConfig,
    pub output: OutputConfig,
}
