use pyreport_core::config::ResolvedConfig;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static LOG_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> =
    Mutex::new(None);

/// Stderr levels from quietest to loudest; `-v`/`-q` step along this list.
const LEVELS: [LevelFilter; 6] = [
    LevelFilter::OFF,
    LevelFilter::ERROR,
    LevelFilter::WARN,
    LevelFilter::INFO,
    LevelFilter::DEBUG,
    LevelFilter::TRACE,
];

/// Install the stderr layer and, when `logging.file` is set, a file layer.
///
/// `verbosity` is the number of `-v` flags minus the number of `-q` flags
/// and only moves the stderr level; the file keeps its configured level.
pub fn init(cfg: &ResolvedConfig, verbosity: i16) {
    let stderr_filter = EnvFilter::builder()
        .with_default_directive(stderr_level(&cfg.logging.level, verbosity).into())
        .from_env_lossy();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .without_time()
        .with_filter(stderr_filter);

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let Some(path) = cfg.logging.file.as_deref() else {
        registry.init();
        return;
    };

    let file_level = cfg.logging.file_level.as_deref().unwrap_or(&cfg.logging.level);
    let file_filter = EnvFilter::builder()
        .with_default_directive(parse_level(file_level).unwrap_or(LevelFilter::DEBUG).into())
        .from_env_lossy();

    let file = open_log_file(path).unwrap_or_else(|e| {
        eprintln!("Failed to create log file {}: {}", path.display(), e);
        std::process::exit(1);
    });
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    // Keep the writer thread alive until exit
    if let Ok(mut g) = LOG_GUARD.lock() {
        *g = Some(guard);
    }

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(file_filter);

    registry.with(file_layer).init();
}

/// Configured stderr level shifted by `verbosity`, clamped to the ends of
/// [`LEVELS`]. Unknown level names count as `info`.
fn stderr_level(configured: &str, verbosity: i16) -> LevelFilter {
    let base = parse_level(configured).unwrap_or(LevelFilter::INFO);
    let index = LEVELS.iter().position(|l| *l == base).unwrap_or(3) as i16;
    let shifted = (index + verbosity).clamp(0, LEVELS.len() as i16 - 1);
    LEVELS[shifted as usize]
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    File::create(path)
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
