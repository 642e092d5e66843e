//! Rolling file logger for Tauri applications
//!
//! Installs a global `tracing` subscriber that writes to a size-rotated
//! file and keeps the most recent lines in memory. Records emitted through
//! the `log` facade are forwarded to the same subscriber.

mod writer;

use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use writer::RollingFileWriter;

const DEFAULT_MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;
const DEFAULT_MAX_FILES: usize = 3;
const DEFAULT_BUFFER_LINES: usize = 200;

static ACTIVE: Mutex<Option<ActiveLogger>> = Mutex::new(None);

struct ActiveLogger {
    log_dir: PathBuf,
    writer: RollingFileWriter,
}

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub log_dir: PathBuf,
    pub app_name: String,
    pub max_file_bytes: u64,
    pub max_files: usize,
    pub buffer_lines: usize,
    pub level: log::LevelFilter,
    /// Mirror output to stderr (on by default in debug builds)
    pub stderr: bool,
}

impl LoggerConfig {
    pub fn new(log_dir: PathBuf, app_name: &str) -> Self {
        Self {
            log_dir,
            app_name: app_name.to_string(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            max_files: DEFAULT_MAX_FILES,
            buffer_lines: DEFAULT_BUFFER_LINES,
            level: if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
            stderr: cfg!(debug_assertions),
        }
    }

    pub fn with_level(mut self, level: log::LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// `<log_dir>/<app_name>.log`
    pub fn file_path(&self) -> PathBuf {
        self.log_dir.join(format!("{}.log", self.app_name))
    }
}

/// Initialize the global logger
///
/// Calling again with the same directory is a no-op; a different
/// directory is rejected.
pub fn init_logger_with(config: LoggerConfig) -> Result<(), String> {
    let mut active = ACTIVE.lock().map_err(|_| "logger state poisoned".to_string())?;

    if let Some(existing) = active.as_ref() {
        if existing.log_dir == config.log_dir {
            return Ok(());
        }
        return Err(format!(
            "logger already initialized at `{}`; refusing to switch to `{}`",
            existing.log_dir.display(),
            config.log_dir.display()
        ));
    }

    let writer = RollingFileWriter::open(
        config.file_path(),
        config.max_file_bytes,
        config.max_files,
        config.buffer_lines,
    )
    .map_err(|e| format!("failed to open log file `{}`: {}", config.file_path().display(), e))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer.clone())
        .with_ansi(false)
        .with_timer(LocalTime);

    let stderr_layer = config.stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_timer(LocalTime)
    });

    tracing_subscriber::registry()
        .with(level_filter(config.level))
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| format!("failed to install logger: {}", e))?;

    tracing::info!(
        app = %config.app_name,
        log_file = %config.file_path().display(),
        "logger initialized"
    );

    *active = Some(ActiveLogger {
        log_dir: config.log_dir,
        writer,
    });
    Ok(())
}

/// Most recent log lines, oldest first (empty before initialization)
pub fn recent_lines() -> Vec<String> {
    match ACTIVE.lock() {
        Ok(active) => active.as_ref().map(|a| a.writer.recent_lines()).unwrap_or_default(),
        Err(_) => Vec::new(),
    }
}

fn level_filter(level: log::LevelFilter) -> LevelFilter {
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

/// Local wall-clock timestamps with millisecond precision
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}
