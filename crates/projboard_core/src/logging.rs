//! Rolling file logs and panic isolation.
//!
//! # Responsibility
//! - Start the file logger once per process from explicit or env settings.
//! - Run listener callbacks so a panic is reported once, by the caller that
//!   isolated it, instead of twice (hook + caller).
//!
//! # Invariants
//! - A second `init_logging` with identical settings is a no-op; any other
//!   settings are rejected.
//! - Panic payloads are never logged; they may carry project titles.
//! - Neither initialization nor isolation panics.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::cell::{Cell, RefCell};
use std::fmt::{Display, Formatter};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

/// Env var naming the absolute log directory. Logging stays off when unset.
pub const LOG_DIR_ENV: &str = "PROJBOARD_LOG_DIR";
/// Env var overriding the level (`off|error|warn|info|debug|trace`).
pub const LOG_LEVEL_ENV: &str = "PROJBOARD_LOG_LEVEL";

const LOG_FILE_BASENAME: &str = "projboard";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 5;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

thread_local! {
    static ISOLATION_DEPTH: Cell<u32> = const { Cell::new(0) };
    static ISOLATED_PANIC_AT: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub log_dir: PathBuf,
}

impl LogSettings {
    /// Parses a level name and an absolute directory.
    pub fn new(level: &str, log_dir: impl Into<PathBuf>) -> Result<Self, String> {
        let level = level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|err| format!("invalid log level `{}`: {err}", level.trim()))?;
        let log_dir = log_dir.into();
        if !log_dir.is_absolute() {
            return Err(format!(
                "log directory must be absolute, got `{}`",
                log_dir.display()
            ));
        }
        Ok(Self { level, log_dir })
    }

    /// Reads [`LOG_DIR_ENV`] and [`LOG_LEVEL_ENV`].
    ///
    /// Returns `Ok(None)` when no directory is configured.
    pub fn from_env() -> Result<Option<Self>, String> {
        let Some(log_dir) = std::env::var_os(LOG_DIR_ENV).filter(|dir| !dir.is_empty()) else {
            return Ok(None);
        };
        let level = std::env::var(LOG_LEVEL_ENV)
            .unwrap_or_else(|_| default_log_level().as_str().to_string());
        Self::new(&level, log_dir).map(Some)
    }
}

struct ActiveLogger {
    settings: LogSettings,
    _handle: LoggerHandle,
}

/// Starts rotating file logging.
///
/// # Errors
/// - The directory cannot be created or the backend fails to start.
/// - Logging is already running with different settings.
pub fn init_logging(settings: &LogSettings) -> Result<(), String> {
    let active = ACTIVE.get_or_try_init(|| start(settings))?;
    if active.settings != *settings {
        return Err(format!(
            "logging already running at `{}` with level {}",
            active.settings.log_dir.display(),
            active.settings.level
        ));
    }
    Ok(())
}

/// Settings of the running logger, if any.
pub fn logging_status() -> Option<LogSettings> {
    ACTIVE.get().map(|active| active.settings.clone())
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn start(settings: &LogSettings) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(&settings.log_dir).map_err(|err| {
        format!(
            "cannot create log directory `{}`: {err}",
            settings.log_dir.display()
        )
    })?;

    let spec = LogSpecification::builder()
        .default(settings.level)
        .build();
    let handle = Logger::with(spec)
        .log_to_file(
            FileSpec::default()
                .directory(settings.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("cannot start logger: {err}"))?;

    install_panic_hook();
    info!(
        "event=logging_init module=logging status=ok level={} log_dir={} version={}",
        settings.level,
        settings.log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        settings: settings.clone(),
        _handle: handle,
    })
}

/// A panic caught by [`run_isolated`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsolatedPanic {
    /// `file:line` of the panic, or `unknown`.
    pub location: String,
}

impl Display for IsolatedPanic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "callback panicked at {}", self.location)
    }
}

/// Runs `task`, turning a panic into an error the caller reports.
///
/// While `task` runs the panic hook only records the location, so the panic
/// shows up once in the log under the caller's event.
pub(crate) fn run_isolated<F: FnOnce()>(task: F) -> Result<(), IsolatedPanic> {
    install_panic_hook();
    ISOLATION_DEPTH.with(|depth| depth.set(depth.get() + 1));
    let outcome = panic::catch_unwind(AssertUnwindSafe(task));
    ISOLATION_DEPTH.with(|depth| depth.set(depth.get() - 1));
    let location = ISOLATED_PANIC_AT.with(|slot| slot.borrow_mut().take());

    outcome.map_err(|_| IsolatedPanic {
        location: location.unwrap_or_else(|| "unknown".to_string()),
    })
}

fn install_panic_hook() {
    PANIC_HOOK.get_or_init(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_else(|| "unknown".to_string());
            if ISOLATION_DEPTH.with(Cell::get) > 0 {
                ISOLATED_PANIC_AT.with(|slot| *slot.borrow_mut() = Some(location));
            } else {
                error!("event=panic module=logging status=error location={location}");
            }
            previous(info);
        }));
    });
}
