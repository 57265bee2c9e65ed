use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_DIR_ENV_VAR: &str = "AUTOLOADER_LOG_DIR";

/// Directory holding rolling log files: `$AUTOLOADER_LOG_DIR`, else `~/.autoloader/logs`.
pub fn log_dir() -> Option<PathBuf> {
    resolve_log_dir(std::env::var_os(LOG_DIR_ENV_VAR).map(PathBuf::from), dirs::home_dir())
}

fn resolve_log_dir(overridden: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    overridden
        .filter(|dir| !dir.as_os_str().is_empty())
        .or_else(|| home.map(|home| home.join(".autoloader/logs")))
}

/// Install the global subscriber for `component`.
///
/// Events go to a daily file (`<component>.<date>`) in [`log_dir`] and, with
/// `to_stderr`, to the terminal. Without a usable log directory only the stderr
/// layer is installed and no guard is returned. A second call is a no-op.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match log_dir().filter(|dir| std::fs::create_dir_all(dir).is_ok()) {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(&dir, component);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
    });

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    if installed.is_err() {
        tracing::debug!("Logging already initialized; keeping existing subscriber");
    }

    guard
}
