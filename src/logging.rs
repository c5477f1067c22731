//! Opt-in file logging.
//!
//! The launcher shares its console with the caller, so nothing is written
//! anywhere unless `WTD_LOG` names a file prefix. Each launch gets its own
//! file and one `launch` span whose close event records how long the
//! resolve, assemble and spawn steps took together.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file prefix.
pub const LOG_ENV: &str = "WTD_LOG";

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "wtd=info";

/// Per-launch log file: `{prefix}.{timestamp}.{pid}`.
///
/// Several terminals opened in a row do not clobber each other's logs.
pub fn log_file_path(prefix: &Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = prefix.as_os_str().to_os_string();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}

/// Initialize tracing if `WTD_LOG` is set.
///
/// Returns the log file in use, or `None` when logging stays off.
pub fn init_tracing() -> Option<PathBuf> {
    let prefix = PathBuf::from(std::env::var_os(LOG_ENV)?);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = log_file_path(&prefix, timestamp, std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), e);
            return None;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(path)
}
