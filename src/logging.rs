//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so log output goes to a file:
//! `~/.local/share/covidash/covidash.log` unless `log_file` is configured.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::DashConfig;

const LOG_FILE: &str = "covidash.log";

/// Default log location, `None` if the platform has no data dir.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("covidash").join(LOG_FILE))
}

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG` if set, otherwise `config.log_level`.
/// Returns the log path on success. Fails silently (returns `None`) when the
/// file cannot be opened or a subscriber is already installed.
pub fn init_logging(config: &DashConfig) -> Option<PathBuf> {
    let path = config.log_file.clone().or_else(default_log_path)?;

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return None;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .ok()?;

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_file_name() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("covidash/covidash.log"));
        }
    }

    #[test]
    fn test_unwritable_path_fails_silently() {
        let config = DashConfig::new().with_log_file("/proc/definitely/not/here/covidash.log");
        assert!(init_logging(&config).is_none());
    }
}
