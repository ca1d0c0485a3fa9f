use std::path::{Path, PathBuf};

use tracing_appender::rolling;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_RETENTION_DAYS: u64 = 7;

/// Return the log directory path.
///
/// Precedence: `SLIDESHOW_LOG_DIR` env var > platform default.
/// macOS: `~/Library/Logs/slideshow/`
/// Linux: `$XDG_DATA_HOME/slideshow/logs/` or `~/.local/share/slideshow/logs/`
pub fn log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SLIDESHOW_LOG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = dirs::home_dir() {
            return home.join("Library").join("Logs").join("slideshow");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        if let Some(data) = dirs::data_dir() {
            return data.join("slideshow").join("logs");
        }
    }

    PathBuf::from("logs")
}

/// Remove widget log files older than `max_age_days` from the given
/// directory.
///
/// Only deletes files whose name starts with `slideshow.log` (the prefix
/// used by the daily rolling appender) in case the log directory is
/// shared with the host.
fn cleanup_old_logs(log_path: &Path, max_age_days: u64) {
    let cutoff =
        std::time::SystemTime::now() - std::time::Duration::from_secs(max_age_days * 86400);
    if let Ok(entries) = std::fs::read_dir(log_path) {
        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !name.starts_with("slideshow.log") {
                continue;
            }
            if let Ok(meta) = entry.metadata() {
                if let Ok(modified) = meta.modified() {
                    if modified < cutoff {
                        let _ = std::fs::remove_file(entry.path());
                    }
                }
            }
        }
    }
}

/// Initialize the logging subsystem.
///
/// Filter controlled by `SLIDESHOW_LOG` or `RUST_LOG` (default: `info`).
/// File output: daily rotation in `log_dir()`, 7-day retention. A plain
/// fmt layer also writes to stderr for host-embedded debugging.
pub fn init() {
    let filter = EnvFilter::try_from_env("SLIDESHOW_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let log_path = log_dir();
    if let Err(e) = std::fs::create_dir_all(&log_path) {
        eprintln!(
            "warning: failed to create log directory {:?}: {}",
            log_path, e
        );
    }

    cleanup_old_logs(&log_path, LOG_RETENTION_DAYS);

    let file_appender = rolling::daily(&log_path, "slideshow.log");
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serialize env-mutating tests to avoid data races.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn log_dir_respects_env_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let original = std::env::var("SLIDESHOW_LOG_DIR").ok();

        std::env::set_var("SLIDESHOW_LOG_DIR", "/tmp/slideshow-test-logs");
        assert_eq!(log_dir(), PathBuf::from("/tmp/slideshow-test-logs"));

        match original {
            Some(v) => std::env::set_var("SLIDESHOW_LOG_DIR", v),
            None => std::env::remove_var("SLIDESHOW_LOG_DIR"),
        }
    }

    #[test]
    fn log_dir_default_without_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let original = std::env::var("SLIDESHOW_LOG_DIR").ok();

        std::env::remove_var("SLIDESHOW_LOG_DIR");
        let dir = log_dir();
        assert!(dir.to_string_lossy().contains("slideshow") || dir == PathBuf::from("logs"));

        if let Some(v) = original {
            std::env::set_var("SLIDESHOW_LOG_DIR", v);
        }
    }

    #[test]
    fn cleanup_old_logs_removes_stale_files() {
        let tmp = std::env::temp_dir().join(format!("slideshow-cleanup-{}", std::process::id()));
        let _ = std::fs::create_dir_all(&tmp);

        let ours_a = tmp.join("slideshow.log.2025-01-01");
        let ours_b = tmp.join("slideshow.log.2025-01-02");
        let other = tmp.join("other.txt");
        std::fs::write(&ours_a, "a").unwrap();
        std::fs::write(&ours_b, "b").unwrap();
        std::fs::write(&other, "c").unwrap();

        // max_age_days=0 puts the cutoff at "now", so every matching file
        // is stale.
        cleanup_old_logs(&tmp, 0);
        assert!(!ours_a.exists(), "widget log file should be deleted");
        assert!(!ours_b.exists(), "widget log file should be deleted");
        assert!(other.exists(), "unrelated file should be preserved");

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
