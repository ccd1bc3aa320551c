//! Logging and diagnostics setup.
//!
//! - JSON log files with daily rotation (tracing-appender)
//! - `log` macros bridged into tracing
//! - Old rotated logs gzip-compressed in the background
//! - miette report hook tuned to the detected terminal

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use flate2::write::GzEncoder;
use flate2::Compression;
use supports_color::Stream;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// File name prefix for rolling logs.
pub const LOG_FILE_NAME: &str = "discovery-wizard.log";

static TERMINAL_CAPS: OnceLock<TerminalCapabilities> = OnceLock::new();

fn get_terminal_caps() -> &'static TerminalCapabilities {
    TERMINAL_CAPS.get_or_init(TerminalCapabilities::detect)
}

// ============================================================================
// Terminal Capability Detection
// ============================================================================

/// Terminal color support levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLevel {
    /// 24-bit TrueColor
    TrueColor,
    /// 256-color palette
    Ansi256,
    /// 16 ANSI colors
    Ansi16,
    NoColor,
}

#[derive(Debug, Clone)]
pub struct TerminalCapabilities {
    pub color_level: ColorLevel,
    pub supports_unicode: bool,
    pub is_interactive: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        use is_terminal::IsTerminal;

        let color_level = match supports_color::on(Stream::Stderr) {
            Some(support) if support.has_16m => ColorLevel::TrueColor,
            Some(support) if support.has_256 => ColorLevel::Ansi256,
            Some(support) if support.has_basic => ColorLevel::Ansi16,
            _ => ColorLevel::NoColor,
        };

        let supports_unicode = std::env::var("TERM")
            .map(|t| !t.contains("dumb"))
            .unwrap_or(true)
            && std::env::var("LANG")
                .map(|l| l.contains("UTF-8") || l.contains("utf8"))
                .unwrap_or(true);

        Self {
            color_level,
            supports_unicode,
            is_interactive: io::stderr().is_terminal(),
        }
    }

    pub fn should_colorize(&self) -> bool {
        self.is_interactive && self.color_level != ColorLevel::NoColor
    }
}

// ============================================================================
// Logging Initialization
// ============================================================================

/// Initialize file logging for TUI mode.
///
/// There is no stdout layer: ratatui owns the terminal while the app runs.
/// The filter comes from `RUST_LOG` and defaults to `info`.
///
/// Keep the returned guard alive for the whole run so buffered lines are
/// flushed on exit.
pub fn init_tui(log_dir: &Path) -> WorkerGuard {
    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(file_layer).init();

    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize LogTracer: {}", e);
    }

    init_miette();

    let log_dir = log_dir.to_path_buf();
    std::thread::spawn(move || compress_old_logs(&log_dir));

    guard
}

/// Whether a file in the log directory is a finished rotation that should
/// be gzipped. Today's file and anything already compressed are left alone.
fn should_compress(name: &str, today_suffix: &str) -> bool {
    name.strip_prefix(LOG_FILE_NAME)
        .and_then(|rest| rest.strip_prefix('.'))
        .is_some_and(|date| date != today_suffix && !date.ends_with(".gz"))
}

/// Date suffix of the file the daily appender is writing right now. The
/// appender rotates on UTC midnight, so this must be the UTC date.
fn active_suffix() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

fn compress_old_logs(log_dir: &Path) {
    let today_suffix = active_suffix();

    let Ok(entries) = fs::read_dir(log_dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !should_compress(name, &today_suffix) {
            continue;
        }
        match compress_file(&path) {
            Ok(()) => log::info!("Compressed old log: {:?}", path),
            Err(e) => log::warn!("Failed to compress old log {:?}: {}", path, e),
        }
    }
}

fn compress_file(path: &Path) -> io::Result<()> {
    let mut gz_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No filename"))?
        .to_os_string();
    gz_name.push(".gz");
    let gz_path: PathBuf = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?
        .join(gz_name);

    if gz_path.exists() {
        return Ok(());
    }

    let mut reader = io::BufReader::new(fs::File::open(path)?);
    let mut encoder = GzEncoder::new(fs::File::create(&gz_path)?, Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)
}

/// Install the miette report handler.
pub fn init_miette() {
    let caps = get_terminal_caps();

    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(caps.color_level == ColorLevel::TrueColor)
                .unicode(caps.supports_unicode)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .color(caps.should_colorize())
                .build(),
        )
    }))
    .ok(); // already set
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[test]
    fn test_should_compress_only_old_rotations() {
        let today = "2026-03-02";
        assert!(should_compress("discovery-wizard.log.2026-03-01", today));
        assert!(!should_compress("discovery-wizard.log.2026-03-02", today));
        assert!(!should_compress("discovery-wizard.log.2026-03-01.gz", today));
        assert!(!should_compress("discovery-wizard.log", today));
        assert!(!should_compress("other.log.2026-03-01", today));
    }

    #[test]
    fn test_compress_file_replaces_original() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("discovery-wizard.log.2020-01-01");
        fs::write(&path, "{\"msg\":\"hello\"}\n").unwrap();

        compress_file(&path).unwrap();

        assert!(!path.exists());
        let gz = dir.path().join("discovery-wizard.log.2020-01-01.gz");
        let mut text = String::new();
        GzDecoder::new(fs::File::open(gz).unwrap())
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "{\"msg\":\"hello\"}\n");
    }

    #[test]
    fn test_active_suffix_is_utc_date() {
        let before = chrono::Utc::now().format("%Y-%m-%d").to_string();
        let suffix = active_suffix();
        let after = chrono::Utc::now().format("%Y-%m-%d").to_string();
        assert!(suffix == before || suffix == after);
    }

    #[test]
    fn test_compress_old_logs_skips_today() {
        let dir = tempfile::tempdir().unwrap();
        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        let current = dir.path().join(format!("{LOG_FILE_NAME}.{today}"));
        let old = dir.path().join(format!("{LOG_FILE_NAME}.2001-01-01"));
        fs::write(&current, "a").unwrap();
        fs::write(&old, "b").unwrap();

        compress_old_logs(dir.path());

        assert!(current.exists());
        assert!(!old.exists());
        assert!(dir.path().join(format!("{LOG_FILE_NAME}.2001-01-01.gz")).exists());
    }
}
