//! Diagnostic logging for ztgate.
//!
//! Verdicts go to stdout and the audit log. This log records how they were
//! reached: which config was loaded, whether a scoring model is available, and
//! every fallback to heuristics-only scoring. It lives at
//! `~/.local/state/ztgate/ztgate.log`; `RUST_LOG` overrides the default filter.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,ztgate=debug,ztgate_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Shared handle on the diagnostic log file.
///
/// Each event gets its own cloned descriptor; if cloning fails (descriptor
/// exhaustion) the event is written to stderr instead of being dropped.
struct DiagnosticFile(File);

enum EventSink {
    File(File),
    Stderr,
}

impl Write for EventSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            EventSink::File(f) => f.write(buf),
            EventSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            EventSink::File(f) => f.flush(),
            EventSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for DiagnosticFile {
    type Writer = EventSink;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(f) => EventSink::File(f),
            Err(_) => EventSink::Stderr,
        }
    }
}

/// `~/.local/state/ztgate/ztgate.log`
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ztgate")?;
    Ok(xdg_dirs.get_state_home().join("ztgate").join("ztgate.log"))
}

fn open_append(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))
}

/// Install the global subscriber writing to the diagnostic log file.
///
/// Errors leave no subscriber installed, so the caller can use
/// [`init_logging_stderr`] instead.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = open_append(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(DiagnosticFile(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;

    tracing::info!("ztgate diagnostics logging to {}", path.display());
    Ok(())
}

/// Install a stderr subscriber after [`init_logging`] failed, recording why the
/// log file was not usable as the first event.
pub fn init_logging_stderr(file_error: &anyhow::Error) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::warn!("diagnostic log file unavailable ({file_error:#}); logging to stderr");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_append_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("ztgate.log");
        let mut f = open_append(&path).unwrap();
        f.write_all(b"first\n").unwrap();
        drop(f);
        let mut f = open_append(&path).unwrap();
        f.write_all(b"second\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn sink_falls_back_to_stderr() {
        let mut sink = EventSink::Stderr;
        assert_eq!(sink.write(b"").unwrap(), 0);
        sink.flush().unwrap();
    }
}
