//! Logging setup on top of `tracing`
//!
//! Console events go to stderr; stdout is reserved for the generator's
//! confirmation output. An optional log file receives an uncolored copy.

use crate::config::LoggingOptions;
use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlockingBuilder, WorkerGuard};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Install the global subscriber described by `options`.
///
/// The returned guard flushes the log file when dropped, so callers keep it
/// alive until the process is done. Returns `Ok(None)` if a subscriber was
/// already installed or no file is configured.
pub fn init(options: &LoggingOptions) -> Result<Option<WorkerGuard>> {
    if tracing::dispatcher::has_been_set() {
        return Ok(None);
    }

    let filter = EnvFilter::try_new(&options.level)
        .map_err(|e| Error::Config(format!("Invalid log level '{}': {e}", options.level)))?;

    let (file, guard) = options
        .file
        .as_deref()
        .map(|path| file_layer(path))
        .transpose()?
        .unzip();

    tracing_subscriber::registry()
        .with(filter)
        .with(file)
        .with(console_layer(options.color))
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to install tracing subscriber: {e}")))?;

    Ok(guard)
}

fn file_layer<S>(path: &Path) -> Result<(impl Layer<S> + use<S>, WorkerGuard)>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| {
            Error::Config(format!(
                "Failed to create log directory {}: {e}",
                dir.display()
            ))
        })?;
    }

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| Error::Config(format!("Failed to open log file {}: {e}", path.display())))?;

    let (writer, guard) = NonBlockingBuilder::default().lossy(false).finish(file);

    let layer = fmt::layer()
        .with_timer(UtcTime::rfc_3339())
        .with_ansi(false)
        .with_writer(writer)
        .with_target(true);

    Ok((layer, guard))
}

fn console_layer<S>(color: bool) -> impl Layer<S>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fmt::layer()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(io::stderr)
        .with_ansi(color)
        .with_target(true)
}
