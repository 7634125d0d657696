//! Plain-text logging.
//!
//! # Responsibilities
//! - Build the tracing subscriber from `ObservabilityConfig`
//! - Render every event as `LEVEL-YYYY/MM/DD HH:MM:SS file.rs:LINE: message`
//! - Install it once at process start
//!
//! # Design Decisions
//! - Uses tracing + tracing-subscriber, filter from `RUST_LOG` or config
//! - `subscriber` is generic over the writer so tests can capture output
//!   with a scoped default instead of the global one

use std::fmt;
use std::path::Path;

use thiserror::Error;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{FormatTime, UtcTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Error type for logging setup.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to install log subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Event formatter producing `INFO-2026/10/18 09:00:00 server.rs:88: message`.
#[derive(Debug, Clone)]
pub struct LineFormat<T> {
    timer: T,
}

impl<T> LineFormat<T> {
    pub fn with_timer(timer: T) -> Self {
        Self { timer }
    }
}

/// The formatter used by the service, timestamps in UTC.
pub fn line_format() -> LineFormat<impl FormatTime + Clone> {
    LineFormat::with_timer(UtcTime::new(time::macros::format_description!(
        "[year]/[month]/[day] [hour]:[minute]:[second]"
    )))
}

impl<S, N, T> FormatEvent<S, N> for LineFormat<T>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    T: FormatTime,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        write!(writer, "{}-", meta.level())?;
        self.timer.format_time(&mut writer)?;

        let file = meta
            .file()
            .and_then(|f| Path::new(f).file_name())
            .and_then(|f| f.to_str())
            .unwrap_or("???");
        match meta.line() {
            Some(line) => write!(writer, " {}:{}: ", file, line)?,
            None => write!(writer, " {}: ", file)?,
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Build a subscriber that writes formatted lines to `writer`.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .event_format(line_format())
            .with_writer(writer),
    )
}

/// Filter from `RUST_LOG`, falling back to the configured directive.
pub fn filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
}

/// Install the stdout subscriber as the process-wide default.
pub fn init(config: &ObservabilityConfig) -> Result<(), LoggingError> {
    subscriber(filter(config), std::io::stdout).try_init()?;
    Ok(())
}

/// In-memory log sink, for checking log output without touching stdout.
pub mod capture {
    use std::io;
    use std::sync::{Arc, Mutex, MutexGuard};

    /// Shared buffer of formatted log lines. Clones write to the same buffer.
    #[derive(Debug, Clone, Default)]
    pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn buffer(&self) -> MutexGuard<'_, Vec<u8>> {
            self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }

        pub fn lines(&self) -> Vec<String> {
            String::from_utf8_lossy(&self.buffer())
                .lines()
                .map(str::to_owned)
                .collect()
        }

        /// Whether any captured line contains `needle`.
        pub fn contains(&self, needle: &str) -> bool {
            self.lines().iter().any(|line| line.contains(needle))
        }

        /// A `MakeWriter` appending to this buffer.
        pub fn make_writer(&self) -> impl Fn() -> CapturedLogs + Send + Sync + 'static {
            let logs = self.clone();
            move || logs.clone()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buffer().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::capture::CapturedLogs;
    use super::*;

    #[test]
    fn lines_are_prefixed_and_tagged() {
        let logs = CapturedLogs::default();
        let sub = subscriber(EnvFilter::new("info"), logs.make_writer());

        tracing::subscriber::with_default(sub, || {
            tracing::info!("starting {}", "DEMO APP V1");
            tracing::error!("Server forced to shutdown");
            tracing::debug!("filtered out");
        });

        let lines = logs.lines();
        assert_eq!(lines.len(), 2);

        assert!(lines[0].starts_with("INFO-"), "{}", lines[0]);
        assert!(lines[0].contains(" logging.rs:"), "{}", lines[0]);
        assert!(lines[0].ends_with(": starting DEMO APP V1"), "{}", lines[0]);

        assert!(lines[1].starts_with("ERROR-"), "{}", lines[1]);
        assert!(lines[1].ends_with(": Server forced to shutdown"), "{}", lines[1]);
    }

    #[test]
    fn timestamp_follows_prefix() {
        let logs = CapturedLogs::default();
        let sub = subscriber(EnvFilter::new("info"), logs.make_writer());

        tracing::subscriber::with_default(sub, || tracing::info!("tick"));

        let line = &logs.lines()[0];
        // INFO-YYYY/MM/DD HH:MM:SS
        let stamp = &line["INFO-".len().."INFO-".len() + 19];
        assert_eq!(&stamp[4..5], "/");
        assert_eq!(&stamp[7..8], "/");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[13..14], ":");
        assert!(stamp[..4].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn structured_fields_follow_message() {
        let logs = CapturedLogs::default();
        let sub = subscriber(EnvFilter::new("info"), logs.make_writer());

        tracing::subscriber::with_default(sub, || {
            tracing::info!(active = 2, "draining connections");
        });

        assert!(logs.lines()[0].ends_with(": draining connections active=2"));
    }

    #[test]
    fn output_has_no_terminal_escapes() {
        let logs = CapturedLogs::default();
        let sub = subscriber(EnvFilter::new("info"), logs.make_writer());

        tracing::subscriber::with_default(sub, || {
            tracing::info!(signal = "SIGINT", "Shutdown signal received");
            tracing::warn!(error = "connection reset", "Accept failed");
        });

        let lines = logs.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| !l.contains('\x1b')), "{:?}", lines);
        assert!(lines[0].ends_with(r#": Shutdown signal received signal="SIGINT""#));
        assert!(lines[1].starts_with("WARN-"));
        assert!(lines[1].ends_with(r#": Accept failed error="connection reset""#));
    }
}
