//! Structured logging for tasker
//!
//! All logs go to stderr so they never mix with command output on stdout.
//!
//! # Log Format Conventions
//!
//! - `task`: The task being run ("build", "check")
//! - `step`: Position of the step within its task (e.g., "1/2")
//! - `command`: The command line being executed (e.g., "go mod download")
//! - `status`: The result status ("success", "error")
//! - `exit_code`: Exit code of a failed command
//! - `duration_ms`: Elapsed wall time in milliseconds

use std::{fmt as std_fmt, io};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{
    fmt::{self, format::Writer},
    prelude::*,
    EnvFilter,
};

/// Custom formatter that shows "tasker" instead of full module path
struct TaskerFormatter {
    with_ansi: bool,
}

impl<S, N> FormatEvent<S, N> for TaskerFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std_fmt::Result {
        let meta = event.metadata();

        write!(
            writer,
            "{} ",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f")
        )?;

        if self.with_ansi {
            let level_style = match *meta.level() {
                tracing::Level::ERROR => "\x1b[31m",
                tracing::Level::WARN => "\x1b[33m",
                tracing::Level::INFO => "\x1b[32m",
                tracing::Level::DEBUG => "\x1b[34m",
                tracing::Level::TRACE => "\x1b[35m",
            };
            write!(writer, "{}{:5}(tasker)\x1b[0m: ", level_style, meta.level())?;
        } else {
            write!(writer, "{:5}(tasker): ", meta.level())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, colored
    Pretty,
    /// Same layout without colors (CI)
    Compact,
    /// JSON lines for log aggregation
    Json,
}

impl LogFormat {
    /// Parse from environment variable (TASKER_LOG_FORMAT)
    pub fn from_env() -> Self {
        let requested = std::env::var("TASKER_LOG_FORMAT").unwrap_or_default();
        Self::parse(&requested, std::env::var("CI").is_ok())
    }

    fn parse(value: &str, in_ci: bool) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            "pretty" => Self::Pretty,
            _ if in_ci => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Initialize the global tracing subscriber
///
/// # Environment Variables
///
/// - `RUST_LOG`: Set log level (e.g., "debug", "info", "warn"), default "info"
/// - `TASKER_LOG_FORMAT`: Set format ("pretty", "compact", "json")
/// - `CI`: If set, defaults to compact format
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match LogFormat::from_env() {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .event_format(TaskerFormatter { with_ansi: true })
                        .with_writer(io::stderr),
                )
                .init();
        }
        LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .event_format(TaskerFormatter { with_ansi: false })
                        .with_writer(io::stderr),
                )
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_file(false)
                        .with_line_number(false)
                        .with_ansi(false)
                        .with_writer(io::stderr)
                        .json(),
                )
                .init();
        }
    }
}
