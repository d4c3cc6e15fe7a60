use colored::Colorize;
use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    fmt::{FmtContext, FormatEvent, FormatFields, format},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

pub struct EventLoggerFormatter;

impl<S, N> FormatEvent<S, N> for EventLoggerFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        if std::env::args().any(|arg| arg == "--quiet") {
            return Ok(());
        }

        let metadata = event.metadata();

        if metadata.name() == "SKIP_FORMAT" || metadata.target() == "SKIP_FORMAT" {
            ctx.field_format().format_fields(writer.by_ref(), event)?;
            return writeln!(writer);
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string().dimmed();
        let label = event_label(metadata.name(), metadata.target());

        write!(writer, "{}", timestamp)?;
        if !label.is_empty() {
            let label = label.to_ascii_lowercase();
            let label = match *metadata.level() {
                tracing::Level::ERROR => label.bold().red(),
                tracing::Level::WARN => label.bold().yellow(),
                _ => label.bold().bright_yellow(),
            };
            write!(writer, " {}", label)?;
        }
        write!(writer, " ")?;

        // Write fields on the event
        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Events named explicitly (`info!(name: "server", ...)`) are labelled with their name. Unnamed events and records bridged from `log` get their target instead.
fn event_label<'a>(name: &'a str, target: &'a str) -> &'a str {
    if name.starts_with("event ") || name == "log event" {
        target
    } else {
        name
    }
}

/// Installs the server logger. `RUST_LOG` overrides the default filter.
///
/// Records emitted through `log` (e.g. by the build) are forwarded to the same output.
pub fn init_logging() {
    let tracing_formatter = tracing_subscriber::fmt::layer().event_format(EventLoggerFormatter);

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("warn,{}=info,tower_http=info", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_formatter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_events_use_their_name() {
        assert_eq!(event_label("server", "placard_server::live"), "server");
        assert_eq!(event_label("", "placard_server::live"), "");
    }

    #[test]
    fn unnamed_events_use_their_target() {
        assert_eq!(
            event_label("event src/live.rs:42", "placard_server::live"),
            "placard_server::live"
        );
        assert_eq!(event_label("log event", "pages"), "pages");
    }
}
