//
// logging.rs
// dicom2json
//
// Configures a stderr tracing subscriber whose lines follow the LEVEL:target:message shape consumed by the backend.
//
// Thales Matheus Mendonça Santos - August 2026

use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Target used for every log line this tool emits, so callers can grep a stable prefix.
pub const LOG_TARGET: &str = "dicom2json";

/// Renders events as `INFO:dicom2json:message` with no timestamps or ANSI noise.
struct PlainLineFormat;

impl<S, N> FormatEvent<S, N> for PlainLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(writer, "{}:{}:", meta.level(), meta.target())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber. Must run before the first log call; panics if called twice.
pub fn init() {
    tracing_subscriber::fmt()
        .event_format(PlainLineFormat)
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .init();
}
