//! Plain-text event formatter that tags each line with the enclosing request span.
//!
//! `tower-http`'s `TraceLayer` opens one span per HTTP request; prefixing its id lets
//! interleaved request logs be grouped. Events outside any span are printed untagged.

use std::fmt;

use tracing_core::Subscriber;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

/// Output: `TIMESTAMP [root#ID] LEVEL target: fields`, where `root` is the outermost span
/// name and `ID` its numeric id.
pub struct SpanTaggedLine {
    timer: SystemTime,
    with_target: bool,
}

impl Default for SpanTaggedLine {
    fn default() -> Self {
        Self {
            timer: SystemTime,
            with_target: true,
        }
    }
}

impl SpanTaggedLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, on: bool) -> Self {
        self.with_target = on;
        self
    }
}

impl<S, N> FormatEvent<S, N> for SpanTaggedLine
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing_core::Event<'_>,
    ) -> fmt::Result {
        self.timer.format_time(&mut writer)?;
        if let Some(span) = ctx.parent_span() {
            let root = span.scope().from_root().next().unwrap_or(span);
            write!(writer, " [{}#{}]", root.name(), root.id().into_u64())?;
        }
        write!(writer, " {}", event.metadata().level())?;
        if self.with_target {
            write!(writer, " {}:", event.metadata().target())?;
        }
        write!(writer, " ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
