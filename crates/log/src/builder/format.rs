//! Format layer creation macros and the event timer

use std::fmt;

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};

/// System-clock timestamps that can be switched off without changing the
/// layer type
#[derive(Debug, Clone, Copy)]
pub(crate) struct Timer {
    enabled: bool,
}

impl Timer {
    pub(crate) const fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl FormatTime for Timer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        if self.enabled {
            SystemTime.format_time(w)
        } else {
            Ok(())
        }
    }
}

/// Text format layer with the common display options
macro_rules! create_fmt_layer {
    ($format:ident, $display:expr, $writer:expr) => {{
        tracing_subscriber::fmt::layer()
            .$format()
            .with_writer($writer)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_timer($crate::builder::format::Timer::new($display.time))
    }};
}

/// JSON layer, one flattened object per event
macro_rules! create_json_layer {
    ($display:expr, $writer:expr) => {{
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer($writer)
            .with_current_span(true)
            .with_span_list(false)
            .flatten_event(true)
            .with_ansi(false)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_timer($crate::builder::format::Timer::new($display.time))
    }};
}
