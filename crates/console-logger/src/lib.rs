//! Console Logger
//!
//! `tracing` subscriber for wasm targets. Each formatted event is forwarded
//! to the browser console method matching its level.

use std::fmt;
use std::io::{self, Write};

use chrono::Utc;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

/// Browser console method an event is written to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
    Log,
}

impl From<&Level> for ConsoleMethod {
    fn from(level: &Level) -> Self {
        match *level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Info,
            Level::DEBUG => ConsoleMethod::Debug,
            Level::TRACE => ConsoleMethod::Log,
        }
    }
}

/// Where a finished line goes
pub type Sink = fn(ConsoleMethod, &str);

/// Write a line to the browser console
pub fn console_sink(method: ConsoleMethod, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match method {
        ConsoleMethod::Error => web_sys::console::error_1(&value),
        ConsoleMethod::Warn => web_sys::console::warn_1(&value),
        ConsoleMethod::Info => web_sys::console::info_1(&value),
        ConsoleMethod::Debug => web_sys::console::debug_1(&value),
        ConsoleMethod::Log => web_sys::console::log_1(&value),
    }
}

/// Buffers one formatted event and emits it on drop
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
    sink: Sink,
}

impl ConsoleWriter {
    pub fn new(method: ConsoleMethod, sink: Sink) -> Self {
        Self {
            method,
            buf: Vec::new(),
            sink,
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end_matches(&['\n', '\r'][..]);
        if !line.is_empty() {
            (self.sink)(self.method, line);
        }
    }
}

/// `MakeWriter` choosing the console method per event level
#[derive(Clone, Copy)]
pub struct ConsoleMakeWriter {
    sink: Sink,
}

impl ConsoleMakeWriter {
    pub fn new(sink: Sink) -> Self {
        Self { sink }
    }
}

impl Default for ConsoleMakeWriter {
    fn default() -> Self {
        Self::new(console_sink)
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log, self.sink)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::from(meta.level()), self.sink)
    }
}

/// Wall-clock timestamps via `chrono` (std `SystemTime` is unavailable on wasm32)
#[derive(Clone, Copy, Default)]
pub struct ChronoTimer;

impl FormatTime for ChronoTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"))
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(max_level: Level) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(false)
        .with_timer(ChronoTimer)
        .with_writer(ConsoleMakeWriter::default())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static LINES: RefCell<Vec<(ConsoleMethod, String)>> = RefCell::new(Vec::new());
    }

    fn capture(method: ConsoleMethod, line: &str) {
        LINES.with(|lines| lines.borrow_mut().push((method, line.to_string())));
    }

    fn take_lines() -> Vec<(ConsoleMethod, String)> {
        LINES.with(|lines| lines.borrow_mut().drain(..).collect())
    }

    #[test]
    fn test_level_to_console_method() {
        assert_eq!(ConsoleMethod::from(&Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::from(&Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::from(&Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::from(&Level::DEBUG), ConsoleMethod::Debug);
        assert_eq!(ConsoleMethod::from(&Level::TRACE), ConsoleMethod::Log);
    }

    #[test]
    fn test_writer_emits_one_line_on_drop() {
        take_lines();
        {
            let mut writer = ConsoleWriter::new(ConsoleMethod::Warn, capture);
            write!(writer, "tag ").unwrap();
            write!(writer, "request failed\n").unwrap();
        }
        assert_eq!(
            take_lines(),
            vec![(ConsoleMethod::Warn, "tag request failed".to_string())]
        );
    }

    #[test]
    fn test_empty_writer_emits_nothing() {
        take_lines();
        drop(ConsoleWriter::new(ConsoleMethod::Info, capture));
        assert!(take_lines().is_empty());
    }

    #[test]
    fn test_subscriber_routes_by_level() {
        take_lines();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .without_time()
            .with_writer(ConsoleMakeWriter::new(capture))
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("tags failed to load");
            tracing::debug!("filtered out");
        });

        let lines = take_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, ConsoleMethod::Warn);
        assert!(lines[0].1.contains("tags failed to load"));
    }
}
