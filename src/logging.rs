//! `tracing` setup. Events go to the browser console, or to stderr off wasm.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const DEFAULT_DIRECTIVE: &str = "econome=info";

/// Collects one formatted event and hands it to the console on drop.
struct ConsoleWriter {
    buf: Vec<u8>,
    level: Level,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            buf: Vec::with_capacity(256),
            level,
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buf);
        for line in text.lines() {
            emit(self.level, line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        _ => console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

#[derive(Clone, Copy, Default)]
struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

fn env_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init(directive: Option<&str>) -> bool {
    let subscriber = tracing_subscriber::registry().with(env_filter(directive)).with(
        tracing_subscriber::fmt::layer()
            .with_writer(ConsoleMakeWriter)
            .with_target(true)
            .without_time(),
    );

    if subscriber.try_init().is_err() {
        return false;
    }
    tracing::debug!("tracing initialized");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_directive_falls_back() {
        // Must not panic on garbage input.
        let _ = env_filter(Some("econome=[[["));
        let _ = env_filter(None);
    }

    #[test]
    fn second_init_is_noop() {
        init(Some("econome=debug"));
        assert!(!init(None));
    }

    #[test]
    fn writer_buffers_until_drop() {
        let mut w = ConsoleWriter::new(Level::WARN);
        w.write_all(b"first line\nsecond").expect("buffer write");
        assert_eq!(w.buf.len(), 17);
        w.flush().expect("flush");
        assert_eq!(w.buf.len(), 17, "flush does not emit");
    }
}
