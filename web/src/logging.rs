//! Routes `tracing` output to the browser console.
//!
//! `tracing_subscriber::fmt` formats each event into a fresh [`ConsoleWriter`];
//! the writer hands the finished line to `console.log` when flushed or
//! dropped. Timestamps are off because `SystemTime` is unavailable on wasm32.

use std::io;
use tracing_subscriber::filter::LevelFilter;
use wasm_bindgen::JsValue;

#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn emit(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
        self.buf.clear();
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

/// Install the global subscriber. Safe to call twice; the second call only warns.
pub fn init(level: &str) {
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .with_max_level(parse_level(level))
        .without_time()
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "[flightsearch][warn] logging already initialised: {e}"
        )));
    }
}

/// Level from config; unknown names fall back to `info`.
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::INFO)
}
