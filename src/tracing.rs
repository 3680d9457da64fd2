//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

static INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    INIT.call_once(|| {
        let is_test =
            std::env::var("NEXTEST").is_ok() || std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let filter = EnvFilter::from_default_env().add_directive(
            if is_test {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            }
            .into(),
        );

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
            .compact();

        let result = if is_test {
            builder.with_test_writer().try_init()
        } else {
            builder.with_writer(std::io::stderr).try_init()
        };

        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}

/// Initialize tracing to the browser console. Safe to call multiple times.
#[cfg(target_arch = "wasm32")]
pub fn init() {
    use tracing_subscriber::util::SubscriberInitExt;

    INIT.call_once(|| {
        let result = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("info"))
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
            .without_time()
            .compact()
            .with_writer(console::Console)
            .finish()
            .try_init();

        if let Err(e) = result {
            web_sys::console::error_1(&format!("Failed to initialize tracing: {}", e).into());
        }
    });
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;

    /// Routes each formatted event to the console method matching its level.
    pub(super) struct Console;

    pub(super) struct ConsoleWriter {
        level: Level,
        buf: Vec<u8>,
    }

    impl<'a> MakeWriter<'a> for Console {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> ConsoleWriter {
            ConsoleWriter {
                level: Level::INFO,
                buf: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> ConsoleWriter {
            ConsoleWriter {
                level: *meta.level(),
                buf: Vec::new(),
            }
        }
    }

    impl io::Write for ConsoleWriter {
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
            let line = String::from_utf8_lossy(&self.buf);
            let line = line.trim_end();
            if line.is_empty() {
                return;
            }
            let line = wasm_bindgen::JsValue::from_str(line);
            if self.level == Level::ERROR {
                web_sys::console::error_1(&line);
            } else if self.level == Level::WARN {
                web_sys::console::warn_1(&line);
            } else {
                web_sys::console::log_1(&line);
            }
        }
    }
}
