//! Minimal stderr logger.
//!
//! Install once at startup with `init_with_level`; library code only ever
//! uses the `log` macros and never installs a logger itself. Records from
//! other crates are muted below `Warn` so a verbose run shows the engine's
//! own trace, not the codec stack's.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

struct StderrLogger {
    level: LevelFilter,
    started: Instant,
}

impl StderrLogger {
    fn wants(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        metadata.level() <= Level::Warn
            || metadata.target().starts_with("symcode")
            || self.level == LevelFilter::Trace
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.wants(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.wants(record.metadata()) {
            return;
        }
        let ms = self.started.elapsed().as_millis();
        let _ = writeln!(
            std::io::stderr(),
            "{ms:>6}ms {:<5} {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger with the provided level filter.
///
/// Calling this more than once is a no-op after the first successful
/// initialization.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| StderrLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Install a `tracing` subscriber instead of the plain logger. Honours
/// `RUST_LOG`; without it the engine logs at debug, everything else at info.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("symcode=debug,info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if json {
        let _ = builder.json().flatten_event(true).finish().try_init();
    } else {
        let _ = builder
            .compact()
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init();
    }
}
