use std::sync::mpsc::Sender;

use log::Level;
use log::LevelFilter;
use log::Log;
use log::Metadata;
use log::Record;
use log::SetLoggerError;

use aisle_core::state::LogEntry;
use aisle_core::state::LogLevel;
use aisle_core::state::LogSource;

use crate::ui::UiEvent;

/// Routes `log` records from any thread into the UI loop, where they land in
/// the diagnostics buffer. Writing to stderr would tear the alternate screen.
struct ChannelLogger {
    tx: Sender<UiEvent>,
    level: LevelFilter,
}

impl Log for ChannelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Dependencies only get through with warnings and errors.
        metadata.target().starts_with("aisle") || metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry::new(
            level_for(record.level()),
            source_for(record.target()),
            record.args().to_string(),
        )
        .with_context(record.target());
        let _ = self.tx.send(UiEvent::Log(entry));
    }

    fn flush(&self) {}
}

fn level_for(level: Level) -> LogLevel {
    match level {
        Level::Error => LogLevel::Error,
        Level::Warn => LogLevel::Warn,
        Level::Info => LogLevel::Info,
        Level::Debug | Level::Trace => LogLevel::Debug,
    }
}

fn source_for(target: &str) -> LogSource {
    if target.starts_with("aisle_cli") {
        LogSource::View
    } else if target.starts_with("aisle_core") {
        LogSource::App
    } else {
        LogSource::Client
    }
}

pub fn install(tx: Sender<UiEvent>, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ChannelLogger { tx, level }))?;
    log::set_max_level(level);
    Ok(())
}
