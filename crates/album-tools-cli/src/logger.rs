use chrono::Local;
use log::{LevelFilter, Metadata, Record};

/// Minimal stderr logger for the CLI.
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn init(verbose: bool) -> Result<(), log::SetLoggerError> {
        let level = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        log::set_boxed_logger(Box::new(StderrLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{} {:5} [{}] {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}
