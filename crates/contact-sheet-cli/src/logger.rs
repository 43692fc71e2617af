use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};

/// Writes timestamped log lines to stderr
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    /// Level from the number of `-v` flags
    pub fn from_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        Self { level }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
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
            let tag = match record.level() {
                Level::Error => "ERROR",
                Level::Warn => "WARN ",
                Level::Info => "INFO ",
                Level::Debug => "DEBUG",
                Level::Trace => "TRACE",
            };
            eprintln!(
                "{} {} [{}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                tag,
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(StderrLogger::from_verbosity(0).level, LevelFilter::Warn);
        assert_eq!(StderrLogger::from_verbosity(1).level, LevelFilter::Info);
        assert_eq!(StderrLogger::from_verbosity(2).level, LevelFilter::Debug);
        assert_eq!(StderrLogger::from_verbosity(9).level, LevelFilter::Trace);
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = StderrLogger::from_verbosity(1);
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }
}
