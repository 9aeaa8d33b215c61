use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with("liftsync")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}",
                entry(
                    &Local::now().format("%b %d %H:%M:%S").to_string(),
                    record.level(),
                    &record.args().to_string()
                )
            );
        }
    }

    fn flush(&self) {}
}

fn entry(time: &str, level: Level, message: &str) -> String {
    format!("{time} {level:<5} {message}")
}

#[cfg(test)]
mod tests {
    use log::Log;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::info(Level::Info, "Apr 02 18:30:00 INFO  found 12 rows")]
    #[case::error(Level::Error, "Apr 02 18:30:00 ERROR found 12 rows")]
    fn test_entry(#[case] level: Level, #[case] expected: &str) {
        assert_eq!(entry("Apr 02 18:30:00", level, "found 12 rows"), expected);
    }

    #[test]
    fn test_enabled_only_for_own_crates() {
        log::set_max_level(LevelFilter::Info);

        let own = Metadata::builder()
            .level(Level::Info)
            .target("liftsync_domain::service")
            .build();
        let foreign = Metadata::builder()
            .level(Level::Info)
            .target("reqwest::connect")
            .build();
        let verbose = Metadata::builder()
            .level(Level::Debug)
            .target("liftsync_storage::rest")
            .build();

        assert!(Logger.enabled(&own));
        assert!(!Logger.enabled(&foreign));
        assert!(!Logger.enabled(&verbose));
    }
}
