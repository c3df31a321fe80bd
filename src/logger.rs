use log::LevelFilter;

lazy_static::lazy_static! {
    pub static ref LOGGER: Logger = Logger {};
}

/// Stdout logger stamping each record with the local wall-clock time.
pub struct Logger;

impl Logger {
    fn format(record: &log::Record) -> String {
        format!(
            "[{}] [{} > {:?}] {}",
            chrono::Local::now().format("%H:%M:%S"),
            record.metadata().target(),
            record.level(),
            record.args()
        )
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn flush(&self) {}

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            println!("{}", Self::format(record));
        }
    }
}

/// Installs [`LOGGER`] as the global logger. Calling it again only adjusts
/// the level filter.
pub fn init(level: LevelFilter) {
    if log::set_logger(&*LOGGER).is_err() {
        debug!("Logger already installed; updating level filter.");
    }

    log::set_max_level(level);
}

/// Parses a level name from settings, falling back to `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or_else(|_| {
        warn!("Unknown log level '{}', using info.", name);
        LevelFilter::Info
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names_case_insensitively() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }

    #[test]
    fn formatted_record_carries_target_and_level() {
        let line = Logger::format(
            &log::Record::builder()
                .args(format_args!("hello"))
                .level(log::Level::Warn)
                .target("gl_tutorials::test")
                .build(),
        );
        assert!(line.ends_with("[gl_tutorials::test > Warn] hello"));
    }
}
