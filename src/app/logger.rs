use env_logger::{Builder, Target};
use log::{Level, LevelFilter, Log, Record};
use std::fmt;
use std::io::Write;

const LOG_TARGET: &str = "volatilewatch";

/// Leveled line logger owned by a single `VolatileWatch` instance.
///
/// Lines are rendered as `<timestamp> [<level>] <message>`. Nothing is
/// installed as the global `log` logger.
pub struct Logger {
    inner: env_logger::Logger,
}

impl Logger {
    /// Logger writing to stdout, at debug when `verbose` is set and info otherwise.
    pub fn new(verbose: bool) -> Self {
        Self::with_target(verbose, Target::Stdout)
    }

    /// Same as [`Logger::new`], writing to `target` instead of stdout.
    pub fn with_target(verbose: bool, target: Target) -> Self {
        let level = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        let inner = Builder::new()
            .filter_level(level)
            .target(target)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {}",
                    buf.timestamp_millis(),
                    record.level().as_str().to_ascii_lowercase(),
                    record.args()
                )
            })
            .build();

        Self { inner }
    }

    /// Minimum severity that will be written.
    pub fn level(&self) -> LevelFilter {
        self.inner.filter()
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Debug, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Error, args);
    }

    fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        let record = Record::builder()
            .level(level)
            .target(LOG_TARGET)
            .args(args)
            .build();

        if self.inner.enabled(record.metadata()) {
            self.inner.log(&record);
            self.inner.flush();
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .finish()
    }
}
