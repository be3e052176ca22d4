use anyhow::Result;
use chrono::Local;
use log::{LevelFilter, Metadata, Record};

static LOGGER: CliLogger = CliLogger;

/// Writes log records to stderr so they never mix with command output.
struct CliLogger;

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{}] {} {} - {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Install the logger. Only errors are shown unless `verbose` is set.
pub fn init(verbose: bool) -> Result<()> {
    log::set_logger(&LOGGER).map_err(|e| anyhow::anyhow!("{e}"))?;
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Error
    });
    Ok(())
}
