use std::io;

use log::{LevelFilter, SetLoggerError};

/// Diagnostics go to stderr so stdout only carries the report.
pub fn init_logging(level: LevelFilter) -> Result<(), SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
}
