// src/logging.rs

use crate::config::Config;
use crate::errors::BubbleChatResult;
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};

/// Starts the file logger. The terminal belongs to the UI, so nothing is
/// duplicated to stdout or stderr.
///
/// The returned handle must be kept alive until the program exits.
pub fn init_logging(config: &Config) -> BubbleChatResult<LoggerHandle> {
    let handle = Logger::try_with_str(&config.log_level)?
        .log_to_file(
            FileSpec::default()
                .directory(config.resolved_log_dir())
                .basename("bubblechat")
                .suppress_timestamp(),
        )
        .append()
        .write_mode(WriteMode::BufferAndFlush)
        .format(flexi_logger::detailed_format)
        .start()?;

    log::info!("logging started at level {}", config.log_level);
    Ok(handle)
}
