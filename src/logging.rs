//! File logging for the terminal binary.
//!
//! The renderer owns stdout, so log records go to a file through `log4rs`.
//! Without `--log-file` no logger is installed and the `log` macros in the
//! engine compile down to a level check.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Handle,
};

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} {t} {m}{n}";

/// Build a log4rs config with one file appender at `level`.
pub fn file_config(path: &Path, level: LevelFilter) -> Result<Config> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("invalid logging configuration")?;
    Ok(config)
}

/// Install the file logger for the rest of the process.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<Handle> {
    let handle = log4rs::init_config(file_config(path, level)?)
        .context("a logger is already installed")?;
    log::info!("logging to {} at {level}", path.display());
    Ok(handle)
}
