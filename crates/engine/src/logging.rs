//! File logging through log4rs.
//!
//! The terminal belongs to the game, so log records only ever go to a file.

use anyhow::{Context, Result};
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config as LogConfig, Root},
    encode::pattern::PatternEncoder,
    Handle,
};

use crate::config::Config;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} {m}{n}";

/// Install the global logger when `config.log_path` is set.
///
/// Returns `None` (and installs nothing) when logging is disabled.
pub fn init_logging(config: &Config) -> Result<Option<Handle>> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(None);
    };

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(path)
        .with_context(|| format!("open log file {path}"))?;

    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(config.log_level))
        .context("build log configuration")?;

    let handle = log4rs::init_config(log_config).context("install logger")?;
    Ok(Some(handle))
}
