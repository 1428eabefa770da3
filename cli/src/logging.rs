use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Where log output should go for the current mode.
pub enum LogTarget<'a> {
    /// The terminal belongs to the UI, so only a file is acceptable.
    FileOnly(Option<&'a Path>),
    /// A file if given, stderr otherwise.
    FileOrStderr(Option<&'a Path>),
}

pub fn init(level: &str, target: LogTarget<'_>) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .with_context(|| format!("Invalid log filter '{}'", level))?;

    let path = match target {
        LogTarget::FileOnly(None) => return Ok(()),
        LogTarget::FileOnly(Some(path)) | LogTarget::FileOrStderr(Some(path)) => Some(path),
        LogTarget::FileOrStderr(None) => None,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Could not open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!("Could not install log subscriber: {}", e))?;
        }
        None => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!("Could not install log subscriber: {}", e))?;
        }
    }
    Ok(())
}
