use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber, logging to stderr and to a file in the platform log directory.
///
/// The filter is read from `FLEX_LOG`. Keep the returned guard alive for as long as logs should
/// be flushed to the file.
pub fn init_logging() -> Result<WorkerGuard> {
    init_logging_in(&get_log_directory()?)
}

pub fn init_logging_in(directory: &Path) -> Result<WorkerGuard> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let file_appender = tracing_appender::rolling::Builder::new()
        .filename_prefix("flex-projector")
        .filename_suffix("log")
        .rotation(tracing_appender::rolling::Rotation::NEVER)
        .build(directory)
        .context("Failed to build the rolling log file appender.")?;
    let (non_blocking, appender_guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(tracing_subscriber::filter::EnvFilter::from_env("FLEX_LOG"))
        .with(fmt_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;
    Ok(appender_guard)
}

pub fn get_log_directory() -> Result<std::path::PathBuf> {
    if cfg!(target_os = "linux") {
        Ok(dirs::state_dir()
            .context("failed to get linux state dir, please set $XDG_STATE_HOME or $HOME")?
            .join("flex-projector"))
    } else if cfg!(target_os = "macos") {
        Ok(dirs::home_dir()
            .context("failed to get macos home dir")?
            .join("Library/Logs/flex-projector"))
    } else if cfg!(target_os = "windows") {
        Ok(dirs::data_local_dir()
            .context("failed to get windows data dir")?
            .join("flex-projector"))
    } else {
        Err(anyhow!("no log directory known for this platform"))
    }
}
