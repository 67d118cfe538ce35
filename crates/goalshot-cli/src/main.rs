use std::{path::PathBuf, process::ExitCode, str::FromStr};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod scenario;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match setup_logging(&cli.log_level, &cli.log_file) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Failed to set up logging: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    cli.start()
}

/// Installs the global subscriber: human readable output on stderr, and a JSON log file
/// unless disabled. Records from the `log` crate are forwarded as well.
///
/// The returned guard flushes the log file when dropped.
fn setup_logging(log_level: &str, log_file: &str) -> Result<Option<WorkerGuard>> {
    let log_level = tracing::Level::from_str(log_level)
        .map_err(|_| anyhow::anyhow!("Invalid log level: {}", log_level))?;

    let stderr_layer = fmt::Subscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .without_time()
        .finish();

    let Some(log_file_path) = log_file_path(log_file)? else {
        stderr_layer.try_init()?;
        return Ok(None);
    };

    let (Some(dir), Some(file_name)) = (log_file_path.parent(), log_file_path.file_name()) else {
        bail!("Invalid log file path: {}", log_file_path.display());
    };
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);
    let logfile_layer = fmt::Layer::default()
        .json()
        .with_ansi(false)
        .with_writer(non_blocking_appender);
    stderr_layer.with(logfile_layer).try_init()?;

    tracing::debug!("Saving logs to {}", log_file_path.display());
    Ok(Some(guard))
}

fn log_file_path(log_file: &str) -> Result<Option<PathBuf>> {
    match log_file {
        "none" => Ok(None),
        "auto" => {
            let time = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
            let filename = format!("goalshot-{time}.log");
            let path = dirs::data_local_dir()
                .map(|p| p.join("goalshot").join(&filename))
                .unwrap_or_else(|| PathBuf::from(&filename));
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir).with_context(|| {
                    format!("Failed to create log directory: {}", dir.display())
                })?;
            }
            Ok(Some(path))
        }
        path => {
            let path = PathBuf::from(path);
            if path.exists() {
                bail!("Log file already exists: {}", path.display());
            }
            Ok(Some(path))
        }
    }
}
