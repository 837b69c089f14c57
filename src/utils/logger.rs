use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs a global `tracing` subscriber for the library's diagnostics.
///
/// Filtering follows `RUST_LOG`. With `log_dir` set, output goes to a
/// timestamped file in that directory (created if missing), otherwise to
/// stderr. Fails if a global subscriber is already installed.
pub fn init_logger(log_dir: Option<&str>) -> Result<()> {
    let builder = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    match log_dir {
        Some(dir) => {
            if !Path::new(dir).exists() {
                fs::create_dir_all(dir)?;
            }

            let timestamp = Local::now().format("%Y%m%d_%H%M%S");
            let log_file = format!("{}/social_parse_{}.log", dir, timestamp);

            let subscriber = builder
                .with_ansi(false)
                .with_writer(Mutex::new(fs::File::create(log_file)?))
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        None => {
            let subscriber = builder.with_writer(std::io::stderr).finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    info!("Logger initialized");
    Ok(())
}
