use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,hyper=warn,reqwest=warn,tower_http=warn";

/// Sets up the global subscriber: colored stdout plus a plain-text
/// `logs/backend.log` next to the binary. `RUST_LOG` overrides the filter.
pub fn initialize() -> anyhow::Result<()> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .map_err(|e| anyhow::anyhow!("Cannot create log directory {}: {}", dir.display(), e))?;

    let path = dir.join("backend.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| anyhow::anyhow!("Cannot open log file {}: {}", path.display(), e))?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());

    tracing_subscriber::registry()
        .with(EnvFilter::new(&filter))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(std::sync::Arc::new(file)),
        )
        .init();

    tracing::info!(filter = %filter, "writing logs to {}", path.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => dir.join("logs"),
            None => PathBuf::from("target/logs"),
        },
        Err(_) => PathBuf::from("target/logs"),
    }
}
