use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FILE: &str = "moodify.log";

fn log_dir() -> PathBuf {
    ProjectDirs::from("", "", "moodify")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// The terminal owns stdout, so logs go to a file under the platform
/// data directory. Filtered by `MOODIFY_LOG` or `RUST_LOG`.
pub fn initialize_logging() -> color_eyre::Result<()> {
    let dir = log_dir();
    fs::create_dir_all(&dir)?;
    let log_file = fs::File::create(dir.join(LOG_FILE))?;

    let filter = EnvFilter::try_from_env("MOODIFY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
