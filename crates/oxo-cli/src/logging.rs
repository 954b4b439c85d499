use std::{fs::File, path::PathBuf, sync::Mutex};

use anyhow::Context as _;
use tracing::Level;

#[derive(Debug, Clone)]
pub enum LogTarget {
    Disabled,
    Stderr,
    File(PathBuf),
}

/// Installs the global `tracing` subscriber.
pub fn init(level: Level, target: &LogTarget) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);
    match target {
        LogTarget::Disabled => {}
        LogTarget::Stderr => builder.with_writer(std::io::stderr).init(),
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
    }
    Ok(())
}
