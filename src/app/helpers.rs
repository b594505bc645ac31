//! Async helper functions for settings persistence

use std::path::PathBuf;

use anyhow::Context;

use crate::features::BubbleSettings;

/// Write settings to the default location and return the file path
pub async fn save_settings(settings: BubbleSettings) -> anyhow::Result<PathBuf> {
    let path = BubbleSettings::file_path().context("Could not determine config directory")?;

    tokio::task::spawn_blocking(move || settings.save())
        .await
        .context("Settings writer task failed")?
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
