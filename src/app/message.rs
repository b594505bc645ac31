//! Application messages

use std::path::PathBuf;

use iced::time::Instant;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// A new frame is about to be drawn
    Tick(Instant),
    /// Settings were written to the given file
    SettingsSaved(PathBuf),
    /// Reading or writing settings failed
    SettingsError(String),
}
