//! Main application module

pub mod helpers;
mod message;
mod view;

use iced::time::Instant;
use iced::{Task, Theme};

use crate::features::blob::Bubble;
use crate::features::{BubbleSettings, BubbleVariant};
pub use message::Message;

/// Application state
pub struct App {
    /// Visual parameters
    pub settings: BubbleSettings,
    /// Generator built from `settings`
    pub bubble: Bubble,
    /// Animation clock origin
    pub started: Instant,
    /// Instant of the latest frame
    pub now: Instant,
}

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Settings (defaults on first run)
        let first_run = !BubbleSettings::exists();
        let settings = BubbleSettings::load();
        let bubble = settings.to_bubble();
        tracing::info!(
            variant = %settings.variant,
            style = %settings.style,
            "Starting bubble"
        );

        let now = Instant::now();
        let app = Self {
            settings,
            bubble,
            started: now,
            now,
        };

        // 2. Write defaults out so they can be edited
        let init_task = if first_run {
            Task::perform(helpers::save_settings(app.settings.clone()), |result| {
                match result {
                    Ok(path) => Message::SettingsSaved(path),
                    Err(e) => Message::SettingsError(format!("{:#}", e)),
                }
            })
        } else {
            Task::none()
        };

        (app, init_task)
    }

    /// Window title
    pub fn title(&self) -> String {
        format!("Biobubble - {}", self.settings.variant)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Seconds since the animation started
    pub fn elapsed(&self) -> f64 {
        self.now.saturating_duration_since(self.started).as_secs_f64()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                self.now = now;
                Task::none()
            }
            Message::SettingsSaved(path) => {
                tracing::info!("Wrote default settings to {}", path.display());
                Task::none()
            }
            Message::SettingsError(e) => {
                tracing::warn!("Settings error: {}", e);
                Task::none()
            }
        }
    }

    /// Frame subscription driving the animation clock
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if subscription_logic::needs_frames(self.settings.power_saving) {
            iced::window::frames().map(Message::Tick)
        } else {
            iced::Subscription::none()
        }
    }

    /// Whether the age variant (filled layers, particles) is active
    pub fn is_age_variant(&self) -> bool {
        self.settings.variant == BubbleVariant::Age
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_frames(power_saving: bool) -> bool {
        !power_saving
    }
}
