//! Biobubble - animated organic "age" bubble
//! Built with iced; the blob outline is re-sampled from the frame clock

use tracing_subscriber::EnvFilter;

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging (RUST_LOG overrides the default filter)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("biobubble=info")),
        )
        .init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size((400.0, 400.0))
        .antialiasing(true)
        .run()
}
