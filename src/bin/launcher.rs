//! waopen Launcher - GUI Application
//!
//! Run with: cargo run --bin waopen-launcher

use iced::application;
use tracing_subscriber::EnvFilter;

// Import from the library
use waopen::config::Config;
use waopen::gui::WaOpenApp;

fn main() -> iced::Result {
    // Setup logging
    let level = Config::load()
        .map(|c| c.log_level)
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    application(WaOpenApp::title, WaOpenApp::update, WaOpenApp::view)
        .theme(WaOpenApp::theme)
        .subscription(WaOpenApp::subscription)
        .window_size((720.0, 360.0))
        .run_with(WaOpenApp::new)
}
