use anyhow::{Context, Result};

use logdog::app::App;
use logdog::config::{self, Config};
use logdog::logging;

fn main() -> Result<()> {
    // Ensure config directory exists (creates logs dir too)
    config::ensure_directories()?;

    // Initialize file logging BEFORE any tracing calls
    let log_file_info = logging::init_file_logging(&config::logs_dir())?;

    // Clean up old diagnostic logs (7-day retention)
    if let Ok(count) = logging::cleanup_old_logs(&config::logs_dir()) {
        if count > 0 {
            tracing::info!("Cleaned up {} old log files", count);
        }
    }

    tracing::info!("Logging to: {}", log_file_info.path.display());

    let config = Config::load();
    let project_path = std::env::current_dir().context("Failed to read working directory")?;

    let mut app = App::new(&project_path, &config)?;
    app.run()
}
