//! Weather Dashboard
//!
//! Native desktop shell that mounts the storm report widget with the
//! configuration resolved at process start.

use eframe::egui;
use tracing::info;

use weather_dashboard::app::WeatherDashboardApp;
use weather_dashboard::config::DashboardConfig;
use weather_dashboard::ui::{StormReport, DASHBOARD_TITLE};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = DashboardConfig::from_env()?;
    info!("Configuration loaded: {:?}", config);

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(DASHBOARD_TITLE)
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        DASHBOARD_TITLE,
        options,
        Box::new(move |_cc| {
            Box::new(WeatherDashboardApp::new(
                config,
                Box::new(StormReport::new()),
            ))
        }),
    )
    .map_err(|e| anyhow::anyhow!("window host failed: {e}"))?;

    info!("Window closed, shutting down");
    Ok(())
}
