//! Application shell
//!
//! Owns the immutable dashboard configuration and the single widget the
//! layout mounts. The shell keeps no other state: every frame renders the
//! same tree and hands the same configuration to the same widget.

use eframe::egui;

use crate::config::DashboardConfig;
use crate::ui::{render_dashboard_layout, DashboardWidget};

/// Main application struct
/// Holds the resolved configuration and the injected report widget.
pub struct WeatherDashboardApp {
    /// Configuration forwarded, untouched, to the widget on every frame.
    config: DashboardConfig,
    /// The single widget mounted inside the wrapper container.
    report: Box<dyn DashboardWidget>,
}

impl WeatherDashboardApp {
    /// Create the shell around a resolved configuration and the widget it
    /// should host.
    pub fn new(config: DashboardConfig, report: Box<dyn DashboardWidget>) -> Self {
        Self { config, report }
    }

    /// The configuration owned by the shell.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Render one frame of the dashboard.
    ///
    /// [`eframe::App::update`] delegates here; headless tests drive the
    /// same path through [`egui::Context::run`].
    pub fn show(&mut self, ctx: &egui::Context) {
        render_dashboard_layout(ctx, &self.config, self.report.as_mut());
    }
}

impl eframe::App for WeatherDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::StormReport;

    #[test]
    fn test_app_creation() {
        let config = DashboardConfig::default();
        let app = WeatherDashboardApp::new(config.clone(), Box::new(StormReport::new()));
        assert_eq!(app.config(), &config);
    }

    #[test]
    fn test_shell_renders_without_a_window() {
        let mut app =
            WeatherDashboardApp::new(DashboardConfig::default(), Box::new(StormReport::new()));

        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| app.show(ctx));

        assert!(!output.shapes.is_empty());
    }
}
