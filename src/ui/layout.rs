//! Main dashboard layout
//!
//! Handles the page container, the heading, and the wrapper container
//! that hosts the storm report widget.

use egui::{Color32, Margin, RichText, Rounding};

use crate::config::DashboardConfig;
use crate::ui::components::DashboardWidget;

/// Heading shown at the top of the page.
pub const DASHBOARD_TITLE: &str = "Weather Dashboard";

/// Width cap for the report column; it stays centered on wide windows.
const WRAPPER_MAX_WIDTH: f32 = 880.0;

/// Render the dashboard layout
/// Includes the page container, one heading, and the wrapper container
/// holding exactly one widget.
///
/// The tree is identical on every invocation: the layout keeps no state,
/// reads no clock, and forwards `config` to the widget without touching
/// any field.
pub fn render_dashboard_layout(
    ctx: &egui::Context,
    config: &DashboardConfig,
    report: &mut dyn DashboardWidget,
) {
    // Light page background with generous padding
    let mut page = egui::Frame::none();
    page.fill = Color32::from_gray(243);
    page.inner_margin = Margin::same(32.0);

    egui::CentralPanel::default().frame(page).show(ctx, |ui| {
        ui.heading(
            RichText::new(DASHBOARD_TITLE)
                .size(26.0)
                .strong()
                .color(Color32::from_gray(25)),
        );
        ui.add_space(24.0);

        // Dark, rounded wrapper centered under the heading
        ui.vertical_centered(|ui| {
            ui.set_max_width(WRAPPER_MAX_WIDTH);

            let mut wrapper = egui::Frame::none();
            wrapper.fill = Color32::from_gray(30);
            wrapper.rounding = Rounding::same(8.0);
            wrapper.inner_margin = Margin::same(24.0);
            wrapper.shadow = ui.visuals().window_shadow;

            wrapper.show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                report.render(ui, config);
            });
        });
    });
}
