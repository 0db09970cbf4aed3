//! Dashboard widgets
//!
//! Provides the widget contract consumed by the shell and the storm
//! report widget the application mounts.

use egui::{Color32, RichText, Ui};

use crate::config::DashboardConfig;

/// Contract between the dashboard shell and the widget it hosts.
///
/// The shell owns the [`DashboardConfig`] and lends it to the widget on
/// every render pass. Implementors draw themselves into the wrapper
/// container and manage their own data; the shell knows nothing beyond
/// this method. Tests substitute a recording stub.
pub trait DashboardWidget {
    /// Paint the widget for this frame with the forwarded configuration.
    fn render(&mut self, ui: &mut Ui, config: &DashboardConfig);
}

/// Storm report widget.
///
/// Presentational surface for the configured report filters: location,
/// lookback window, and one badge per event category. The credential pair
/// in the configuration authenticates the provider session and is never
/// drawn. Until a report feed is connected the body shows an empty state.
#[derive(Debug, Default)]
pub struct StormReport;

impl StormReport {
    /// Create a new storm report widget.
    pub fn new() -> Self {
        Self
    }
}

impl DashboardWidget for StormReport {
    fn render(&mut self, ui: &mut Ui, config: &DashboardConfig) {
        // Header row: widget title on the left, configured location on the right
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Storm Reports")
                    .strong()
                    .size(18.0)
                    .color(Color32::from_gray(235)),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(&config.default_location)
                        .size(14.0)
                        .color(Color32::from_gray(200)),
                );
            });
        });

        ui.add_space(4.0);

        // Filter row: lookback window plus one badge per event category
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("Last {}", config.default_time_filter))
                    .monospace()
                    .size(12.0)
                    .color(Color32::from_gray(170)),
            );
            ui.add_space(8.0);
            for event_type in &config.default_event_types {
                event_type_badge(ui, event_type);
            }
        });

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        // Empty state until a report feed is connected
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                RichText::new("No storm reports")
                    .italics()
                    .size(14.0)
                    .color(Color32::from_gray(150)),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new("Reports matching the filters above will appear here")
                    .size(12.0)
                    .color(Color32::from_gray(120)),
            );
            ui.add_space(40.0);
        });
    }
}

/// Render a colored badge for a storm event category.
///
/// Known categories keep stable colors so the filter row reads at a
/// glance; anything else falls back to gray.
pub fn event_type_badge(ui: &mut Ui, event_type: &str) {
    let color = match event_type {
        "wind" => Color32::from_rgb(90, 170, 255),
        "flood" => Color32::from_rgb(0, 200, 180),
        "hail" => Color32::from_rgb(190, 200, 255),
        "tornado" => Color32::from_rgb(230, 80, 80),
        _ => Color32::GRAY,
    };

    ui.colored_label(color, event_type);
}
