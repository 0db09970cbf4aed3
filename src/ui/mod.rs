//! UI module
//!
//! Contains the dashboard layout and the widgets it hosts.

pub mod components;
pub mod layout;

pub use components::*;
pub use layout::{render_dashboard_layout, DASHBOARD_TITLE};
