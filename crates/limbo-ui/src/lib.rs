//! Presentational layer for limbo.
//!
//! Everything here is a pure projection of core state: the overlay panel,
//! the hearing indicator debounce, and the dashboard/settings pages. No
//! component mutates shell state; the session feeds them one way.

mod color;
mod dashboard;
mod hearing;
mod overlay;
mod settings;

pub use color::{Rgb, accent};
pub use dashboard::{DashboardStats, DashboardView, FEATURES, StatCard, format_count};
pub use hearing::{HearingFrame, HearingIndicator};
pub use overlay::{OverlayFrame, READY_HEADLINE, StatusIcon};
pub use settings::{HOTKEY_SUGGESTIONS, SettingsForm};
