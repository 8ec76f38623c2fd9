// Re-export from sub-crates
pub use limbo_core::{
    APP_NAME, APP_NAME_PRETTY, Config, ConfigManager, DEFAULT_HOTKEY, DEFAULT_LOG_LEVEL,
    DEMO_TRANSCRIPT, DictationStatus, ShellCommand, ShellState,
};
pub use limbo_session::{DictationSession, SessionError, SessionHandle};
pub use limbo_ui::{
    DashboardStats, DashboardView, HearingFrame, HearingIndicator, OverlayFrame, SettingsForm,
    StatusIcon,
};

// App-specific modules
pub mod host;
pub mod render;

// Version from this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
