//! Settings page state.
//!
//! Local-only form state: nothing here validates, persists, or registers
//! anything. The page's save action belongs to the absent native side.

use limbo_core::DEFAULT_HOTKEY;

/// Hotkey combinations offered as one-click suggestion chips.
pub const HOTKEY_SUGGESTIONS: &[&str] = &["Alt+Space", "Ctrl+Shift+V", "Mouse4", "F9"];

/// Form state for the settings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    /// Currently displayed hotkey
    pub hotkey: String,
    /// True while the picker waits for a key combination
    pub capturing_hotkey: bool,
    /// Selected input device label
    pub microphone: String,
    pub launch_at_startup: bool,
    pub minimize_to_tray: bool,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            hotkey: DEFAULT_HOTKEY.to_string(),
            capturing_hotkey: false,
            microphone: "Default Microphone".to_string(),
            launch_at_startup: true,
            minimize_to_tray: true,
        }
    }
}

impl SettingsForm {
    /// Form seeded with the configured hotkey label.
    pub fn with_hotkey(hotkey: impl Into<String>) -> Self {
        Self {
            hotkey: hotkey.into(),
            ..Default::default()
        }
    }

    /// Arm the picker; the next assignment ends the capture.
    pub fn begin_hotkey_capture(&mut self) {
        self.capturing_hotkey = true;
    }

    /// Set a new hotkey, ending any capture in progress.
    pub fn assign_hotkey(&mut self, hotkey: impl Into<String>) {
        self.hotkey = hotkey.into();
        self.capturing_hotkey = false;
    }
}
