//! Dashboard page: the static usage summary shown in the main window.

use limbo_core::APP_NAME_PRETTY;

/// Feature bullets listed under the stats.
pub const FEATURES: &[&str] = &[
    "100% Free & Offline",
    "No API Keys Required",
    "Privacy-First (Audio never leaves your PC)",
    "Works in Any Application",
];

/// Usage counters shown on the dashboard. Mock zeros until a capture
/// pipeline exists to feed them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub recordings_today: u32,
    pub total_words: u64,
}

/// A single stat card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub value: String,
    pub caption: &'static str,
}

/// View model for the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub title: &'static str,
    pub tagline: &'static str,
    pub status_headline: &'static str,
    pub status_hint: String,
    pub cards: Vec<StatCard>,
    pub features: &'static [&'static str],
}

impl DashboardView {
    pub fn project(stats: &DashboardStats, hotkey: &str) -> Self {
        Self {
            title: APP_NAME_PRETTY,
            tagline: "Universal Voice Dictation",
            status_headline: "Ready to Dictate",
            status_hint: format!("Press {hotkey} anywhere to start recording"),
            cards: vec![
                StatCard {
                    value: format_count(u64::from(stats.recordings_today)),
                    caption: "Recordings Today",
                },
                StatCard {
                    value: format_count(stats.total_words),
                    caption: "Words Transcribed",
                },
            ],
            features: FEATURES,
        }
    }
}

/// Format a counter with thousands separators.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
