//! Overlay presenter.
//!
//! The floating panel is a pure function of the shell state. Enter/exit
//! animation is a host concern; the only contract here is the visibility
//! rule and the per-status icon and text.

use limbo_core::{DictationStatus, ShellState};

use crate::color::{self, Rgb};

/// Headline shown for a finished cycle that carries no transcript text.
pub const READY_HEADLINE: &str = "Ready to type";

/// Icon shown inside the overlay's status ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    /// Microphone, pulsing while recording
    Mic,
    /// Spinner while the transcription runs
    Spinner,
    /// Check mark once a cycle finished
    Check,
}

/// View model for one overlay frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayFrame {
    /// Whether the panel is on screen at all
    pub visible: bool,
    pub icon: StatusIcon,
    /// Uppercase status badge above the headline
    pub badge: &'static str,
    pub headline: String,
    /// The bottom glow bar animates only while recording
    pub pulsing: bool,
    pub accent: Rgb,
}

impl OverlayFrame {
    /// Project the current shell state into a frame.
    ///
    /// Hidden iff the status is idle and the mic flag is down; everything
    /// else is a straight mapping from the status.
    pub fn project(state: &ShellState) -> Self {
        let (icon, headline) = match &state.status {
            DictationStatus::Recording => (StatusIcon::Mic, "Hearing...".to_string()),
            DictationStatus::Transcribing => (StatusIcon::Spinner, "Thinking...".to_string()),
            status => (
                StatusIcon::Check,
                status.transcript().unwrap_or(READY_HEADLINE).to_string(),
            ),
        };

        Self {
            visible: state.recording || !state.status.is_idle(),
            icon,
            badge: badge(&state.status),
            headline,
            pulsing: state.status == DictationStatus::Recording,
            accent: color::accent(&state.status),
        }
    }
}

fn badge(status: &DictationStatus) -> &'static str {
    match status {
        DictationStatus::Idle => "IDLE",
        DictationStatus::Recording => "RECORDING",
        DictationStatus::Transcribing => "TRANSCRIBING",
        DictationStatus::Success { .. } => "SUCCESS",
        DictationStatus::Error => "ERROR",
    }
}
