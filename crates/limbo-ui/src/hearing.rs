//! The secondary hearing indicator.
//!
//! Runs off the mic flag alone, decoupled from the overlay's transition
//! timers: it shows immediately when recording begins and lingers for a
//! grace period after recording stops so it does not vanish abruptly.
//! The caller supplies the clock and schedules the wakeup from
//! [`HearingIndicator::hide_deadline`], which keeps the debounce
//! deterministic under test.

use std::time::{Duration, Instant};

use limbo_core::ShellState;

/// Grace-period debounce for the recording indicator.
#[derive(Debug)]
pub struct HearingIndicator {
    grace: Duration,
    visible: bool,
    hide_at: Option<Instant>,
}

impl HearingIndicator {
    pub fn new(grace: Duration) -> Self {
        Self {
            grace,
            visible: false,
            hide_at: None,
        }
    }

    /// Feed the current mic flag.
    ///
    /// A rising edge shows the indicator at once and cancels any pending
    /// hide. The first falling observation arms the hide deadline; later
    /// ones leave it alone so the grace period is never extended.
    pub fn observe(&mut self, recording: bool, now: Instant) {
        if recording {
            self.visible = true;
            self.hide_at = None;
        } else if self.visible && self.hide_at.is_none() {
            self.hide_at = Some(now + self.grace);
        }
    }

    /// The instant the indicator should hide, set only while a hide is
    /// pending.
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    /// Apply an elapsed deadline and report visibility.
    pub fn poll(&mut self, now: Instant) -> bool {
        if let Some(at) = self.hide_at {
            if now >= at {
                self.visible = false;
                self.hide_at = None;
            }
        }
        self.visible
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Frame for the indicator, present while it is visible.
    pub fn frame(&self, state: &ShellState) -> Option<HearingFrame> {
        self.visible.then(|| HearingFrame {
            pulsing: state.recording,
            label: state.status.label(),
        })
    }
}

/// View model for the hearing indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HearingFrame {
    /// Pulse rings run while the mic is open
    pub pulsing: bool,
    /// Status text under the mic icon
    pub label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRACE: Duration = Duration::from_secs(2);

    #[test]
    fn shows_immediately_when_recording() {
        let mut indicator = HearingIndicator::new(GRACE);
        let now = Instant::now();

        assert!(!indicator.visible());
        indicator.observe(true, now);
        assert!(indicator.poll(now));
        assert_eq!(indicator.hide_deadline(), None);
    }

    #[test]
    fn lingers_for_grace_period_then_hides() {
        let mut indicator = HearingIndicator::new(GRACE);
        let start = Instant::now();
        indicator.observe(true, start);

        let stopped = start + Duration::from_secs(1);
        indicator.observe(false, stopped);
        assert_eq!(indicator.hide_deadline(), Some(stopped + GRACE));

        assert!(indicator.poll(stopped + GRACE - Duration::from_millis(1)));
        assert!(!indicator.poll(stopped + GRACE));
        assert_eq!(indicator.hide_deadline(), None);
    }

    #[test]
    fn repeated_falling_observations_do_not_extend() {
        let mut indicator = HearingIndicator::new(GRACE);
        let start = Instant::now();
        indicator.observe(true, start);

        let stopped = start + Duration::from_secs(1);
        indicator.observe(false, stopped);
        indicator.observe(false, stopped + Duration::from_secs(1));
        assert_eq!(indicator.hide_deadline(), Some(stopped + GRACE));
    }

    #[test]
    fn rising_edge_cancels_pending_hide() {
        let mut indicator = HearingIndicator::new(GRACE);
        let start = Instant::now();
        indicator.observe(true, start);
        indicator.observe(false, start + Duration::from_secs(1));

        indicator.observe(true, start + Duration::from_secs(2));
        assert_eq!(indicator.hide_deadline(), None);
        assert!(indicator.poll(start + Duration::from_secs(60)));
    }

    #[test]
    fn stays_hidden_without_a_rising_edge() {
        let mut indicator = HearingIndicator::new(GRACE);
        let now = Instant::now();
        indicator.observe(false, now);
        assert!(!indicator.poll(now + GRACE));
        assert_eq!(indicator.hide_deadline(), None);
    }

    #[test]
    fn frame_reflects_mic_flag() {
        let mut indicator = HearingIndicator::new(GRACE);
        let now = Instant::now();
        indicator.observe(true, now);

        let recording = ShellState {
            status: limbo_core::DictationStatus::Recording,
            recording: true,
        };
        let frame = indicator.frame(&recording).unwrap();
        assert!(frame.pulsing);
        assert_eq!(frame.label, "recording");

        indicator.observe(false, now);
        let processing = ShellState {
            status: limbo_core::DictationStatus::Transcribing,
            recording: false,
        };
        let frame = indicator.frame(&processing).unwrap();
        assert!(!frame.pulsing);
        assert_eq!(frame.label, "transcribing");
    }
}
