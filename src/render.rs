//! Frame renderer.
//!
//! Consumes shell state snapshots and presents each frame: the overlay
//! panel and the hearing indicator are emitted as structured log events,
//! the stand-in for the host compositor. After the first frame the host
//! shell is signalled so it can drop its splash and reveal the window.

use std::sync::Arc;
use std::time::{Duration, Instant};

use limbo_core::ShellState;
use limbo_ui::{HearingFrame, HearingIndicator, OverlayFrame};
use tokio::sync::watch;
use tokio::time::sleep_until;
use tracing::{debug, info};

use crate::host::HostShell;

/// One presented frame: the overlay plus the hearing indicator when shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub overlay: OverlayFrame,
    pub hearing: Option<HearingFrame>,
}

/// Turns state snapshots into frames, tracking the hearing indicator's
/// grace period. The caller supplies the clock and schedules the wakeup
/// from [`Presenter::hide_deadline`].
pub struct Presenter {
    state: ShellState,
    hearing: HearingIndicator,
}

impl Presenter {
    pub fn new(grace: Duration) -> Self {
        Self {
            state: ShellState::new(),
            hearing: HearingIndicator::new(grace),
        }
    }

    /// Ingest a state snapshot and produce the frame to present.
    pub fn update(&mut self, state: ShellState, now: Instant) -> Frame {
        self.hearing.observe(state.recording, now);
        self.state = state;
        self.frame()
    }

    /// Re-present after the hide deadline has passed.
    pub fn tick(&mut self, now: Instant) -> Frame {
        self.hearing.poll(now);
        self.frame()
    }

    /// Pending hearing-indicator hide, if one is armed.
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.hearing.hide_deadline()
    }

    fn frame(&self) -> Frame {
        Frame {
            overlay: OverlayFrame::project(&self.state),
            hearing: self.hearing.frame(&self.state),
        }
    }
}

/// Renderer task: runs until the session's watch channel closes.
pub async fn run(
    mut updates: watch::Receiver<ShellState>,
    shell: Arc<dyn HostShell>,
    grace: Duration,
) {
    let mut presenter = Presenter::new(grace);

    // Present the initial state, then let the host reveal itself.
    let frame = presenter.update(updates.borrow().clone(), Instant::now());
    log_frame(&frame);
    shell.signal_content_loaded();
    shell.signal_window_ready();

    loop {
        let hide_at = presenter.hide_deadline();
        let wakeup = hide_at.map(|at| {
            tokio::time::Instant::now() + at.saturating_duration_since(Instant::now())
        });

        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let frame = presenter.update(updates.borrow().clone(), Instant::now());
                log_frame(&frame);
            }
            _ = sleep_until(wakeup.unwrap_or_else(tokio::time::Instant::now)), if wakeup.is_some() => {
                if let Some(at) = hide_at {
                    let frame = presenter.tick(at);
                    log_frame(&frame);
                }
            }
        }
    }

    debug!("renderer stopped");
}

fn log_frame(frame: &Frame) {
    if frame.overlay.visible {
        info!(
            badge = frame.overlay.badge,
            icon = ?frame.overlay.icon,
            headline = %frame.overlay.headline,
            pulsing = frame.overlay.pulsing,
            "overlay"
        );
    } else {
        info!("overlay hidden");
    }

    match &frame.hearing {
        Some(indicator) => {
            info!(
                label = indicator.label,
                pulsing = indicator.pulsing,
                "hearing indicator"
            );
        }
        None => debug!("hearing indicator hidden"),
    }
}
