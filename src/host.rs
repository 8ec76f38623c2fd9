//! Host shell signals.
//!
//! The one interface the shell consumes from its host: reveal the
//! application window once the first frame is up, and drop the loading
//! splash once content is in place. Both are one-shot and fire-and-forget,
//! with no return contract.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

/// Signals the shell sends its host once each.
pub trait HostShell: Send + Sync {
    /// Reveal the host application window.
    fn signal_window_ready(&self);
    /// Remove the loading splash now that content has rendered.
    fn signal_content_loaded(&self);
}

/// Host shell that logs the signals, standing in for the native shell.
/// Repeated calls are swallowed so the signals stay one-shot.
#[derive(Debug, Default)]
pub struct LoggingShell {
    window_ready: AtomicBool,
    content_loaded: AtomicBool,
}

impl LoggingShell {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HostShell for LoggingShell {
    fn signal_window_ready(&self) {
        if !self.window_ready.swap(true, Ordering::Relaxed) {
            info!("window ready, revealing host window");
        }
    }

    fn signal_content_loaded(&self) {
        if !self.content_loaded.swap(true, Ordering::Relaxed) {
            info!("content loaded, removing splash");
        }
    }
}
