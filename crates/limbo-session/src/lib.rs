//! Dictation lifecycle engine for limbo.
//!
//! [`DictationSession`] owns the authoritative [`ShellState`] and is its
//! only writer. Manual triggers arrive over a command channel; automatic
//! transitions are deadlines raced against that channel inside one select
//! loop. A manual trigger that changes state replaces the pending deadline,
//! so an interrupted wait is cancelled structurally and can never fire
//! stale. Consumers observe the state through a watch channel and never
//! mutate it.

use std::sync::Arc;

use limbo_core::{Config, DictationStatus, ShellCommand, ShellState};
use parking_lot::RwLock;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info};

/// Errors from driving a session handle.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session task is gone and can take no further commands
    #[error("dictation session has shut down")]
    Closed,
}

type Result<T> = std::result::Result<T, SessionError>;

/// The automatic transition waiting to fire. At most one is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AutoAdvance {
    /// Transcribing -> Success, standing in for "transcription finished"
    FinishTranscription,
    /// Success -> Idle, the overlay auto-dismiss
    DismissSuccess,
}

/// Handle to a running session: commands in, read-only snapshots out.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<ShellCommand>,
    updates: watch::Receiver<ShellState>,
}

impl SessionHandle {
    /// Send a command to the session.
    pub fn send(&self, command: ShellCommand) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| SessionError::Closed)
    }

    pub fn start(&self) -> Result<()> {
        self.send(ShellCommand::Start)
    }

    pub fn stop(&self) -> Result<()> {
        self.send(ShellCommand::Stop)
    }

    pub fn toggle(&self) -> Result<()> {
        self.send(ShellCommand::Toggle)
    }

    /// Snapshot of the current shell state.
    pub fn state(&self) -> ShellState {
        self.updates.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn watch(&self) -> watch::Receiver<ShellState> {
        self.updates.clone()
    }
}

/// The dictation lifecycle engine.
pub struct DictationSession {
    state: ShellState,
    pending: Option<(AutoAdvance, Instant)>,
    config: Arc<RwLock<Config>>,
    updates: watch::Sender<ShellState>,
}

impl DictationSession {
    /// Spawn the session task. Dropping every handle (closing the command
    /// channel) shuts the task down.
    pub fn spawn(config: Arc<RwLock<Config>>) -> (SessionHandle, JoinHandle<()>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = watch::channel(ShellState::new());

        let session = Self {
            state: ShellState::new(),
            pending: None,
            config,
            updates: update_tx,
        };
        let task = tokio::spawn(session.run(command_rx));

        (
            SessionHandle {
                commands: command_tx,
                updates: update_rx,
            },
            task,
        )
    }

    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<ShellCommand>) {
        info!("dictation session started");

        loop {
            let deadline = self.pending.map(|(_, at)| at);
            tokio::select! {
                // Manual triggers win a tie against an expiring deadline.
                biased;
                command = commands.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.advance();
                }
            }
        }

        info!("dictation session stopped");
    }

    fn handle_command(&mut self, command: ShellCommand) {
        match command {
            ShellCommand::Start => self.start(),
            ShellCommand::Stop => self.stop(),
            ShellCommand::Toggle => match self.state.status {
                DictationStatus::Recording => self.stop(),
                DictationStatus::Transcribing => {
                    debug!("toggle ignored while transcribing");
                }
                _ => self.start(),
            },
        }
    }

    /// Begin a new cycle. Valid from `Idle`, and from `Success`/`Error`,
    /// where it interrupts the pending dismiss.
    fn start(&mut self) {
        match self.state.status {
            DictationStatus::Idle
            | DictationStatus::Success { .. }
            | DictationStatus::Error => {
                self.pending = None;
                self.state.recording = true;
                self.transition(DictationStatus::Recording);
            }
            _ => debug!(status = %self.state.status, "start ignored"),
        }
    }

    /// Stop listening and schedule the simulated transcription finish.
    fn stop(&mut self) {
        if self.state.status != DictationStatus::Recording {
            debug!(status = %self.state.status, "stop ignored");
            return;
        }

        let delay = self.config.read().finish_delay();
        self.pending = Some((AutoAdvance::FinishTranscription, Instant::now() + delay));
        self.transition(DictationStatus::Transcribing);
    }

    /// Fire the pending automatic transition.
    fn advance(&mut self) {
        let Some((advance, _)) = self.pending.take() else {
            return;
        };

        match advance {
            AutoAdvance::FinishTranscription => {
                let (transcript, delay) = {
                    let config = self.config.read();
                    (config.demo_transcript().to_string(), config.dismiss_delay())
                };
                self.pending = Some((AutoAdvance::DismissSuccess, Instant::now() + delay));
                self.transition(DictationStatus::Success { transcript });
            }
            AutoAdvance::DismissSuccess => {
                self.state.recording = false;
                self.transition(DictationStatus::Idle);
            }
        }
    }

    fn transition(&mut self, next: DictationStatus) {
        info!(from = %self.state.status, to = %next, "status transition");
        self.state.status = next;
        self.updates.send_replace(self.state.clone());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use limbo_core::DEMO_TRANSCRIPT;

    use super::*;

    fn spawn_session() -> (SessionHandle, JoinHandle<()>) {
        let config = Arc::new(RwLock::new(Config::default()));
        DictationSession::spawn(config)
    }

    /// Block until the watched state satisfies the predicate.
    async fn wait_for(
        updates: &mut watch::Receiver<ShellState>,
        pred: impl Fn(&ShellState) -> bool,
    ) -> ShellState {
        loop {
            {
                let state = updates.borrow();
                if pred(&state) {
                    return state.clone();
                }
            }
            updates.changed().await.expect("session ended early");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn full_cycle_follows_demo_sequence() {
        let (handle, _task) = spawn_session();
        let mut updates = handle.watch();

        handle.toggle().unwrap();
        let state = wait_for(&mut updates, |s| s.status == DictationStatus::Recording).await;
        assert!(state.recording);
        assert_eq!(state.transcript(), None);

        handle.toggle().unwrap();
        let state =
            wait_for(&mut updates, |s| s.status == DictationStatus::Transcribing).await;
        assert!(state.recording);
        assert_eq!(state.transcript(), None);

        let state = wait_for(&mut updates, |s| s.transcript().is_some()).await;
        assert_eq!(state.status.label(), "success");
        assert_eq!(state.transcript(), Some(DEMO_TRANSCRIPT));
        assert!(state.recording);

        let state = wait_for(&mut updates, |s| s.status.is_idle()).await;
        assert!(!state.recording);
        assert_eq!(state.transcript(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn start_during_success_interrupts_dismiss() {
        let (handle, _task) = spawn_session();
        let mut updates = handle.watch();

        handle.toggle().unwrap();
        handle.toggle().unwrap();
        wait_for(&mut updates, |s| s.transcript().is_some()).await;

        // Interrupt the pending auto-dismiss with a fresh cycle.
        handle.start().unwrap();
        let state = wait_for(&mut updates, |s| s.status == DictationStatus::Recording).await;
        assert!(state.recording);

        // Well past the cancelled dismiss deadline nothing has fired.
        tokio::time::sleep(Duration::from_secs(10)).await;
        let state = handle.state();
        assert_eq!(state.status, DictationStatus::Recording);
        assert!(state.recording);
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_ignored_while_transcribing() {
        let (handle, _task) = spawn_session();
        let mut updates = handle.watch();

        handle.toggle().unwrap();
        wait_for(&mut updates, |s| s.status == DictationStatus::Recording).await;
        handle.toggle().unwrap();
        wait_for(&mut updates, |s| s.status == DictationStatus::Transcribing).await;

        // Extra toggles while transcribing change nothing; the next state
        // observed is still the simulated finish.
        handle.toggle().unwrap();
        handle.toggle().unwrap();
        let state =
            wait_for(&mut updates, |s| s.status != DictationStatus::Transcribing).await;
        assert_eq!(state.transcript(), Some(DEMO_TRANSCRIPT));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_requires_recording() {
        let (handle, _task) = spawn_session();
        let mut updates = handle.watch();

        // Stop while idle is a no-op; a following start still works.
        handle.stop().unwrap();
        handle.start().unwrap();
        let state = wait_for(&mut updates, |s| s.status == DictationStatus::Recording).await;
        assert!(state.recording);
    }

    #[tokio::test(start_paused = true)]
    async fn configured_transcript_is_used() {
        let config = Arc::new(RwLock::new(Config {
            demo_transcript: Some("custom line".to_string()),
            ..Default::default()
        }));
        let (handle, _task) = DictationSession::spawn(config);
        let mut updates = handle.watch();

        handle.toggle().unwrap();
        handle.toggle().unwrap();
        let state = wait_for(&mut updates, |s| s.transcript().is_some()).await;
        assert_eq!(state.transcript(), Some("custom line"));
    }

    #[tokio::test(start_paused = true)]
    async fn closed_session_rejects_commands() {
        let (handle, task) = spawn_session();
        task.abort();
        let _ = task.await;

        assert!(matches!(handle.toggle(), Err(SessionError::Closed)));
    }
}
