//! Manual triggers for the dictation session.
//!
//! Commands are kept free of UI dependencies so any front end (a future
//! hotkey hook, the demo driver, tests) can drive the session the same way.

/// A manual trigger issued by the application root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Begin a dictation cycle
    Start,
    /// Stop listening and hand off to transcription
    Stop,
    /// Start or stop depending on the current state
    Toggle,
}
