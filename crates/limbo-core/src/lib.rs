//! Core types and configuration for limbo.
//!
//! This crate provides platform-agnostic types that can be used across
//! all limbo sub-crates.

mod config;
mod event;
mod status;

pub use config::{Config, ConfigManager, DEFAULT_HOTKEY, DEMO_TRANSCRIPT};
pub use event::ShellCommand;
pub use status::{DictationStatus, ShellState};

/// Application name
pub const APP_NAME: &str = "limbo";

/// Pretty application name for display
pub const APP_NAME_PRETTY: &str = "Limbo Voice";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
