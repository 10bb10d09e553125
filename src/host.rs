//! Boundary to the embedding host runtime.
//!
//! The core never talks to the display host directly; it hands off two
//! things through this trait: log messages (fire-and-forget, never read
//! back) and the optional follow-up action string configured as
//! `on_complete_action`. The core does not interpret or validate the action
//! text; dispatching it is entirely the host's business.

use crate::logger::Log;

/// Severity of a message handed to the host's logging collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Error,
}

/// Collaborator surface the resolver calls out through.
#[cfg_attr(test, mockall::automock)]
pub trait Host {
    /// Record a message; the core never observes any effect of this.
    fn log(&self, severity: Severity, message: &str);

    /// Dispatch a follow-up action string after a completed execution.
    fn run_action(&self, action: &str);
}

/// Host implementation for standalone use, backed by the console logger.
///
/// Without a real display host there is nothing that can interpret action
/// strings, so `run_action` only records what would have been dispatched.
#[derive(Debug, Default)]
pub struct ConsoleHost;

impl Host for ConsoleHost {
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => Log::log_debug(message),
            Severity::Error => Log::log_error(message),
        }
    }

    fn run_action(&self, action: &str) {
        Log::log_debug(&format!("Dispatching follow-up action: {}", action));
    }
}
