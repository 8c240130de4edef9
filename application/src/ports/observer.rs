//! Debate observer port
//!
//! Defines the interface for presenting a debate while it runs.

use symposium_domain::{DebateConfig, DebateResult, Phase};

/// One persona reply, as emitted to the observer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebateEvent<'a> {
    /// Display name of the persona (or "Moderator" for the opening prompt)
    pub speaker: &'a str,
    /// Message text
    pub content: &'a str,
    /// Label of the phase the message belongs to ("setup" for the opening prompt)
    pub phase: &'a str,
}

/// Callbacks for presenting a debate
///
/// Implementations live in the presentation layer and can render events
/// in various ways (console, log sink, UI). All callbacks except
/// [`on_message`](Self::on_message) default to no-ops.
pub trait DebateObserver: Send + Sync {
    /// Called once before the opening prompt
    fn on_session_start(&self, _config: &DebateConfig) {}

    /// Called before a persona is invoked
    fn on_exchange_start(&self, _speaker: &str, _phase: Phase) {}

    /// Called for every non-empty message added to the transcript
    fn on_message(&self, event: &DebateEvent<'_>);

    /// Called when the turn budget forces the debate to conclude
    fn on_turn_limit_reached(&self, _max_turns: u32) {}

    /// Called before the closing summary exchange
    fn on_summary_start(&self) {}

    /// Called once the result has been assembled
    fn on_session_end(&self, _result: &DebateResult) {}
}

/// No-op observer for when nothing needs to be presented
pub struct NoObserver;

impl DebateObserver for NoObserver {
    fn on_message(&self, _event: &DebateEvent<'_>) {}
}
