// Engine module - ordering, session reconstruction, aggregation
// This layer sits between extracted events (providers) and CLI presentation

pub mod normalize;
pub mod session;
pub mod summary;
mod timeline;

pub use normalize::{DEDUP_WINDOW_SECS, dedup_events};
pub use session::{SessionState, reconstruct_sessions};
pub use summary::SessionSummary;
pub use timeline::{Timeline, analyze};

use chrono::{DateTime, FixedOffset};
use powertrace_types::{PowerEvent, Session};

// Façade API - Stable public interface for CLI layer

/// Sort events chronologically and collapse near-duplicate repeats
pub fn normalize_events(events: Vec<PowerEvent>) -> Vec<PowerEvent> {
    normalize::normalize(events)
}

/// Build sessions from a normalized event stream
pub fn build_sessions(events: &[PowerEvent], now: DateTime<FixedOffset>) -> Vec<Session> {
    session::reconstruct_sessions(events, now)
}

/// Aggregate statistics; None when there are no sessions
pub fn summarize_sessions(sessions: &[Session]) -> Option<SessionSummary> {
    summary::summarize(sessions)
}
