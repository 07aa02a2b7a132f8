use chrono::{DateTime, FixedOffset};
use powertrace_types::{PowerEvent, Session};
use tracing::debug;

use super::state::SessionState;

/// Fold a normalized event stream into sessions.
///
/// `now` is the reference instant used to end a session that is still open
/// when the stream runs out; at most one such session exists and it is last.
pub fn reconstruct_sessions(events: &[PowerEvent], now: DateTime<FixedOffset>) -> Vec<Session> {
    let mut state = SessionState::Closed;
    let mut sessions = Vec::new();

    for event in events {
        let was_open = state.is_open();
        let (next, completed) = state.transition(event);

        match &completed {
            Some(session) if session.is_interrupted() => {
                debug!(
                    start = %session.start,
                    end = %session.end,
                    label = %session.label(),
                    "session ended without a closer"
                );
            }
            None if !was_open && !event.kind.is_opener() => {
                debug!(kind = %event.kind, timestamp = %event.timestamp, "closer with nothing open, ignored");
            }
            _ => {}
        }

        sessions.extend(completed);
        state = next;
    }

    sessions.extend(state.finish(now));
    sessions
}
