use chrono::{DateTime, FixedOffset};
use powertrace_types::{PowerEvent, Session};

use crate::normalize::normalize;
use crate::session::reconstruct_sessions;
use crate::summary::{SessionSummary, summarize};

/// Outcome of a full analysis.
///
/// Empty results are outcomes, not errors: callers report them as
/// "nothing to show".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timeline {
    /// Nothing was extracted
    NoEvents,
    /// Events exist but none opened a session
    NoSessions { events: Vec<PowerEvent> },
    Sessions {
        events: Vec<PowerEvent>,
        sessions: Vec<Session>,
        summary: SessionSummary,
    },
}

/// Normalize extracted events and reconstruct the session timeline.
pub fn analyze(events: Vec<PowerEvent>, now: DateTime<FixedOffset>) -> Timeline {
    let events = normalize(events);
    if events.is_empty() {
        return Timeline::NoEvents;
    }

    let sessions = reconstruct_sessions(&events, now);
    match summarize(&sessions) {
        None => Timeline::NoSessions { events },
        Some(summary) => Timeline::Sessions {
            events,
            sessions,
            summary,
        },
    }
}
