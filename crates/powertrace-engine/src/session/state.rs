use chrono::{DateTime, FixedOffset};
use powertrace_types::{EventKind, EventRole, PowerEvent, Session, SessionClose};

// NOTE: Pairing by adjacency
//
// Openers and closers are paired by position, not by any identifier. Under
// normal operation the journal strictly alternates (boot, ..., shutdown,
// boot, ...), so the previous opener is always the right partner.
// Violations are surfaced rather than merged:
//
//   Open   + opener  → the open session is cut at the new opener and
//                      reported as Interrupted; the new opener starts over
//   Closed + closer  → nothing to close; the closer is dropped
//
// The second case also hides a lost opener. It is kept as a no-op because
// the leading edge of a rotated journal routinely starts with a closer.

/// Reconstruction state between two events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Closed,
    Open {
        since: DateTime<FixedOffset>,
        kind: EventKind,
    },
}

impl SessionState {
    /// Feed one event; returns the next state and the session it completed, if any.
    pub fn transition(self, event: &PowerEvent) -> (SessionState, Option<Session>) {
        match (self, event.kind.role()) {
            (SessionState::Closed, EventRole::Opener) => (Self::opened_by(event), None),
            (SessionState::Open { since, kind }, EventRole::Opener) => (
                Self::opened_by(event),
                Some(Session {
                    start: since,
                    end: event.timestamp,
                    opened_by: kind,
                    close: SessionClose::Interrupted(event.kind),
                }),
            ),
            (SessionState::Open { since, kind }, EventRole::Closer) => (
                SessionState::Closed,
                Some(Session {
                    start: since,
                    end: event.timestamp,
                    opened_by: kind,
                    close: SessionClose::Closed(event.kind),
                }),
            ),
            (SessionState::Closed, EventRole::Closer) => (SessionState::Closed, None),
        }
    }

    /// Close out the stream. An open session becomes a still-active session
    /// ending at `now` (never before its start).
    pub fn finish(self, now: DateTime<FixedOffset>) -> Option<Session> {
        match self {
            SessionState::Closed => None,
            SessionState::Open { since, kind } => Some(Session {
                start: since,
                end: if now < since { since } else { now },
                opened_by: kind,
                close: SessionClose::StillActive,
            }),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SessionState::Open { .. })
    }

    fn opened_by(event: &PowerEvent) -> Self {
        SessionState::Open {
            since: event.timestamp,
            kind: event.kind,
        }
    }
}
