use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::EventKind;

/// How a session came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "kind", rename_all = "snake_case")]
pub enum SessionClose {
    /// A closer event (shutdown, suspend, hibernate) ended the session
    Closed(EventKind),
    /// Another opener arrived with no closer in between; the session is cut
    /// at that opener
    Interrupted(EventKind),
    /// No closer by the end of the stream; ends at the reference instant
    StillActive,
}

impl fmt::Display for SessionClose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionClose::Closed(kind) | SessionClose::Interrupted(kind) => {
                write!(f, "{}", kind)
            }
            SessionClose::StillActive => f.write_str("(still active)"),
        }
    }
}

/// A contiguous period of active use, from an opener to whatever ended it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub opened_by: EventKind,
    pub close: SessionClose,
}

impl Session {
    pub fn duration(&self) -> TimeDelta {
        self.end.signed_duration_since(self.start)
    }

    /// Transition label, e.g. "boot → shutdown" or "resume → (still active)"
    pub fn label(&self) -> String {
        format!("{} → {}", self.opened_by, self.close)
    }

    pub fn is_still_active(&self) -> bool {
        self.close == SessionClose::StillActive
    }

    pub fn is_interrupted(&self) -> bool {
        matches!(self.close, SessionClose::Interrupted(_))
    }
}
