use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

// NOTE: Event Vocabulary
//
// The vocabulary is closed on purpose: five power transitions, nothing finer.
// Lid events, partial suspends and hybrid-sleep phases are folded into the
// nearest of these or dropped by the extractors.
//
// Openers (boot, resume) begin a period of active use.
// Closers (shutdown, suspend, hibernate) end one.

/// Power-state transition kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Boot,
    Shutdown,
    Suspend,
    Hibernate,
    Resume,
}

/// Whether an event starts or ends an active session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventRole {
    Opener,
    Closer,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Boot,
        EventKind::Shutdown,
        EventKind::Suspend,
        EventKind::Hibernate,
        EventKind::Resume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Boot => "boot",
            EventKind::Shutdown => "shutdown",
            EventKind::Suspend => "suspend",
            EventKind::Hibernate => "hibernate",
            EventKind::Resume => "resume",
        }
    }

    pub fn role(&self) -> EventRole {
        match self {
            EventKind::Boot | EventKind::Resume => EventRole::Opener,
            EventKind::Shutdown | EventKind::Suspend | EventKind::Hibernate => EventRole::Closer,
        }
    }

    pub fn is_opener(&self) -> bool {
        self.role() == EventRole::Opener
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single timestamped power transition.
///
/// Identity is irrelevant: two events with the same instant and kind are
/// the same event. Timestamps keep the offset they were logged with, but
/// ordering and equality compare absolute time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerEvent {
    pub timestamp: DateTime<FixedOffset>,
    pub kind: EventKind,
}

impl PowerEvent {
    pub fn new(timestamp: DateTime<FixedOffset>, kind: EventKind) -> Self {
        Self { timestamp, kind }
    }
}
