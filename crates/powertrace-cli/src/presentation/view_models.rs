use chrono::{DateTime, FixedOffset};
use powertrace_types::{EventKind, SessionClose};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryStatus {
    Sessions,
    NoEvents,
    NoSessions,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryViewModel {
    pub status: HistoryStatus,
    pub sessions: Vec<SessionViewModel>,
    pub summary: Option<SummaryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionViewModel {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub duration_secs: i64,
    pub label: String,
    pub opened_by: EventKind,
    pub close: SessionClose,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryViewModel {
    pub count: usize,
    pub total_secs: i64,
    pub average_secs: i64,
    pub longest: SessionRefViewModel,
    pub shortest: SessionRefViewModel,
}

/// Enough of a session to point at it from the summary
#[derive(Debug, Clone, Serialize)]
pub struct SessionRefViewModel {
    pub start: DateTime<FixedOffset>,
    pub duration_secs: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventListViewModel {
    pub events: Vec<EventViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventViewModel {
    pub timestamp: DateTime<FixedOffset>,
    pub kind: EventKind,
}
