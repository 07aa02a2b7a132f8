use powertrace_engine::{SessionSummary, Timeline};
use powertrace_types::{PowerEvent, Session};

use super::view_models::{
    EventListViewModel, EventViewModel, HistoryStatus, HistoryViewModel, SessionRefViewModel,
    SessionViewModel, SummaryViewModel,
};

pub fn present_history(timeline: &Timeline) -> HistoryViewModel {
    match timeline {
        Timeline::NoEvents => HistoryViewModel {
            status: HistoryStatus::NoEvents,
            sessions: Vec::new(),
            summary: None,
        },
        Timeline::NoSessions { .. } => HistoryViewModel {
            status: HistoryStatus::NoSessions,
            sessions: Vec::new(),
            summary: None,
        },
        Timeline::Sessions {
            sessions, summary, ..
        } => HistoryViewModel {
            status: HistoryStatus::Sessions,
            sessions: sessions.iter().map(present_session).collect(),
            summary: Some(present_summary(summary)),
        },
    }
}

pub fn present_events(events: &[PowerEvent]) -> EventListViewModel {
    EventListViewModel {
        events: events
            .iter()
            .map(|e| EventViewModel {
                timestamp: e.timestamp,
                kind: e.kind,
            })
            .collect(),
    }
}

fn present_session(session: &Session) -> SessionViewModel {
    SessionViewModel {
        start: session.start,
        end: session.end,
        duration_secs: session.duration().num_seconds(),
        label: session.label(),
        opened_by: session.opened_by,
        close: session.close,
    }
}

fn present_summary(summary: &SessionSummary) -> SummaryViewModel {
    SummaryViewModel {
        count: summary.count,
        total_secs: summary.total.num_seconds(),
        average_secs: summary.average.num_seconds(),
        longest: present_ref(&summary.longest),
        shortest: present_ref(&summary.shortest),
    }
}

fn present_ref(session: &Session) -> SessionRefViewModel {
    SessionRefViewModel {
        start: session.start,
        duration_secs: session.duration().num_seconds(),
    }
}
