use chrono::TimeDelta;
use powertrace_types::PowerEvent;
use tracing::trace;

/// Same-kind events closer together than this are one physical transition
/// logged twice.
pub const DEDUP_WINDOW_SECS: i64 = 120;

pub fn normalize(mut events: Vec<PowerEvent>) -> Vec<PowerEvent> {
    events.sort_by_key(|e| e.timestamp);
    dedup_events(events)
}

/// Drop every event that repeats the kind of the last retained event within
/// [`DEDUP_WINDOW_SECS`]. Input must already be sorted.
///
/// Comparison is against the last *retained* event, so a burst of repeats is
/// measured from its first entry, and the output is a fixed point.
pub fn dedup_events(events: Vec<PowerEvent>) -> Vec<PowerEvent> {
    let window = TimeDelta::seconds(DEDUP_WINDOW_SECS);
    let mut retained: Vec<PowerEvent> = Vec::with_capacity(events.len());

    for event in events {
        if let Some(last) = retained.last()
            && last.kind == event.kind
            && event.timestamp - last.timestamp < window
        {
            trace!(kind = %event.kind, timestamp = %event.timestamp, "dropping duplicate");
            continue;
        }
        retained.push(event);
    }

    retained
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};
    use powertrace_types::EventKind;

    fn at(s: &str, kind: EventKind) -> PowerEvent {
        PowerEvent::new(
            DateTime::<FixedOffset>::parse_from_rfc3339(s).unwrap(),
            kind,
        )
    }

    #[test]
    fn test_sorts_across_offsets() {
        let events = vec![
            at("2025-01-01T10:00:00+01:00", EventKind::Suspend), // 09:00Z
            at("2025-01-01T08:00:00+00:00", EventKind::Boot),
        ];
        let normalized = normalize(events);
        assert_eq!(normalized[0].kind, EventKind::Boot);
        assert_eq!(normalized[1].kind, EventKind::Suspend);
    }

    #[test]
    fn test_drops_repeat_within_window() {
        let events = vec![
            at("2025-01-01T08:00:00Z", EventKind::Boot),
            at("2025-01-01T09:00:00Z", EventKind::Suspend),
            at("2025-01-01T09:01:00Z", EventKind::Suspend),
        ];
        let normalized = normalize(events);
        assert_eq!(
            normalized,
            vec![
                at("2025-01-01T08:00:00Z", EventKind::Boot),
                at("2025-01-01T09:00:00Z", EventKind::Suspend),
            ]
        );
    }

    #[test]
    fn test_keeps_repeat_at_window_edge() {
        let events = vec![
            at("2025-01-01T09:00:00Z", EventKind::Resume),
            at("2025-01-01T09:02:00Z", EventKind::Resume),
        ];
        assert_eq!(normalize(events).len(), 2);
    }

    #[test]
    fn test_different_kinds_never_merge() {
        let events = vec![
            at("2025-01-01T09:00:00Z", EventKind::Suspend),
            at("2025-01-01T09:00:00Z", EventKind::Hibernate),
        ];
        assert_eq!(normalize(events).len(), 2);
    }

    #[test]
    fn test_burst_measured_from_first_retained() {
        let events = vec![
            at("2025-01-01T09:00:00Z", EventKind::Suspend),
            at("2025-01-01T09:01:30Z", EventKind::Suspend),
            at("2025-01-01T09:03:00Z", EventKind::Suspend),
        ];
        let normalized = normalize(events);
        assert_eq!(
            normalized,
            vec![
                at("2025-01-01T09:00:00Z", EventKind::Suspend),
                at("2025-01-01T09:03:00Z", EventKind::Suspend),
            ]
        );
        assert_eq!(normalize(normalized.clone()), normalized);
    }

    #[test]
    fn test_empty() {
        assert!(normalize(Vec::new()).is_empty());
    }
}
