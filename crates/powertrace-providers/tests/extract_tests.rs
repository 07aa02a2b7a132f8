use chrono::{DateTime, FixedOffset};
use powertrace_providers::{
    Error, HIBERNATE_UNIT, LogSource, Result, SUSPEND_UNIT, UnitSpec, extract_events,
};
use powertrace_types::{EventKind, PowerEvent};
use std::collections::HashMap;

/// In-memory source; a missing entry behaves like a failed query.
#[derive(Default)]
struct StaticSource {
    boot_list: Option<String>,
    units: HashMap<&'static str, String>,
}

impl StaticSource {
    fn with_boot_list(text: &str) -> Self {
        Self {
            boot_list: Some(text.to_string()),
            ..Default::default()
        }
    }

    fn unit(mut self, unit: &UnitSpec, text: &str) -> Self {
        self.units.insert(unit.name, text.to_string());
        self
    }
}

impl LogSource for StaticSource {
    fn id(&self) -> &'static str {
        "static"
    }

    fn boot_list(&self) -> Result<String> {
        self.boot_list
            .clone()
            .ok_or_else(|| Error::Unavailable("boot list".to_string()))
    }

    fn unit_history(&self, unit: &UnitSpec) -> Result<String> {
        self.units
            .get(unit.name)
            .cloned()
            .ok_or_else(|| Error::Unavailable(unit.name.to_string()))
    }
}

fn ts(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

const BOOTS: &str = "\
IDX BOOT ID                          FIRST ENTRY                 LAST ENTRY
 -1 abc123def Mon 2025-01-01 08:00:00 UTC Mon 2025-01-01 18:00:00 UTC
  0 fedcba987 Tue 2025-01-02 07:30:00 UTC Tue 2025-01-02 12:00:00 UTC
";

#[test]
fn test_boot_list_failure_is_fatal() {
    let source = StaticSource::default();
    let err = extract_events(&source, ts("2025-01-02T12:00:00Z")).unwrap_err();

    assert!(matches!(err, Error::BootList { source_id: "static", .. }));
    assert!(err.to_string().contains("static"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_unit_failures_are_not_fatal() {
    let source = StaticSource::with_boot_list(BOOTS);
    let events = extract_events(&source, ts("2025-01-02T12:00:20Z")).unwrap();

    // current boot: no shutdown
    assert_eq!(
        events,
        vec![
            PowerEvent::new(ts("2025-01-01T08:00:00Z"), EventKind::Boot),
            PowerEvent::new(ts("2025-01-01T18:00:00Z"), EventKind::Shutdown),
            PowerEvent::new(ts("2025-01-02T07:30:00Z"), EventKind::Boot),
        ]
    );
}

#[test]
fn test_all_sources_combined() {
    let source = StaticSource::with_boot_list(BOOTS)
        .unit(
            &SUSPEND_UNIT,
            "2025-01-01T12:00:00+00:00 host systemd[1]: Starting System Suspend...\n\
             2025-01-01T13:00:00+00:00 host systemd[1]: Finished System Suspend.\n",
        )
        .unit(
            &HIBERNATE_UNIT,
            "2025-01-01T15:00:00+00:00 host systemd[1]: Starting System Hibernate...\n\
             2025-01-01T16:00:00+00:00 host systemd[1]: Finished System Hibernate.\n",
        );

    let events = extract_events(&source, ts("2025-01-03T00:00:00Z")).unwrap();
    let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();

    assert_eq!(
        kinds,
        vec![
            EventKind::Boot,
            EventKind::Shutdown,
            EventKind::Boot,
            EventKind::Shutdown,
            EventKind::Suspend,
            EventKind::Resume,
            EventKind::Hibernate,
            EventKind::Resume,
        ]
    );
}

#[test]
fn test_no_parseable_boots() {
    let source = StaticSource::with_boot_list("IDX BOOT ID FIRST ENTRY LAST ENTRY\ngarbage\n");
    let events = extract_events(&source, ts("2025-01-02T12:00:00Z")).unwrap();
    assert!(events.is_empty());
}
