use powertrace_types::EventKind;

/// A systemd unit whose activation marks a sleep transition.
///
/// "Starting <phrase>" is logged when the machine goes down,
/// "Finished <phrase>" once it is back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSpec {
    pub name: &'static str,
    pub phrase: &'static str,
    pub started: EventKind,
    pub finished: EventKind,
}

pub const SUSPEND_UNIT: UnitSpec = UnitSpec {
    name: "systemd-suspend.service",
    phrase: "System Suspend",
    started: EventKind::Suspend,
    finished: EventKind::Resume,
};

pub const HIBERNATE_UNIT: UnitSpec = UnitSpec {
    name: "systemd-hibernate.service",
    phrase: "System Hibernate",
    started: EventKind::Hibernate,
    finished: EventKind::Resume,
};

const UNITS: &[UnitSpec] = &[SUSPEND_UNIT, HIBERNATE_UNIT];

pub fn all_units() -> &'static [UnitSpec] {
    UNITS
}

impl UnitSpec {
    /// Map a log line to the transition it records, if any.
    ///
    /// The caller has already checked that the line mentions the phrase.
    pub fn classify(&self, line: &str) -> Option<EventKind> {
        if line.contains(&format!("Finished {}", self.phrase)) {
            Some(self.finished)
        } else if line.contains(&format!("Starting {}", self.phrase)) {
            Some(self.started)
        } else {
            None
        }
    }
}
