use chrono::{DateTime, FixedOffset, TimeDelta};
use powertrace_types::{BootInterval, EventKind, PowerEvent};
use tracing::trace;

use crate::timestamp::RecordFormat;

/// A boot whose last entry is this close to `now` is the running boot; its
/// last entry is not a shutdown.
pub const SHUTDOWN_GRACE_SECS: i64 = 60;

/// Parse the boot listing table.
///
/// The first line is a header and is discarded. Rows that do not carry two
/// parseable timestamps are dropped.
pub fn parse_boot_list(text: &str) -> Vec<BootInterval> {
    text.lines().skip(1).filter_map(parse_boot_line).collect()
}

/// Parse one row, e.g.
/// `-1 abc123def Mon 2025-01-01 08:00:00 UTC Mon 2025-01-01 18:00:00 UTC`
pub fn parse_boot_line(line: &str) -> Option<BootInterval> {
    let mut tokens = line.split_whitespace();
    let index = tokens.next()?;
    let second = tokens.next()?;
    if tokens.next().is_none() {
        trace!(line, "boot row has too few fields");
        return None;
    }

    let rule = RecordFormat::BootList.rule();
    let phrases: Vec<_> = rule.phrases(line).take(2).collect();
    let [first, last] = phrases.as_slice() else {
        trace!(line, "boot row lacks two timestamps");
        return None;
    };

    let (Some(first_entry), Some(last_entry)) = (rule.parse(first), rule.parse(last)) else {
        trace!(line, "boot row timestamps do not parse");
        return None;
    };

    Some(BootInterval {
        index: index.to_string(),
        boot_id: is_boot_id(second).then(|| second.to_string()),
        first_entry,
        last_entry,
    })
}

/// Turn boot intervals into events.
///
/// Every interval yields a Boot. A Shutdown is emitted only when the last
/// entry lies more than [`SHUTDOWN_GRACE_SECS`] before `now`.
pub fn boot_events(intervals: &[BootInterval], now: DateTime<FixedOffset>) -> Vec<PowerEvent> {
    let cutoff = now - TimeDelta::seconds(SHUTDOWN_GRACE_SECS);
    let mut events = Vec::with_capacity(intervals.len() * 2);

    for interval in intervals {
        events.push(PowerEvent::new(interval.first_entry, EventKind::Boot));
        if interval.last_entry < cutoff {
            events.push(PowerEvent::new(interval.last_entry, EventKind::Shutdown));
        }
    }

    events
}

fn is_boot_id(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "IDX BOOT ID                          FIRST ENTRY                 LAST ENTRY";

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_parse_row() {
        let interval = parse_boot_line(
            "-1 abc123def Mon 2025-01-01 08:00:00 UTC Mon 2025-01-01 18:00:00 UTC",
        )
        .unwrap();

        assert_eq!(interval.index, "-1");
        assert_eq!(interval.boot_id.as_deref(), Some("abc123def"));
        assert_eq!(interval.first_entry, ts("2025-01-01T08:00:00Z"));
        assert_eq!(interval.last_entry, ts("2025-01-01T18:00:00Z"));
    }

    #[test]
    fn test_header_is_skipped() {
        let text = format!(
            "{}\n  0 abc Mon 2025-01-01 08:00:00 UTC Mon 2025-01-01 18:00:00 UTC\n",
            HEADER
        );
        assert_eq!(parse_boot_list(&text).len(), 1);
    }

    #[test]
    fn test_header_only() {
        assert!(parse_boot_list(HEADER).is_empty());
        assert!(parse_boot_list("").is_empty());
    }

    #[test]
    fn test_malformed_rows_dropped() {
        let text = [
            HEADER,
            "",
            "-2",
            "-1 abc Mon 2025-01-01 08:00:00 UTC",
            "0 def Mon 2025-01-01 25:00:00 UTC Mon 2025-01-01 26:00:00 UTC",
            "1 fed Tue 2025-01-02 08:00:00 UTC Tue 2025-01-02 09:00:00 UTC",
        ]
        .join("\n");

        let intervals = parse_boot_list(&text);
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].boot_id.as_deref(), Some("fed"));
    }

    #[test]
    fn test_only_first_two_timestamps_used() {
        let interval = parse_boot_line(
            "0 abc Mon 2025-01-01 08:00:00 UTC Mon 2025-01-01 09:00:00 UTC Mon 2025-01-01 10:00:00 UTC",
        )
        .unwrap();
        assert_eq!(interval.last_entry, ts("2025-01-01T09:00:00Z"));
    }

    #[test]
    fn test_closed_boot_gets_shutdown() {
        let interval = parse_boot_line(
            "-1 abc123def Mon 2025-01-01 08:00:00 UTC Mon 2025-01-01 18:00:00 UTC",
        )
        .unwrap();

        let events = boot_events(&[interval], ts("2025-01-01T18:01:30Z"));
        assert_eq!(
            events,
            vec![
                PowerEvent::new(ts("2025-01-01T08:00:00Z"), EventKind::Boot),
                PowerEvent::new(ts("2025-01-01T18:00:00Z"), EventKind::Shutdown),
            ]
        );
    }

    #[test]
    fn test_running_boot_has_no_shutdown() {
        let interval = parse_boot_line(
            "0 abc123def Mon 2025-01-01 08:00:00 UTC Mon 2025-01-01 18:00:00 UTC",
        )
        .unwrap();

        let events = boot_events(&[interval.clone()], ts("2025-01-01T18:00:30Z"));
        assert_eq!(
            events,
            vec![PowerEvent::new(ts("2025-01-01T08:00:00Z"), EventKind::Boot)]
        );

        // exactly one minute is not "more than one minute"
        let events = boot_events(&[interval], ts("2025-01-01T18:01:00Z"));
        assert_eq!(events.len(), 1);
    }
}
