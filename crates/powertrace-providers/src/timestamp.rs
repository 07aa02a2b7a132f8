use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, TimeZone};
use regex::{Captures, Regex};
use std::sync::LazyLock;

// NOTE: One rule per record format
//
// Each source prints time differently, so each gets its own rule owning its
// pattern and its parse step. Adding a format means adding a row to RULES,
// not another branch in the parsers.

/// Record formats the extractors understand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// `journalctl --list-boots`: "Mon 2025-01-01 08:00:00 CET", twice per row
    BootList = 0,
    /// `journalctl -o short-iso`: leading "2025-01-01T08:00:00+01:00"
    UnitLog = 1,
}

/// Regex for boot listing phrases
/// Example: "Tue 2025-10-28 16:28:42 CET" or "Tue 2025-10-28 16:28:42 +03"
static BOOT_LIST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\w{3}) (\d{4}-\d{2}-\d{2}) (\d{2}:\d{2}:\d{2}) ([A-Za-z]+|[+-]\d{2}(?::?\d{2})?)",
    )
    .unwrap()
});

/// Regex for the short-iso line prefix
/// Example: "2025-10-28T16:28:42+01:00" (older systemd prints "+0100")
static UNIT_LOG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2})([+-]\d{2}):?(\d{2})").unwrap()
});

/// A timestamp pattern together with the layout used to read its captures
pub struct TimestampRule {
    pub format: RecordFormat,
    pattern: &'static LazyLock<Regex>,
    parse: fn(&Captures<'_>) -> Option<DateTime<FixedOffset>>,
}

static RULES: [TimestampRule; 2] = [
    TimestampRule {
        format: RecordFormat::BootList,
        pattern: &BOOT_LIST_PATTERN,
        parse: parse_boot_list_phrase,
    },
    TimestampRule {
        format: RecordFormat::UnitLog,
        pattern: &UNIT_LOG_PATTERN,
        parse: parse_unit_log_prefix,
    },
];

impl RecordFormat {
    pub fn rule(self) -> &'static TimestampRule {
        &RULES[self as usize]
    }
}

impl TimestampRule {
    /// All timestamp phrases in a line, left to right, unparsed
    pub fn phrases<'h>(&self, line: &'h str) -> impl Iterator<Item = Captures<'h>> {
        let pattern: &'static Regex = self.pattern;
        pattern.captures_iter(line)
    }

    /// Interpret one matched phrase as an absolute instant
    pub fn parse(&self, phrase: &Captures<'_>) -> Option<DateTime<FixedOffset>> {
        (self.parse)(phrase)
    }

    /// Parse the first phrase in a line, if there is one
    pub fn parse_first(&self, line: &str) -> Option<DateTime<FixedOffset>> {
        let caps = self.pattern.captures(line)?;
        self.parse(&caps)
    }
}

fn parse_boot_list_phrase(caps: &Captures<'_>) -> Option<DateTime<FixedOffset>> {
    let naive =
        NaiveDateTime::parse_from_str(&format!("{} {}", &caps[2], &caps[3]), "%Y-%m-%d %H:%M:%S")
            .ok()?;
    resolve_zone(&caps[4], &naive)
}

fn parse_unit_log_prefix(caps: &Captures<'_>) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(&format!("{}{}:{}", &caps[1], &caps[2], &caps[3])).ok()
}

/// Fixed offsets (seconds east of UTC) for the zone names journalctl commonly
/// prints. Ambiguous names (IST, CST) are left out and resolve through the
/// host zone instead.
const ZONE_ABBREVIATIONS: &[(&str, i32)] = &[
    ("UTC", 0),
    ("UT", 0),
    ("GMT", 0),
    ("Z", 0),
    ("WET", 0),
    ("WEST", 3600),
    ("BST", 3600),
    ("CET", 3600),
    ("CEST", 7200),
    ("EET", 7200),
    ("EEST", 3 * 3600),
    ("MSK", 3 * 3600),
    ("HKT", 8 * 3600),
    ("SGT", 8 * 3600),
    ("JST", 9 * 3600),
    ("KST", 9 * 3600),
    ("AWST", 8 * 3600),
    ("ACST", 9 * 3600 + 1800),
    ("AEST", 10 * 3600),
    ("AEDT", 11 * 3600),
    ("NZST", 12 * 3600),
    ("NZDT", 13 * 3600),
    ("EST", -5 * 3600),
    ("EDT", -4 * 3600),
    ("CDT", -5 * 3600),
    ("MST", -7 * 3600),
    ("MDT", -6 * 3600),
    ("PST", -8 * 3600),
    ("PDT", -7 * 3600),
    ("AKST", -9 * 3600),
    ("AKDT", -8 * 3600),
    ("HST", -10 * 3600),
];

/// Offsets a region-dependent name can stand for. Only consulted to pick
/// between the two readings of a repeated local hour.
const AMBIGUOUS_NAME_HINTS: &[(&str, &[i32])] = &[
    // Irish Standard Time (summer), Israel, India
    ("IST", &[3600, 2 * 3600, 5 * 3600 + 1800]),
    // North American Central, China
    ("CST", &[-6 * 3600, 8 * 3600]),
];

/// Attach a zone to a wall-clock time.
///
/// Numeric names ("+03", "-0530") and known abbreviations map to a fixed
/// offset. Anything else is read in the host zone, which is what journalctl
/// printed it in. Only a time skipped by that zone yields None.
pub fn resolve_zone(name: &str, naive: &NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    if let Some(offset) = numeric_offset(name).or_else(|| abbreviation_offset(name)) {
        return offset.from_local_datetime(naive).single();
    }
    pick_local(name, Local.from_local_datetime(naive).map(|dt| dt.fixed_offset()))
}

/// Choose among the host-zone readings of a wall-clock time.
///
/// In a repeated hour the reading whose offset the name hints at wins,
/// otherwise the earlier one. A skipped hour has no reading.
fn pick_local(
    name: &str,
    readings: LocalResult<DateTime<FixedOffset>>,
) -> Option<DateTime<FixedOffset>> {
    match readings {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, latest) => {
            let hints = hinted_offsets(name);
            let hinted =
                |dt: &DateTime<FixedOffset>| hints.contains(&dt.offset().local_minus_utc());
            if !hinted(&earliest) && hinted(&latest) {
                Some(latest)
            } else {
                Some(earliest)
            }
        }
        LocalResult::None => None,
    }
}

fn hinted_offsets(name: &str) -> &'static [i32] {
    AMBIGUOUS_NAME_HINTS
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(name))
        .map(|(_, offsets)| *offsets)
        .unwrap_or(&[])
}

fn abbreviation_offset(name: &str) -> Option<FixedOffset> {
    ZONE_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(name))
        .and_then(|(_, secs)| FixedOffset::east_opt(*secs))
}

fn numeric_offset(name: &str) -> Option<FixedOffset> {
    let (sign, digits) = match name.as_bytes().first()? {
        b'+' => (1, &name[1..]),
        b'-' => (-1, &name[1..]),
        _ => return None,
    };
    let digits: String = digits.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (
            digits[..2].parse::<i32>().ok()?,
            digits[2..].parse::<i32>().ok()?,
        ),
        _ => return None,
    };
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
