use powertrace_types::PowerEvent;
use tracing::trace;

use crate::registry::UnitSpec;
use crate::timestamp::RecordFormat;

/// Parse the history of one unit into events.
///
/// Lines that do not mention the unit, carry no leading timestamp, or are
/// neither a start nor a finish line are ignored.
pub fn parse_unit_log(text: &str, unit: &UnitSpec) -> Vec<PowerEvent> {
    text.lines()
        .filter_map(|line| parse_unit_line(line, unit))
        .collect()
}

pub fn parse_unit_line(line: &str, unit: &UnitSpec) -> Option<PowerEvent> {
    if !line.contains(unit.phrase) {
        return None;
    }

    let Some(timestamp) = RecordFormat::UnitLog.rule().parse_first(line) else {
        trace!(unit = unit.name, line, "unit line has no timestamp");
        return None;
    };

    let kind = unit.classify(line)?;
    Some(PowerEvent::new(timestamp, kind))
}
