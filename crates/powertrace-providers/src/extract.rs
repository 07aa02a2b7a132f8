use chrono::{DateTime, FixedOffset};
use powertrace_types::PowerEvent;
use tracing::{debug, warn};

use crate::parser::{boot_events, parse_boot_list, parse_unit_log};
use crate::registry::all_units;
use crate::traits::LogSource;
use crate::{Error, Result};

/// Pull every power event out of a log source.
///
/// The boot listing is mandatory: failing to read it aborts with
/// [`Error::BootList`]. Unit histories are best effort; a unit that cannot
/// be read contributes no events. The result is unordered.
pub fn extract_events<S>(source: &S, now: DateTime<FixedOffset>) -> Result<Vec<PowerEvent>>
where
    S: LogSource + ?Sized,
{
    let boot_text = source.boot_list().map_err(|cause| Error::BootList {
        source_id: source.id(),
        cause: Box::new(cause),
    })?;

    let intervals = parse_boot_list(&boot_text);
    debug!(boots = intervals.len(), "parsed boot list");

    let mut events = boot_events(&intervals, now);

    for unit in all_units() {
        match source.unit_history(unit) {
            Ok(text) => {
                let found = parse_unit_log(&text, unit);
                debug!(unit = unit.name, events = found.len(), "parsed unit history");
                events.extend(found);
            }
            Err(err) => {
                warn!(unit = unit.name, error = %err, "unit history unavailable, assuming none");
            }
        }
    }

    Ok(events)
}
