use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One row of the boot listing: the first and last journal entry of a boot.
///
/// For the boot that is currently running, `last_entry` is simply the most
/// recent journal line, not a shutdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootInterval {
    /// Relative boot index as printed by the listing (e.g. "-1", "0")
    pub index: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_id: Option<String>,

    pub first_entry: DateTime<FixedOffset>,
    pub last_entry: DateTime<FixedOffset>,
}
