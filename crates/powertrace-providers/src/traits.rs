use crate::Result;
use crate::registry::UnitSpec;

/// Raw log retrieval
///
/// Responsibilities:
/// - Return the boot listing table (header line first, one boot per row)
/// - Return the activation history of a single unit, one log line per row
///
/// Implementations do no parsing; every query is an idempotent read.
pub trait LogSource {
    /// Short source ID used in error messages (e.g., "journal", "file")
    fn id(&self) -> &'static str;

    /// Boot listing, equivalent to `journalctl --list-boots`
    fn boot_list(&self) -> Result<String>;

    /// Unit history, equivalent to `journalctl -u <unit> -o short-iso`
    fn unit_history(&self, unit: &UnitSpec) -> Result<String>;
}
