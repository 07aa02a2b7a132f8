// Error types
pub mod error;

// Trait-based architecture (public API)
pub mod traits;

// Log source implementations
pub mod file;
pub mod journal;

// Record parsers
pub mod parser;

// Timestamp rules, one per record format
pub mod timestamp;

// Unit registry
pub mod registry;

// Extraction entry point
pub mod extract;

// Traits
pub use traits::LogSource;

// Sources
pub use file::FileSource;
pub use journal::{DEFAULT_JOURNALCTL, JournalSource};

// Parsers
pub use parser::{boot_events, parse_boot_list, parse_unit_log};

// Registry
pub use registry::{HIBERNATE_UNIT, SUSPEND_UNIT, UnitSpec, all_units};

// Timestamps
pub use timestamp::{RecordFormat, TimestampRule};

// Extraction
pub use extract::extract_events;

// Error types
pub use error::{Error, Result};
