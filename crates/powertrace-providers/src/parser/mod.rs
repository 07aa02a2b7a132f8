pub mod boot_list;
pub mod unit_log;

pub use boot_list::{SHUTDOWN_GRACE_SECS, boot_events, parse_boot_line, parse_boot_list};
pub use unit_log::{parse_unit_line, parse_unit_log};
