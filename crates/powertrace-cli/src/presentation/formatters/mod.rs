pub mod time;

pub use time::{format_duration_secs, format_event_time, format_minute, format_wall_time};
