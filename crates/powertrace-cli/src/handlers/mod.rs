pub mod events;
pub mod history;
