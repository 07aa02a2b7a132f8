//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!                                                                  ==(Text)==> [ View ] --> Output
//! ```
//!
//! View models carry raw data (instants, seconds), never formatted strings,
//! so `--format json` stays a stable API. Formatting happens in views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, TimelineView};
pub use view_models::{EventListViewModel, HistoryStatus, HistoryViewModel};
