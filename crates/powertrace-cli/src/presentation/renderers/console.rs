use super::traits::TimelineView;
use crate::presentation::view_models::{EventListViewModel, HistoryViewModel};
use crate::presentation::views::{EventListView, HistoryView};
use crate::types::OutputFormat;
use anyhow::Result;
use serde::Serialize;

/// Writes view models to stdout, as text or as JSON
pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    fn print_json<T: Serialize>(value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

impl TimelineView for ConsoleRenderer {
    fn render_history(&self, history: &HistoryViewModel) -> Result<()> {
        match self.format {
            OutputFormat::Json => Self::print_json(history),
            OutputFormat::Plain => {
                print!("{}", HistoryView::new(history, self.color));
                Ok(())
            }
        }
    }

    fn render_events(&self, events: &EventListViewModel) -> Result<()> {
        match self.format {
            OutputFormat::Json => Self::print_json(events),
            OutputFormat::Plain => {
                print!("{}", EventListView::new(events));
                Ok(())
            }
        }
    }
}
