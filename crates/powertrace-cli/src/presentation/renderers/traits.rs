use crate::presentation::view_models::{EventListViewModel, HistoryViewModel};
use anyhow::Result;

pub trait TimelineView {
    fn render_history(&self, history: &HistoryViewModel) -> Result<()>;
    fn render_events(&self, events: &EventListViewModel) -> Result<()>;
}
