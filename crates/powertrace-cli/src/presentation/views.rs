use owo_colors::OwoColorize;
use powertrace_types::SessionClose;
use std::fmt;

use super::formatters::{format_duration_secs, format_event_time, format_minute, format_wall_time};
use super::view_models::{
    EventListViewModel, HistoryStatus, HistoryViewModel, SessionViewModel, SummaryViewModel,
};

const TITLE: &str = "=== Computer Boot and Shutdown History ===";
const EVENTS_TITLE: &str = "=== Power Events ===";
const TABLE_WIDTH: usize = 110;

// --------------------------------------------------------
// History View
// --------------------------------------------------------

pub struct HistoryView<'a> {
    data: &'a HistoryViewModel,
    color: bool,
}

impl<'a> HistoryView<'a> {
    pub fn new(data: &'a HistoryViewModel, color: bool) -> Self {
        Self { data, color }
    }

    fn render_sessions(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Computer work sessions:")?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<25} | {:<25} | {:<20} | {}",
            "Start", "End", "Uptime", "Type"
        )?;
        writeln!(f, "{}", "-".repeat(TABLE_WIDTH))?;

        for session in &self.data.sessions {
            writeln!(
                f,
                "{:<25} | {:<25} | {:<20} | {}",
                format_wall_time(&session.start),
                format_wall_time(&session.end),
                format_duration_secs(session.duration_secs),
                self.label(session),
            )?;
        }
        writeln!(f)
    }

    fn render_summary(&self, f: &mut fmt::Formatter, summary: &SummaryViewModel) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "=== Summary ===")?;
        writeln!(f, "Number of sessions: {}", summary.count)?;
        writeln!(f, "Total uptime: {}", format_duration_secs(summary.total_secs))?;
        writeln!(
            f,
            "Average session time: {}",
            format_duration_secs(summary.average_secs)
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Longest session: {} ({})",
            format_duration_secs(summary.longest.duration_secs),
            format_minute(&summary.longest.start)
        )?;
        writeln!(
            f,
            "Shortest session: {} ({})",
            format_duration_secs(summary.shortest.duration_secs),
            format_minute(&summary.shortest.start)
        )
    }

    fn label(&self, session: &SessionViewModel) -> String {
        if !self.color {
            return session.label.clone();
        }
        match session.close {
            SessionClose::StillActive => session.label.green().to_string(),
            SessionClose::Interrupted(_) => session.label.yellow().to_string(),
            SessionClose::Closed(_) => session.label.clone(),
        }
    }
}

impl<'a> fmt::Display for HistoryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.color {
            writeln!(f, "{}", TITLE.bold())?;
        } else {
            writeln!(f, "{}", TITLE)?;
        }
        writeln!(f)?;

        match self.data.status {
            HistoryStatus::NoEvents => writeln!(f, "No system events found."),
            HistoryStatus::NoSessions => writeln!(f, "Cannot calculate work sessions."),
            HistoryStatus::Sessions => {
                self.render_sessions(f)?;
                if let Some(summary) = &self.data.summary {
                    self.render_summary(f, summary)?;
                }
                Ok(())
            }
        }
    }
}

// --------------------------------------------------------
// Event List View
// --------------------------------------------------------

pub struct EventListView<'a> {
    data: &'a EventListViewModel,
}

impl<'a> EventListView<'a> {
    pub fn new(data: &'a EventListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for EventListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", EVENTS_TITLE)?;
        writeln!(f)?;

        if self.data.events.is_empty() {
            return writeln!(f, "No system events found.");
        }

        for event in &self.data.events {
            writeln!(f, "{:<26}  {}", format_event_time(&event.timestamp), event.kind)?;
        }
        Ok(())
    }
}
