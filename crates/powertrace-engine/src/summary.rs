use chrono::TimeDelta;
use powertrace_types::Session;

/// Aggregate statistics over a non-empty session list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub count: usize,
    pub total: TimeDelta,
    pub average: TimeDelta,
    /// First session with the greatest duration
    pub longest: Session,
    /// First session with the smallest duration
    pub shortest: Session,
}

/// Summarize sessions. Returns None for an empty list, where an average is
/// undefined.
pub fn summarize(sessions: &[Session]) -> Option<SessionSummary> {
    let (first, rest) = sessions.split_first()?;

    let total = sessions
        .iter()
        .map(Session::duration)
        .fold(TimeDelta::zero(), |acc, d| acc + d);
    let count = sessions.len();
    let average = TimeDelta::milliseconds(total.num_milliseconds() / count as i64);

    let mut longest = first;
    let mut shortest = first;
    for session in rest {
        if session.duration() > longest.duration() {
            longest = session;
        }
        if session.duration() < shortest.duration() {
            shortest = session;
        }
    }

    Some(SessionSummary {
        count,
        total,
        average,
        longest: longest.clone(),
        shortest: shortest.clone(),
    })
}
