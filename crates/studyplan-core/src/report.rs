//! Presentation of scheduler output.
//!
//! Pure projections only: nothing here influences which sessions are
//! accepted.

use serde::Serialize;

use crate::i18n::{fill, Language};
use crate::scheduler::{ScheduleDecision, WeeklySchedule};
use crate::session::SessionRequest;

/// Counts for the completion line of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub scheduled: usize,
    pub rejected: usize,
}

impl RunSummary {
    pub fn from_decisions(decisions: &[ScheduleDecision<'_>]) -> Self {
        let scheduled = decisions.iter().filter(|d| d.outcome.is_accepted()).count();
        Self {
            scheduled,
            rejected: decisions.len() - scheduled,
        }
    }
}

/// Everything a run produced, ready for JSON output.
#[derive(Debug, Serialize)]
pub struct RunReport<'r, 'a> {
    pub schedule: &'r WeeklySchedule<'a>,
    pub decisions: &'r [ScheduleDecision<'a>],
    pub summary: RunSummary,
}

impl<'r, 'a> RunReport<'r, 'a> {
    pub fn new(schedule: &'r WeeklySchedule<'a>, decisions: &'r [ScheduleDecision<'a>]) -> Self {
        Self {
            schedule,
            decisions,
            summary: RunSummary::from_decisions(decisions),
        }
    }
}

/// One localized log line for a decision.
pub fn decision_line(decision: &ScheduleDecision<'_>, lang: Language) -> String {
    let catalog = lang.catalog();
    let request = decision.request;
    let day = catalog.day(request.day);
    if decision.outcome.is_accepted() {
        fill(
            catalog.accepted,
            &[
                ("day", &day),
                ("name", &request.name),
                ("start", &request.start),
                ("end", &request.end),
            ],
        )
    } else {
        fill(catalog.rejected, &[("day", &day), ("name", &request.name)])
    }
}

pub fn summary_line(summary: RunSummary, lang: Language) -> String {
    fill(
        lang.catalog().complete,
        &[("sch", &summary.scheduled), ("rej", &summary.rejected)],
    )
}

/// Start line, one line per decision in trail order, completion line.
pub fn run_log(decisions: &[ScheduleDecision<'_>], lang: Language) -> Vec<String> {
    let mut lines = Vec::with_capacity(decisions.len() + 2);
    lines.push(lang.catalog().exec_start.to_string());
    lines.extend(decisions.iter().map(|d| decision_line(d, lang)));
    lines.push(summary_line(RunSummary::from_decisions(decisions), lang));
    lines
}

/// Day-by-day timetable of accepted sessions.
pub fn render_timetable(schedule: &WeeklySchedule<'_>, lang: Language) -> String {
    let catalog = lang.catalog();
    let mut out = String::new();
    out.push_str(catalog.output_header);
    out.push('\n');

    for day in schedule.days() {
        let label = catalog.day_short(day.day);
        if day.is_empty() {
            out.push_str(&format!("{label:<5}-\n"));
            continue;
        }
        for (i, session) in day.iter().enumerate() {
            let prefix = if i == 0 { label } else { "" };
            out.push_str(&format!(
                "{prefix:<5}{}-{}  {}\n",
                session.start, session.end, session.name
            ));
        }
    }
    out
}

/// The raw queue in insertion order.
pub fn render_queue(requests: &[SessionRequest], lang: Language) -> String {
    let catalog = lang.catalog();
    let mut out = format!(
        "{} ({})\n",
        catalog.queue_header,
        fill(catalog.items_count, &[("count", &requests.len())])
    );
    if requests.is_empty() {
        out.push_str(catalog.empty_queue);
        out.push('\n');
        return out;
    }
    for request in requests {
        out.push_str(&format!(
            "{}  {} | {} - {}  [{}]\n",
            request.name,
            catalog.day(request.day),
            request.start,
            request.end,
            request.id
        ));
    }
    out
}
