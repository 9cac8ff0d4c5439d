//! Scheduler run command for CLI.

use studyplan_core::report::{decision_line, render_timetable, run_log, RunReport};
use studyplan_core::{schedule, Config, SessionDb};

pub fn run(json: bool, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let db = SessionDb::open()?;
    let store = db.load_store()?;
    let (weekly, decisions) = schedule(store.requests());

    if json {
        let report = RunReport::new(&weekly, &decisions);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let lang = config.language;
    if config.display.show_log {
        for line in run_log(&decisions, lang) {
            println!("{line}");
        }
        println!();
    }

    print!("{}", render_timetable(&weekly, lang));

    if config.display.show_rejected {
        for decision in decisions.iter().filter(|d| !d.outcome.is_accepted()) {
            println!("{}", decision_line(decision, lang));
        }
    }
    Ok(())
}
