//! Integration tests for the planner workflow.
//!
//! Queue sessions through the store and database, run the scheduler, and
//! check the decisions and rendered output end to end.

use studyplan_core::report::{render_timetable, run_log};
use studyplan_core::{
    Language, Outcome, RejectReason, SessionDb, SessionDraft, SessionRequest, SessionStore, Weekday,
};

fn draft(name: &str, day: &str, start: &str, end: &str) -> SessionDraft {
    SessionDraft::parse(name, day, start, end).unwrap()
}

#[test]
fn monday_scenario_accepts_first_and_last() {
    let mut store = SessionStore::new();
    let a = store.add(draft("A", "Monday", "09:00", "10:30")).unwrap().id.clone();
    let b = store.add(draft("B", "Monday", "10:00", "11:00")).unwrap().id.clone();
    let c = store.add(draft("C", "Monday", "11:00", "12:00")).unwrap().id.clone();

    let (weekly, decisions) = store.schedule();
    let monday: Vec<_> = weekly.day(Weekday::Monday).iter().map(|s| s.id.clone()).collect();
    assert_eq!(monday, vec![a.clone(), c]);

    let rejected: Vec<_> = decisions.iter().filter(|d| !d.outcome.is_accepted()).collect();
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].request.id, b);
    assert_eq!(
        rejected[0].outcome,
        Outcome::Rejected {
            reason: RejectReason::Conflict { with: a }
        }
    );
}

#[test]
fn sessions_touching_at_ten_are_both_accepted() {
    let mut store = SessionStore::new();
    store.add(draft("Before", "sat", "08:00", "10:00")).unwrap();
    store.add(draft("After", "sat", "10:00", "11:30")).unwrap();
    let (weekly, decisions) = store.schedule();
    assert_eq!(weekly.day(Weekday::Saturday).len(), 2);
    assert!(decisions.iter().all(|d| d.outcome.is_accepted()));
}

#[test]
fn persisted_queue_reschedules_after_delete() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studyplan.db");

    let first = SessionRequest::admit(draft("Lecture", "wed", "09:00", "11:00")).unwrap();
    let second = SessionRequest::admit(draft("Lab", "wed", "10:00", "12:00")).unwrap();
    {
        let db = SessionDb::open_at(&path).unwrap();
        db.insert_session(&first).unwrap();
        db.insert_session(&second).unwrap();
    }

    let db = SessionDb::open_at(&path).unwrap();
    let store = db.load_store().unwrap();
    {
        let (weekly, _) = store.schedule();
        assert!(weekly.contains(&first.id));
        assert!(!weekly.contains(&second.id));
    }

    assert!(db.delete_session(&first.id).unwrap());
    let store = db.load_store().unwrap();
    let (weekly, _) = store.schedule();
    assert!(weekly.contains(&second.id));
}

#[test]
fn cleared_queue_schedules_nothing() {
    let db = SessionDb::open_memory().unwrap();
    for (name, day) in [("Art", "mon"), ("Music", "tue"), ("Sport", "sun")] {
        let request = SessionRequest::admit(draft(name, day, "09:00", "10:00")).unwrap();
        db.insert_session(&request).unwrap();
    }
    assert_eq!(db.clear_sessions().unwrap(), 3);

    let store = db.load_store().unwrap();
    let (weekly, decisions) = store.schedule();
    assert!(weekly.is_empty());
    assert!(decisions.is_empty());
}

#[test]
fn localized_run_log_and_timetable() {
    let mut store = SessionStore::new();
    store.add(draft("Física", "mon", "09:00", "10:00")).unwrap();
    store.add(draft("Química", "mon", "09:30", "10:30")).unwrap();

    let (weekly, decisions) = store.schedule();
    let log = run_log(&decisions, Language::Es);
    assert_eq!(log.first().map(String::as_str), Some("EJECUCIÓN INICIADA: Planificador Voraz"));
    assert_eq!(log[2], "[RECHAZADO] Lunes: Química (Conflicto)");
    assert_eq!(log.last().map(String::as_str), Some("EJECUCIÓN COMPLETA. Programados: 1 | Rechazados: 1"));

    let table = render_timetable(&weekly, Language::Es);
    assert!(table.contains("LUN  09:00-10:00  Física"));
    assert!(table.contains("DOM  -"));
}
