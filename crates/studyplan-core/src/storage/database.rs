//! SQLite-based persistence for the session queue.
//!
//! Sessions are kept in insertion order through an autoincrement sequence
//! column, so a reloaded queue schedules exactly like the one that was saved.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::data_dir;
use crate::error::{DatabaseError, Result};
use crate::session::{SessionRequest, TimeOfDay, Weekday};
use crate::store::SessionStore;

/// SQLite database holding the session queue.
pub struct SessionDb {
    conn: Connection,
}

/// Raw column values before they are checked.
struct SessionRow {
    id: String,
    name: String,
    day: String,
    start_min: u16,
    end_min: u16,
    created_at: String,
}

impl SessionRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            day: row.get(2)?,
            start_min: row.get(3)?,
            end_min: row.get(4)?,
            created_at: row.get(5)?,
        })
    }

    fn into_request(self) -> Result<SessionRequest, DatabaseError> {
        let corrupt = |message: String| DatabaseError::Corrupt {
            id: self.id.clone(),
            message,
        };
        let day: Weekday = self.day.parse().map_err(|e| corrupt(format!("{e}")))?;
        let start = TimeOfDay::from_minutes(self.start_min)
            .ok_or_else(|| corrupt(format!("start minute {} out of range", self.start_min)))?;
        let end = TimeOfDay::from_minutes(self.end_min)
            .ok_or_else(|| corrupt(format!("end minute {} out of range", self.end_min)))?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| corrupt(format!("bad created_at: {e}")))?
            .with_timezone(&Utc);

        Ok(SessionRequest {
            id: self.id,
            name: self.name,
            day,
            start,
            end,
            created_at,
        })
    }
}

const SELECT_COLUMNS: &str = "SELECT id, name, day, start_min, end_min, created_at FROM sessions";

impl SessionDb {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `<data dir>/studyplan.db`.
    ///
    /// # Errors
    /// Returns an error if the data directory or database cannot be opened.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("studyplan.db");
        Self::open_at(&path)
    }

    /// Open (or create) the database at `path`.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS sessions (
                seq         INTEGER PRIMARY KEY AUTOINCREMENT,
                id          TEXT NOT NULL UNIQUE,
                name        TEXT NOT NULL,
                day         TEXT NOT NULL,
                start_min   INTEGER NOT NULL,
                end_min     INTEGER NOT NULL,
                created_at  TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_sessions_day ON sessions(day);",
        )
    }

    /// Append a session to the queue.
    ///
    /// # Errors
    /// Returns an error if the insert fails, e.g. on a duplicate id.
    pub fn insert_session(&self, request: &SessionRequest) -> Result<()> {
        self.conn.execute(
            "INSERT INTO sessions (id, name, day, start_min, end_min, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                request.id,
                request.name,
                request.day.as_str(),
                request.start.minutes(),
                request.end.minutes(),
                request.created_at.to_rfc3339(),
            ],
        )?;
        tracing::debug!(id = %request.id, "session persisted");
        Ok(())
    }

    /// All sessions in insertion order.
    pub fn list_sessions(&self) -> Result<Vec<SessionRequest>> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY seq"))?;
        let rows = stmt.query_map([], SessionRow::from_row)?;

        let mut sessions = Vec::new();
        for row in rows {
            sessions.push(row?.into_request()?);
        }
        Ok(sessions)
    }

    pub fn get_session(&self, id: &str) -> Result<Option<SessionRequest>> {
        let row = self
            .conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id],
                SessionRow::from_row,
            )
            .optional()?;
        Ok(row.map(SessionRow::into_request).transpose()?)
    }

    /// Delete one session. Returns `false` if no row had that id.
    pub fn delete_session(&self, id: &str) -> Result<bool> {
        let count = self
            .conn
            .execute("DELETE FROM sessions WHERE id = ?1", params![id])?;
        tracing::debug!(id, deleted = (count > 0), "session delete");
        Ok(count > 0)
    }

    /// Delete every session and return how many were removed.
    pub fn clear_sessions(&self) -> Result<usize> {
        let count = self.conn.execute("DELETE FROM sessions", [])?;
        tracing::debug!(count, "session queue cleared");
        Ok(count)
    }

    /// Load the persisted queue as an owned store snapshot.
    pub fn load_store(&self) -> Result<SessionStore> {
        Ok(SessionStore::from_requests(self.list_sessions()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionDraft;

    fn admitted(name: &str, day: &str, start: &str, end: &str) -> SessionRequest {
        SessionRequest::admit(SessionDraft::parse(name, day, start, end).unwrap()).unwrap()
    }

    #[test]
    fn insert_and_list_preserves_order() {
        let db = SessionDb::open_memory().unwrap();
        let b = admitted("B", "mon", "10:00", "11:00");
        let a = admitted("A", "mon", "09:00", "10:00");
        db.insert_session(&b).unwrap();
        db.insert_session(&a).unwrap();

        let listed = db.list_sessions().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, b.id);
        assert_eq!(listed[1], a);
    }

    #[test]
    fn get_session_returns_none_for_unknown_id() {
        let db = SessionDb::open_memory().unwrap();
        let a = admitted("A", "tue", "09:00", "10:00");
        db.insert_session(&a).unwrap();
        assert_eq!(db.get_session(&a.id).unwrap().unwrap().name, "A");
        assert!(db.get_session("nope").unwrap().is_none());
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let db = SessionDb::open_memory().unwrap();
        let a = admitted("A", "tue", "09:00", "10:00");
        db.insert_session(&a).unwrap();
        assert!(db.insert_session(&a).is_err());
    }

    #[test]
    fn delete_and_clear() {
        let db = SessionDb::open_memory().unwrap();
        let a = admitted("A", "wed", "09:00", "10:00");
        let b = admitted("B", "wed", "10:00", "11:00");
        db.insert_session(&a).unwrap();
        db.insert_session(&b).unwrap();

        assert!(db.delete_session(&a.id).unwrap());
        assert!(!db.delete_session(&a.id).unwrap());
        assert_eq!(db.clear_sessions().unwrap(), 1);
        assert!(db.list_sessions().unwrap().is_empty());
    }

    #[test]
    fn corrupt_day_is_reported() {
        let db = SessionDb::open_memory().unwrap();
        db.conn()
            .execute(
                "INSERT INTO sessions (id, name, day, start_min, end_min, created_at)
                 VALUES ('x', 'X', 'Caturday', 60, 120, '2026-01-05T09:00:00+00:00')",
                [],
            )
            .unwrap();
        let err = db.list_sessions().unwrap_err();
        assert!(err.to_string().contains("corrupt"), "{err}");
    }

    #[test]
    fn malformed_interval_rows_still_load() {
        let db = SessionDb::open_memory().unwrap();
        db.conn()
            .execute(
                "INSERT INTO sessions (id, name, day, start_min, end_min, created_at)
                 VALUES ('m', 'M', 'Monday', 600, 540, '2026-01-05T09:00:00+00:00')",
                [],
            )
            .unwrap();
        let store = db.load_store().unwrap();
        assert_eq!(store.len(), 1);
        assert!(!store.requests()[0].is_well_formed());
    }
}
