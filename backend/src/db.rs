//! SQLite access.
//!
//! A connection is opened per operation, the file path being the only shared
//! state. Blocking database work runs on tokio's blocking pool through
//! [`Database::run`] so it never stalls the actix workers.

use crate::error::ApiError;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS groups (
    id      TEXT PRIMARY KEY,
    name    TEXT NOT NULL,
    status  TEXT NOT NULL DEFAULT 'pending'
);

CREATE TABLE IF NOT EXISTS meeting_links (
    id                  TEXT PRIMARY KEY,
    platform            TEXT NOT NULL,
    name                TEXT NOT NULL,
    url                 TEXT NOT NULL,
    status              TEXT NOT NULL DEFAULT 'available',
    reserved_for_group  TEXT REFERENCES groups(id)
);

CREATE TABLE IF NOT EXISTS sessions (
    id              TEXT PRIMARY KEY,
    group_id        TEXT NOT NULL REFERENCES groups(id),
    title           TEXT NOT NULL,
    scheduled_date  TEXT NOT NULL,
    start_time      TEXT NOT NULL,
    end_time        TEXT NOT NULL,
    link_id         TEXT REFERENCES meeting_links(id)
);

CREATE TABLE IF NOT EXISTS message_templates (
    template_type   TEXT PRIMARY KEY,
    content_ar      TEXT NOT NULL,
    content_en      TEXT NOT NULL,
    updated_at      TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS outbox (
    id              TEXT PRIMARY KEY,
    template_type   TEXT NOT NULL,
    destination     TEXT NOT NULL,
    body            TEXT NOT NULL,
    created_at      TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);
"#;

#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn open(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(conn)
    }

    /// Creates missing tables. Safe to call on every start.
    pub fn init_schema(&self) -> rusqlite::Result<()> {
        self.open()?.execute_batch(SCHEMA)
    }

    /// Runs `f` with a fresh connection on the blocking thread pool.
    pub async fn run<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T, ApiError> + Send + 'static,
    {
        let db = self.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = db.open()?;
            f(&mut conn)
        })
        .await
        .map_err(|e| ApiError::Task(e.to_string()))?
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Database;
    use rusqlite::params;
    use tempfile::NamedTempFile;

    /// A database in a temporary file; the file lives as long as the guard.
    pub(crate) fn temp_database() -> (NamedTempFile, Database) {
        let file = NamedTempFile::new().expect("temp file");
        let db = Database::new(file.path());
        db.init_schema().expect("schema");
        (file, db)
    }

    pub(crate) fn insert_group(db: &Database, id: &str) {
        db.open()
            .expect("open")
            .execute(
                "INSERT INTO groups (id, name) VALUES (?1, ?2)",
                params![id, format!("Group {id}")],
            )
            .expect("insert group");
    }

    /// Inserts `count` sessions on consecutive days in January.
    pub(crate) fn insert_sessions(db: &Database, group_id: &str, count: usize) {
        let conn = db.open().expect("open");
        for i in 0..count {
            conn.execute(
                "INSERT INTO sessions (id, group_id, title, scheduled_date, start_time, end_time)
                 VALUES (?1, ?2, ?3, ?4, '17:00', '18:30')",
                params![
                    format!("{group_id}-s{i}"),
                    group_id,
                    format!("Session {}", i + 1),
                    format!("2026-01-{:02}", i + 1),
                ],
            )
            .expect("insert session");
        }
    }

    pub(crate) fn insert_link(db: &Database, id: &str, reserved_for: Option<&str>) {
        let status = if reserved_for.is_some() { "reserved" } else { "available" };
        db.open()
            .expect("open")
            .execute(
                "INSERT INTO meeting_links (id, platform, name, url, status, reserved_for_group)
                 VALUES (?1, 'zoom', ?2, ?3, ?4, ?5)",
                params![
                    id,
                    format!("Room {id}"),
                    format!("https://zoom.example/{id}"),
                    status,
                    reserved_for
                ],
            )
            .expect("insert link");
    }
}
