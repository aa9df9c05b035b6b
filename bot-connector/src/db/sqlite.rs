//! SQLite database - schema definitions and connection management
//!
//! This file contains:
//! - Database struct definition
//! - Connection management (new, init)
//! - Schema creation
//!
//! All table operations are in the tables/ subdirectory.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::types::Type;
use rusqlite::{Connection, Result as SqliteResult};
use std::path::Path;

/// Main database wrapper, a single connection serialized by a Mutex
pub struct Database {
    pub(crate) conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) the database file and initialize the schema
    pub fn new(database_url: &str) -> SqliteResult<Self> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = Path::new(database_url).parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    log::warn!("Could not create database directory {:?}: {}", parent, e);
                }
            }
        }

        Self::with_connection(Connection::open(database_url)?)
    }

    #[cfg(test)]
    pub fn new_in_memory() -> SqliteResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> SqliteResult<Self> {
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.init()?;
        Ok(db)
    }

    /// Initialize all database tables
    fn init(&self) -> SqliteResult<()> {
        let conn = self.conn.lock();

        // Needed per connection for ON DELETE CASCADE
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS bots (
                id TEXT PRIMARY KEY NOT NULL,
                url TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )?;

        // Channels are keyed by (bot_id, slug); slugs repeat across bots
        conn.execute(
            "CREATE TABLE IF NOT EXISTS channels (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                bot_id TEXT NOT NULL REFERENCES bots(id) ON DELETE CASCADE,
                slug TEXT NOT NULL,
                channel_type TEXT NOT NULL,
                token TEXT,
                user_name TEXT,
                api_key TEXT,
                webhook TEXT,
                is_activated INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                UNIQUE(bot_id, slug)
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_channels_bot_id ON channels(bot_id)",
            [],
        )?;

        Ok(())
    }

    /// Cheap round trip used by the health check
    pub fn ping(&self) -> SqliteResult<()> {
        let conn = self.conn.lock();
        conn.query_row("SELECT 1", [], |_| Ok(()))
    }
}

/// Parse an RFC 3339 column, reporting bad values as a conversion failure
pub(crate) fn parse_timestamp(idx: usize, raw: &str) -> SqliteResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub(crate) fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("connector.db");
        let path = path.to_str().unwrap();

        let db = Database::new(path).unwrap();
        let bot = db.insert_bot("https://bot.example.com").unwrap();
        drop(db);

        let reopened = Database::new(path).unwrap();
        assert_eq!(reopened.get_bot(&bot.id).unwrap(), Some(bot));
        assert!(reopened.ping().is_ok());
    }

    #[test]
    fn test_parse_timestamp() {
        assert!(parse_timestamp(0, "2024-05-01T10:00:00+00:00").is_ok());
        assert!(matches!(
            parse_timestamp(3, "yesterday"),
            Err(rusqlite::Error::FromSqlConversionFailure(3, Type::Text, _))
        ));
    }
}
