//! Bot database operations

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use uuid::Uuid;

use crate::models::Bot;
use super::super::sqlite::parse_timestamp;
use super::super::Database;

fn bot_from_row(row: &Row) -> SqliteResult<Bot> {
    let created_at_str: String = row.get(2)?;
    let updated_at_str: String = row.get(3)?;

    Ok(Bot {
        id: row.get(0)?,
        url: row.get(1)?,
        created_at: parse_timestamp(2, &created_at_str)?,
        updated_at: parse_timestamp(3, &updated_at_str)?,
    })
}

fn query_bot(conn: &Connection, bot_id: &str) -> SqliteResult<Option<Bot>> {
    conn.query_row(
        "SELECT id, url, created_at, updated_at FROM bots WHERE id = ?1",
        [bot_id],
        bot_from_row,
    )
    .optional()
}

pub(super) fn bot_exists(conn: &Connection, bot_id: &str) -> SqliteResult<bool> {
    conn.query_row("SELECT COUNT(*) FROM bots WHERE id = ?1", [bot_id], |row| {
        row.get::<_, i64>(0)
    })
    .map(|c| c > 0)
}

impl Database {
    /// Register a new bot with a freshly generated id
    pub fn insert_bot(&self, url: &str) -> SqliteResult<Bot> {
        let conn = self.conn.lock();
        let now = Utc::now();
        let bot = Bot {
            id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            created_at: now,
            updated_at: now,
        };

        conn.execute(
            "INSERT INTO bots (id, url, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)",
            params![bot.id, bot.url, now.to_rfc3339(), now.to_rfc3339()],
        )?;

        Ok(bot)
    }

    pub fn get_bot(&self, bot_id: &str) -> SqliteResult<Option<Bot>> {
        let conn = self.conn.lock();
        query_bot(&conn, bot_id)
    }

    /// List all bots, oldest first
    pub fn list_bots(&self) -> SqliteResult<Vec<Bot>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, url, created_at, updated_at FROM bots ORDER BY created_at, id",
        )?;
        let bots = stmt
            .query_map([], bot_from_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(bots)
    }

    /// Replace a bot's url. Returns None if the bot doesn't exist.
    pub fn update_bot(&self, bot_id: &str, url: &str) -> SqliteResult<Option<Bot>> {
        let conn = self.conn.lock();
        let now = Utc::now().to_rfc3339();

        let rows_affected = conn.execute(
            "UPDATE bots SET url = ?1, updated_at = ?2 WHERE id = ?3",
            [url, &now, bot_id],
        )?;
        if rows_affected == 0 {
            return Ok(None);
        }

        query_bot(&conn, bot_id)
    }

    /// Delete a bot and, through the foreign key, all of its channels
    pub fn delete_bot(&self, bot_id: &str) -> SqliteResult<bool> {
        let conn = self.conn.lock();
        let rows_affected = conn.execute("DELETE FROM bots WHERE id = ?1", [bot_id])?;
        Ok(rows_affected > 0)
    }
}
