//! Channel database operations
//!
//! Every write runs its existence and slug checks inside the same
//! transaction as the mutation, while the connection lock is held, so two
//! concurrent writers can never both claim a slug. The UNIQUE(bot_id, slug)
//! constraint backs this up.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};

use crate::models::{Channel, ChannelInput, ChannelKey, ChannelType};
use super::super::sqlite::{is_constraint_violation, parse_timestamp};
use super::super::Database;
use super::bots::bot_exists;

/// Result of a channel operation that can miss its bot or channel
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelOutcome<T> {
    Done(T),
    BotMissing,
    ChannelMissing,
    SlugTaken,
}

const CHANNEL_COLUMNS: &str =
    "bot_id, slug, channel_type, token, user_name, api_key, webhook, is_activated, created_at, updated_at";

fn channel_from_row(row: &Row) -> SqliteResult<Channel> {
    let type_str: String = row.get(2)?;
    let channel_type = ChannelType::from_str(&type_str)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;
    let created_at_str: String = row.get(8)?;
    let updated_at_str: String = row.get(9)?;

    Ok(Channel {
        bot: row.get(0)?,
        slug: row.get(1)?,
        channel_type,
        token: row.get(3)?,
        user_name: row.get(4)?,
        api_key: row.get(5)?,
        webhook: row.get(6)?,
        is_activated: row.get(7)?,
        created_at: parse_timestamp(8, &created_at_str)?,
        updated_at: parse_timestamp(9, &updated_at_str)?,
    })
}

fn query_channel(conn: &Connection, bot_id: &str, slug: &str) -> SqliteResult<Option<Channel>> {
    conn.query_row(
        &format!("SELECT {} FROM channels WHERE bot_id = ?1 AND slug = ?2", CHANNEL_COLUMNS),
        [bot_id, slug],
        channel_from_row,
    )
    .optional()
}

fn channel_from_input(
    bot_id: &str,
    input: &ChannelInput,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Channel {
    let settings = &input.settings;
    Channel {
        bot: bot_id.to_string(),
        slug: input.slug.clone(),
        channel_type: settings.channel_type(),
        token: settings.token().map(str::to_string),
        user_name: settings.user_name().map(str::to_string),
        api_key: settings.api_key().map(str::to_string),
        webhook: settings.webhook().map(str::to_string),
        is_activated: input.is_activated,
        created_at,
        updated_at,
    }
}

impl Database {
    /// Create a channel under a bot
    pub fn insert_channel(&self, bot_id: &str, input: &ChannelInput) -> SqliteResult<ChannelOutcome<Channel>> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;

        if !bot_exists(&tx, bot_id)? {
            return Ok(ChannelOutcome::BotMissing);
        }
        if query_channel(&tx, bot_id, &input.slug)?.is_some() {
            return Ok(ChannelOutcome::SlugTaken);
        }

        let now = Utc::now();
        let channel = channel_from_input(bot_id, input, now, now);
        let inserted = tx.execute(
            "INSERT INTO channels (bot_id, slug, channel_type, token, user_name, api_key, webhook, is_activated, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                channel.bot,
                channel.slug,
                channel.channel_type.to_string(),
                channel.token,
                channel.user_name,
                channel.api_key,
                channel.webhook,
                channel.is_activated,
                now.to_rfc3339(),
                now.to_rfc3339(),
            ],
        );
        match inserted {
            Ok(_) => {}
            Err(e) if is_constraint_violation(&e) => return Ok(ChannelOutcome::SlugTaken),
            Err(e) => return Err(e),
        }

        tx.commit()?;
        Ok(ChannelOutcome::Done(channel))
    }

    /// All channels of a bot, in creation order
    pub fn list_channels(&self, bot_id: &str) -> SqliteResult<ChannelOutcome<Vec<Channel>>> {
        let conn = self.conn.lock();

        if !bot_exists(&conn, bot_id)? {
            return Ok(ChannelOutcome::BotMissing);
        }

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM channels WHERE bot_id = ?1 ORDER BY id",
            CHANNEL_COLUMNS
        ))?;
        let channels = stmt
            .query_map([bot_id], channel_from_row)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(ChannelOutcome::Done(channels))
    }

    pub fn get_channel(&self, key: &ChannelKey) -> SqliteResult<ChannelOutcome<Channel>> {
        let conn = self.conn.lock();

        if !bot_exists(&conn, &key.bot_id)? {
            return Ok(ChannelOutcome::BotMissing);
        }

        Ok(match query_channel(&conn, &key.bot_id, &key.slug)? {
            Some(channel) => ChannelOutcome::Done(channel),
            None => ChannelOutcome::ChannelMissing,
        })
    }

    /// Replace every field of a channel, possibly renaming it.
    /// On a slug conflict nothing is written.
    pub fn update_channel(&self, key: &ChannelKey, input: &ChannelInput) -> SqliteResult<ChannelOutcome<Channel>> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;

        if !bot_exists(&tx, &key.bot_id)? {
            return Ok(ChannelOutcome::BotMissing);
        }
        let existing = match query_channel(&tx, &key.bot_id, &key.slug)? {
            Some(channel) => channel,
            None => return Ok(ChannelOutcome::ChannelMissing),
        };
        if input.slug != key.slug && query_channel(&tx, &key.bot_id, &input.slug)?.is_some() {
            return Ok(ChannelOutcome::SlugTaken);
        }

        let now = Utc::now();
        let channel = channel_from_input(&key.bot_id, input, existing.created_at, now);
        let updated = tx.execute(
            "UPDATE channels
             SET slug = ?1, channel_type = ?2, token = ?3, user_name = ?4, api_key = ?5, webhook = ?6,
                 is_activated = ?7, updated_at = ?8
             WHERE bot_id = ?9 AND slug = ?10",
            params![
                channel.slug,
                channel.channel_type.to_string(),
                channel.token,
                channel.user_name,
                channel.api_key,
                channel.webhook,
                channel.is_activated,
                now.to_rfc3339(),
                key.bot_id,
                key.slug,
            ],
        );
        match updated {
            Ok(_) => {}
            Err(e) if is_constraint_violation(&e) => return Ok(ChannelOutcome::SlugTaken),
            Err(e) => return Err(e),
        }

        tx.commit()?;
        Ok(ChannelOutcome::Done(channel))
    }

    pub fn delete_channel(&self, key: &ChannelKey) -> SqliteResult<ChannelOutcome<()>> {
        let conn = self.conn.lock();

        if !bot_exists(&conn, &key.bot_id)? {
            return Ok(ChannelOutcome::BotMissing);
        }

        let rows_affected = conn.execute(
            "DELETE FROM channels WHERE bot_id = ?1 AND slug = ?2",
            [&key.bot_id, &key.slug],
        )?;
        Ok(if rows_affected > 0 {
            ChannelOutcome::Done(())
        } else {
            ChannelOutcome::ChannelMissing
        })
    }
}
