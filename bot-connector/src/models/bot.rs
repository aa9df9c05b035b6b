use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bot registered with the connector. Owns its channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bot {
    pub id: String,
    /// Endpoint the connector forwards channel messages to
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated body for creating or replacing a bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotInput {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotUpdate {
    pub bot_id: String,
    pub input: BotInput,
}
