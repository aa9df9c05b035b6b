use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Messaging platforms a channel can connect to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChannelType {
    Messenger,
    Slack,
    Kik,
}

impl ChannelType {
    /// Comma separated list of accepted type names, for error messages
    pub fn valid_names() -> String {
        Self::iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Platform-specific credentials of a channel.
///
/// Each variant holds exactly the fields its platform needs, so a settings
/// value cannot exist without them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelSettings {
    Messenger {
        token: String,
        api_key: String,
        webhook: String,
    },
    Slack {
        token: String,
    },
    Kik {
        user_name: String,
        api_key: String,
        webhook: String,
    },
}

impl ChannelSettings {
    pub fn channel_type(&self) -> ChannelType {
        match self {
            Self::Messenger { .. } => ChannelType::Messenger,
            Self::Slack { .. } => ChannelType::Slack,
            Self::Kik { .. } => ChannelType::Kik,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Messenger { token, .. } | Self::Slack { token } => Some(token),
            Self::Kik { .. } => None,
        }
    }

    pub fn user_name(&self) -> Option<&str> {
        match self {
            Self::Kik { user_name, .. } => Some(user_name),
            Self::Messenger { .. } | Self::Slack { .. } => None,
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        match self {
            Self::Messenger { api_key, .. } | Self::Kik { api_key, .. } => Some(api_key),
            Self::Slack { .. } => None,
        }
    }

    pub fn webhook(&self) -> Option<&str> {
        match self {
            Self::Messenger { webhook, .. } | Self::Kik { webhook, .. } => Some(webhook),
            Self::Slack { .. } => None,
        }
    }
}

/// Validated create/update body. Updates replace every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInput {
    pub slug: String,
    pub is_activated: bool,
    pub settings: ChannelSettings,
}

/// Identifies a channel: slugs are only unique within a bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelKey {
    pub bot_id: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChannel {
    pub bot_id: String,
    pub input: ChannelInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelUpdate {
    pub key: ChannelKey,
    pub input: ChannelInput,
}

/// Channel as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    /// Id of the owning bot
    pub bot: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    pub token: Option<String>,
    pub user_name: Option<String>,
    pub api_key: Option<String>,
    pub webhook: Option<String>,
    pub is_activated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
