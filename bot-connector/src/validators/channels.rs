//! Validators for the `/bots/{bot_id}/channels` routes

use std::str::FromStr;

use serde_json::{Map, Value};

use super::{body_object, bot_id, optional_str, required_bool, required_str, slug, ValidationError};
use crate::models::{ChannelInput, ChannelKey, ChannelSettings, ChannelType, ChannelUpdate, NewChannel};

pub fn create_channel_by_bot_id(raw_bot_id: &str, body: &Value) -> Result<NewChannel, ValidationError> {
    let bot_id = bot_id(raw_bot_id)?;
    let input = channel_input(body)?;
    Ok(NewChannel { bot_id, input })
}

pub fn get_channels_by_bot_id(raw_bot_id: &str) -> Result<String, ValidationError> {
    bot_id(raw_bot_id)
}

pub fn get_channel_by_bot_id(raw_bot_id: &str, channel_slug: &str) -> Result<ChannelKey, ValidationError> {
    channel_key(raw_bot_id, channel_slug)
}

pub fn update_channel_by_bot_id(
    raw_bot_id: &str,
    channel_slug: &str,
    body: &Value,
) -> Result<ChannelUpdate, ValidationError> {
    let key = channel_key(raw_bot_id, channel_slug)?;
    let input = channel_input(body)?;
    Ok(ChannelUpdate { key, input })
}

pub fn delete_channel_by_bot_id(raw_bot_id: &str, channel_slug: &str) -> Result<ChannelKey, ValidationError> {
    channel_key(raw_bot_id, channel_slug)
}

fn channel_key(raw_bot_id: &str, channel_slug: &str) -> Result<ChannelKey, ValidationError> {
    Ok(ChannelKey {
        bot_id: bot_id(raw_bot_id)?,
        slug: slug(channel_slug, "channel_slug")?,
    })
}

/// Full channel body, shared by create and update
fn channel_input(body: &Value) -> Result<ChannelInput, ValidationError> {
    let body = body_object(body)?;

    let slug = slug(required_str(body, "slug")?, "slug")?;
    let channel_type = ChannelType::from_str(required_str(body, "type")?).map_err(|_| {
        ValidationError::InvalidType {
            valid: ChannelType::valid_names(),
        }
    })?;
    let is_activated = required_bool(body, "isActivated")?;
    let settings = channel_settings(channel_type, body)?;

    Ok(ChannelInput {
        slug,
        is_activated,
        settings,
    })
}

/// Build the type-specific settings, requiring the fields that type needs.
/// Fields the type does not use are dropped.
fn channel_settings(channel_type: ChannelType, body: &Map<String, Value>) -> Result<ChannelSettings, ValidationError> {
    let token = optional_str(body, "token")?;
    let user_name = optional_str(body, "userName")?;
    let api_key = optional_str(body, "apiKey")?;
    let webhook = optional_str(body, "webhook")?;

    let need = |value: Option<&str>, field: &'static str| {
        value
            .map(str::to_string)
            .ok_or(ValidationError::MissingForType { field, channel_type })
    };

    let settings = match channel_type {
        ChannelType::Messenger => ChannelSettings::Messenger {
            token: need(token, "token")?,
            api_key: need(api_key, "apiKey")?,
            webhook: need(webhook, "webhook")?,
        },
        ChannelType::Slack => ChannelSettings::Slack {
            token: need(token, "token")?,
        },
        ChannelType::Kik => ChannelSettings::Kik {
            user_name: need(user_name, "userName")?,
            api_key: need(api_key, "apiKey")?,
            webhook: need(webhook, "webhook")?,
        },
    };
    Ok(settings)
}
