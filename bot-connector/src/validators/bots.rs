//! Validators for the `/bots` routes

use serde_json::Value;
use url::Url;

use super::{body_object, bot_id, required_str, ValidationError};
use crate::models::{BotInput, BotUpdate};

pub fn create_bot(body: &Value) -> Result<BotInput, ValidationError> {
    bot_input(body)
}

pub fn get_bot_by_id(raw_bot_id: &str) -> Result<String, ValidationError> {
    bot_id(raw_bot_id)
}

pub fn update_bot_by_id(raw_bot_id: &str, body: &Value) -> Result<BotUpdate, ValidationError> {
    let bot_id = bot_id(raw_bot_id)?;
    let input = bot_input(body)?;
    Ok(BotUpdate { bot_id, input })
}

pub fn delete_bot_by_id(raw_bot_id: &str) -> Result<String, ValidationError> {
    bot_id(raw_bot_id)
}

fn bot_input(body: &Value) -> Result<BotInput, ValidationError> {
    let body = body_object(body)?;
    let raw_url = required_str(body, "url")?;

    let url = Url::parse(raw_url).map_err(|_| ValidationError::Invalid("url"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ValidationError::Invalid("url"));
    }

    Ok(BotInput {
        url: raw_url.to_string(),
    })
}
