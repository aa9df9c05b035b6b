use crate::db::{ChannelOutcome, Database};
use crate::error::ApiError;
use crate::models::{Channel, ChannelKey, ChannelUpdate, NewChannel};

/// Business logic for the channel routes, one method per route
pub trait ChannelController: Send + Sync {
    fn create_channel_by_bot_id(&self, request: NewChannel) -> Result<Channel, ApiError>;
    fn get_channels_by_bot_id(&self, bot_id: &str) -> Result<Vec<Channel>, ApiError>;
    fn get_channel_by_bot_id(&self, key: ChannelKey) -> Result<Channel, ApiError>;
    fn update_channel_by_bot_id(&self, request: ChannelUpdate) -> Result<Channel, ApiError>;
    fn delete_channel_by_bot_id(&self, key: ChannelKey) -> Result<(), ApiError>;
}

/// Map a storage outcome to the HTTP error it stands for
fn into_result<T>(outcome: ChannelOutcome<T>, slug: &str) -> Result<T, ApiError> {
    match outcome {
        ChannelOutcome::Done(value) => Ok(value),
        ChannelOutcome::BotMissing => Err(ApiError::bot_not_found()),
        ChannelOutcome::ChannelMissing => Err(ApiError::channel_not_found()),
        ChannelOutcome::SlugTaken => Err(ApiError::slug_taken(slug)),
    }
}

impl ChannelController for Database {
    fn create_channel_by_bot_id(&self, request: NewChannel) -> Result<Channel, ApiError> {
        let outcome = self.insert_channel(&request.bot_id, &request.input)?;
        let channel = into_result(outcome, &request.input.slug)?;
        log::info!(
            "Created {} channel {} for bot {}",
            channel.channel_type,
            channel.slug,
            channel.bot
        );
        Ok(channel)
    }

    fn get_channels_by_bot_id(&self, bot_id: &str) -> Result<Vec<Channel>, ApiError> {
        into_result(self.list_channels(bot_id)?, "")
    }

    fn get_channel_by_bot_id(&self, key: ChannelKey) -> Result<Channel, ApiError> {
        into_result(self.get_channel(&key)?, &key.slug)
    }

    fn update_channel_by_bot_id(&self, request: ChannelUpdate) -> Result<Channel, ApiError> {
        let outcome = self.update_channel(&request.key, &request.input)?;
        let channel = into_result(outcome, &request.input.slug)?;
        log::info!(
            "Updated channel {} for bot {} (now {} {})",
            request.key.slug,
            channel.bot,
            channel.channel_type,
            channel.slug
        );
        Ok(channel)
    }

    fn delete_channel_by_bot_id(&self, key: ChannelKey) -> Result<(), ApiError> {
        into_result(self.delete_channel(&key)?, &key.slug)?;
        log::info!("Deleted channel {} for bot {}", key.slug, key.bot_id);
        Ok(())
    }
}
