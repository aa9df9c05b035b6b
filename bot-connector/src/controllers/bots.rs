use crate::db::Database;
use crate::error::ApiError;
use crate::models::{Bot, BotInput, BotUpdate};

pub trait BotController: Send + Sync {
    fn create_bot(&self, request: BotInput) -> Result<Bot, ApiError>;
    fn get_bots(&self) -> Result<Vec<Bot>, ApiError>;
    fn get_bot_by_id(&self, bot_id: &str) -> Result<Bot, ApiError>;
    fn update_bot_by_id(&self, request: BotUpdate) -> Result<Bot, ApiError>;
    fn delete_bot_by_id(&self, bot_id: &str) -> Result<(), ApiError>;
}

impl BotController for Database {
    fn create_bot(&self, request: BotInput) -> Result<Bot, ApiError> {
        let bot = self.insert_bot(&request.url)?;
        log::info!("Created bot {} (url={})", bot.id, bot.url);
        Ok(bot)
    }

    fn get_bots(&self) -> Result<Vec<Bot>, ApiError> {
        Ok(self.list_bots()?)
    }

    fn get_bot_by_id(&self, bot_id: &str) -> Result<Bot, ApiError> {
        self.get_bot(bot_id)?.ok_or_else(ApiError::bot_not_found)
    }

    fn update_bot_by_id(&self, request: BotUpdate) -> Result<Bot, ApiError> {
        let bot = self
            .update_bot(&request.bot_id, &request.input.url)?
            .ok_or_else(ApiError::bot_not_found)?;
        log::info!("Updated bot {} (url={})", bot.id, bot.url);
        Ok(bot)
    }

    fn delete_bot_by_id(&self, bot_id: &str) -> Result<(), ApiError> {
        if !self.delete_bot(bot_id)? {
            return Err(ApiError::bot_not_found());
        }
        log::info!("Deleted bot {} and its channels", bot_id);
        Ok(())
    }
}
