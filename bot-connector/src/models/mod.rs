mod bot;
mod channel;

pub use bot::{Bot, BotInput, BotUpdate};
pub use channel::{Channel, ChannelInput, ChannelKey, ChannelSettings, ChannelType, ChannelUpdate, NewChannel};
