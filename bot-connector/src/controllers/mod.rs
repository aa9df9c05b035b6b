//! Controllers - business logic behind the routes
//!
//! A controller only ever sees requests that already passed their
//! validator. It owns existence and uniqueness checks and persistence.

pub mod bots;
pub mod channels;

pub use bots::BotController;
pub use channels::ChannelController;
