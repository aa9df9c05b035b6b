mod sqlite;
mod tables;

pub use sqlite::Database;
pub use tables::ChannelOutcome;
