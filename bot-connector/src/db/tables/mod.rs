//! Table modules - extends Database with domain-specific methods
//!
//! Each module adds `impl Database` blocks with methods for a specific table.

mod bots;     // bots
mod channels; // channels

pub use channels::ChannelOutcome;
