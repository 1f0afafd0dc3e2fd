//! Configuration module for the initiative tracker.

mod debug;
mod persistence;

// Re-export commonly used items
pub use debug::DF;
pub use persistence::{AppPersistenceConfig, PERSISTENCE, PersistenceConfig, RosterPersistenceConfig};
