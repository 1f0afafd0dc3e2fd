//! File persistence configuration

/// Configuration for Roster Data Persistence
pub struct RosterPersistenceConfig {
    /// Filename for the roster JSON document, relative to the data directory
    pub filename: &'static str,
}

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state (window geometry etc.)
    pub state_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub roster: RosterPersistenceConfig,
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    roster: RosterPersistenceConfig {
        // Fixed name carried over from the original data file
        filename: "dnd_data",
    },
    app: AppPersistenceConfig {
        state_path: ".ui_state.json",
    },
};
