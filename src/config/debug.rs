//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every store read/write with record counts.
    pub log_store_io: bool,

    /// Log roster mutations (add/edit/delete) as they happen.
    pub log_roster_edits: bool,

    /// Log phase transitions of the app state machine.
    pub log_phases: bool,
}

pub const DF: LogFlags = LogFlags {
    log_store_io: false,
    log_roster_edits: false,
    log_phases: true,
};
