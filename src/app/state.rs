// src/app/state.rs

use crate::models::Roster;

/// Two-phase lifecycle: the roster loads on a background thread while the UI
/// shows a spinner, and edits only become possible once the load has landed.
pub(crate) enum AppState {
    Loading(LoadingState),
    Ready(ReadyState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState)
    }
}

#[derive(Default, Clone)]
pub(crate) struct LoadingState;

#[derive(Default, Clone)]
pub(crate) struct ReadyState {
    pub(crate) roster: Roster,
}
