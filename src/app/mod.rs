mod phases;
mod root;
mod state;

pub(crate) use phases::PhaseView;
pub(crate) use state::{AppState, LoadingState, ReadyState};

pub use root::App;
