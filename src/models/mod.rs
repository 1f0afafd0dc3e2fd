mod record;
mod roster;

pub use record::StoredRecord;
pub use roster::{EditableRow, Field, Roster};
