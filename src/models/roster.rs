use crate::config::DF;
use crate::models::StoredRecord;
use uuid::Uuid;

/// The four editable columns of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Initiative,
    Name,
    Hp,
    Ac,
}

impl Field {
    /// Numeric fields get the digit-only input filter; Name accepts anything.
    pub fn is_numeric(self) -> bool {
        !matches!(self, Field::Name)
    }
}

/// UI-facing representation of one combatant. Numeric fields are held as
/// free-form text so half-typed values never have to parse. `id` is assigned
/// when the row is created and never reassigned, so a row keeps its identity
/// across edits and re-saves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableRow {
    pub id: String,
    pub initiative: String,
    pub name: String,
    pub hp: String,
    pub ac: String,
}

impl EditableRow {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            initiative: String::new(),
            name: String::new(),
            hp: String::new(),
            ac: String::new(),
        }
    }

    pub fn from_record(record: &StoredRecord) -> Self {
        Self {
            id: record.id.clone(),
            initiative: record.initiative.to_string(),
            name: record.name.clone(),
            hp: record.hp.to_string(),
            ac: record.ac.to_string(),
        }
    }

    /// Empty or unparsable numeric text coerces to 0, never to an error.
    pub fn to_record(&self) -> StoredRecord {
        StoredRecord {
            id: self.id.clone(),
            initiative: self.initiative.parse().unwrap_or(0),
            name: self.name.clone(),
            hp: self.hp.parse().unwrap_or(0),
            ac: self.ac.parse().unwrap_or(0),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Initiative => &self.initiative,
            Field::Name => &self.name,
            Field::Hp => &self.hp,
            Field::Ac => &self.ac,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Initiative => &mut self.initiative,
            Field::Name => &mut self.name,
            Field::Hp => &mut self.hp,
            Field::Ac => &mut self.ac,
        }
    }
}

/// Ordered collection of editable rows currently on screen. Insertion order is
/// display order. Owned exclusively by the active screen for its lifetime.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    rows: Vec<EditableRow>,
}

impl Roster {
    pub fn from_records(records: &[StoredRecord]) -> Self {
        Self {
            rows: records.iter().map(EditableRow::from_record).collect(),
        }
    }

    /// Load-failure fallback: exactly one blank row, never an empty roster and
    /// never an error surfaced to the user.
    pub fn fallback() -> Self {
        Self {
            rows: vec![EditableRow::blank()],
        }
    }

    pub fn rows(&self) -> &[EditableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append one blank row (fresh id) to the end of the roster.
    pub fn add_row(&mut self) {
        self.rows.push(EditableRow::blank());

        if DF.log_roster_edits {
            log::info!("Roster: added blank row, {} rows total", self.rows.len());
        }
    }

    /// Accept `input` into the row's in-memory text state. Numeric fields only
    /// accept input made entirely of ASCII digits (empty string included);
    /// anything else is rejected silently and the field is left unchanged.
    pub fn set_field(&mut self, id: &str, field: Field, input: &str) {
        if field.is_numeric() && !input.chars().all(|c| c.is_ascii_digit()) {
            if DF.log_roster_edits {
                log::info!("Roster: rejected non-digit input {:?} for {:?}", input, field);
            }
            return;
        }
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
            *row.field_mut(field) = input.to_owned();
        }
    }

    /// Snapshot of a row as a StoredRecord, ready for the store.
    pub fn record_for(&self, id: &str) -> Option<StoredRecord> {
        self.rows.iter().find(|r| r.id == id).map(EditableRow::to_record)
    }

    /// Removes the row from memory only. There is no persisted-delete path: a
    /// previously saved record reappears on the next load.
    pub fn remove_row(&mut self, id: &str) {
        self.rows.retain(|r| r.id != id);

        if DF.log_roster_edits {
            log::info!("Roster: removed row {}, {} rows remain", id, self.rows.len());
        }
    }

    // TODO: sort rows by initiative, highest first
    pub fn sort(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orc() -> StoredRecord {
        StoredRecord {
            id: "orc-1".to_string(),
            initiative: 12,
            name: "Orc".to_string(),
            hp: 7,
            ac: 13,
        }
    }

    #[test]
    fn test_from_records_stringifies_numeric_fields() {
        let roster = Roster::from_records(&[orc()]);
        let row = &roster.rows()[0];
        assert_eq!(row.initiative, "12");
        assert_eq!(row.name, "Orc");
        assert_eq!(row.hp, "7");
        assert_eq!(row.ac, "13");
    }

    #[test]
    fn test_fallback_is_one_blank_row() {
        let roster = Roster::fallback();
        assert_eq!(roster.len(), 1);
        let row = &roster.rows()[0];
        assert!(!row.id.is_empty());
        assert!(row.name.is_empty());
        assert!(row.hp.is_empty());
    }

    #[test]
    fn test_add_row_appends_with_fresh_id() {
        let mut roster = Roster::from_records(&[orc()]);
        roster.add_row();
        assert_eq!(roster.len(), 2);
        assert_ne!(roster.rows()[1].id, roster.rows()[0].id);
    }

    #[test]
    fn test_digit_filter_rejects_non_digit_input() {
        let mut roster = Roster::from_records(&[orc()]);
        roster.set_field("orc-1", Field::Hp, "7a");
        assert_eq!(roster.rows()[0].hp, "7");
        roster.set_field("orc-1", Field::Hp, "-3");
        assert_eq!(roster.rows()[0].hp, "7");
    }

    #[test]
    fn test_digit_filter_accepts_digits_and_empty() {
        let mut roster = Roster::from_records(&[orc()]);
        roster.set_field("orc-1", Field::Hp, "42");
        assert_eq!(roster.rows()[0].hp, "42");
        roster.set_field("orc-1", Field::Hp, "");
        assert_eq!(roster.rows()[0].hp, "");
    }

    #[test]
    fn test_name_field_accepts_anything() {
        let mut roster = Roster::from_records(&[orc()]);
        roster.set_field("orc-1", Field::Name, "Grish-Nakh the 3rd");
        assert_eq!(roster.rows()[0].name, "Grish-Nakh the 3rd");
    }

    #[test]
    fn test_empty_or_unparsable_text_coerces_to_zero() {
        let mut roster = Roster::from_records(&[orc()]);
        roster.set_field("orc-1", Field::Hp, "");
        let record = roster.record_for("orc-1").expect("row exists");
        assert_eq!(record.hp, 0);
        assert_eq!(record.initiative, 12);
    }

    #[test]
    fn test_record_for_keeps_row_identity() {
        let mut roster = Roster::default();
        roster.add_row();
        let id = roster.rows()[0].id.clone();
        roster.set_field(&id, Field::Name, "Goblin");
        let record = roster.record_for(&id).expect("row exists");
        assert_eq!(record.id, id);
        assert_eq!(record.name, "Goblin");
    }

    #[test]
    fn test_remove_row_is_memory_only() {
        let mut roster = Roster::from_records(&[orc()]);
        roster.remove_row("orc-1");
        assert!(roster.is_empty());
        assert!(roster.record_for("orc-1").is_none());
    }

    #[test]
    fn test_sort_is_a_noop() {
        let second = StoredRecord {
            id: "gob-1".to_string(),
            initiative: 20,
            name: "Goblin".to_string(),
            hp: 4,
            ac: 11,
        };
        let mut roster = Roster::from_records(&[orc(), second]);
        roster.sort();
        assert_eq!(roster.rows()[0].id, "orc-1");
        assert_eq!(roster.rows()[1].id, "gob-1");
    }
}
