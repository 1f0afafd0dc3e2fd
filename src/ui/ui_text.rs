/// All user-facing strings in one place.
pub struct UiText {
    // --- Loading screen ---
    pub ls_title: &'static str,
    pub ls_detail: &'static str,

    // --- Row fields ---
    pub label_initiative: &'static str,
    pub label_name: &'static str,
    pub label_hp: &'static str,
    pub label_ac: &'static str,

    // --- Buttons ---
    pub btn_save: &'static str,
    pub btn_delete: &'static str,
    pub btn_add: &'static str,
    pub btn_sort: &'static str,

    // --- Center panel ---
    pub cp_empty_roster: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    ls_title: "Initiative Tracker",
    ls_detail: "Loading the roster...",

    label_initiative: "Initiative",
    label_name: "Name",
    label_hp: "HP",
    label_ac: "AC",

    btn_save: "Save",
    btn_delete: "Delete",
    btn_add: "Add Entry",
    btn_sort: "Sort",

    cp_empty_roster: "No combatants yet. Add an entry below.",
};
