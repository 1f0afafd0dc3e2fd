use {
    crate::{
        models::{EditableRow, Field, Roster},
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{
        Button, CentralPanel, Context, RichText, ScrollArea, Spinner, TextEdit, TopBottomPanel,
        Ui,
    },
};

/// User intent gathered while painting a frame. Collected first, applied after
/// the panels are done, so the roster is never mutated mid-render.
pub(crate) enum RosterAction {
    Edit {
        id: String,
        field: Field,
        text: String,
    },
    Save(String),
    Delete(String),
    Add,
    Sort,
}

pub(crate) fn render_loading(ctx: &Context) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.heading(
                    RichText::new(UI_TEXT.ls_title)
                        .size(24.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.add_space(10.0);
                ui.label(
                    RichText::new(UI_TEXT.ls_detail)
                        .italics()
                        .color(UI_CONFIG.colors.label),
                );
                ui.add_space(20.0);
                ui.add(Spinner::new().size(32.0));
            });
        });
}

/// Paints the roster screen and returns whatever the user asked for this frame.
pub(crate) fn render_roster(ctx: &Context, roster: &Roster) -> Vec<RosterAction> {
    let mut actions = Vec::new();

    TopBottomPanel::bottom("roster_controls")
        .frame(UI_CONFIG.bottom_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered_justified(|ui| {
                if ui
                    .add(Button::new(UI_TEXT.btn_add).fill(UI_CONFIG.colors.add_button))
                    .clicked()
                {
                    actions.push(RosterAction::Add);
                }
                ui.add_space(4.0);
                if ui.button(UI_TEXT.btn_sort).clicked() {
                    actions.push(RosterAction::Sort);
                }
            });
        });

    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            if roster.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(
                        RichText::new(UI_TEXT.cp_empty_roster)
                            .italics()
                            .color(UI_CONFIG.colors.label),
                    );
                });
                return;
            }
            ScrollArea::vertical().show(ui, |ui| {
                for row in roster.rows() {
                    render_row(ui, row, &mut actions);
                    ui.add_space(12.0);
                }
            });
        });

    actions
}

fn render_row(ui: &mut Ui, row: &EditableRow, actions: &mut Vec<RosterAction>) {
    ui.horizontal(|ui| {
        render_field(ui, row, Field::Initiative, UI_TEXT.label_initiative, 64.0, actions);
        render_field(ui, row, Field::Name, UI_TEXT.label_name, 140.0, actions);
        render_field(ui, row, Field::Hp, UI_TEXT.label_hp, 64.0, actions);
        render_field(ui, row, Field::Ac, UI_TEXT.label_ac, 64.0, actions);
    });
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui
            .add(Button::new(UI_TEXT.btn_save).fill(UI_CONFIG.colors.save_button))
            .clicked()
        {
            actions.push(RosterAction::Save(row.id.clone()));
        }
        if ui
            .add(Button::new(UI_TEXT.btn_delete).fill(UI_CONFIG.colors.delete_button))
            .clicked()
        {
            actions.push(RosterAction::Delete(row.id.clone()));
        }
    });
    ui.separator();
}

/// One labelled text field. The widget edits a scratch copy; the keystroke only
/// reaches the roster through `set_field`, which is where the digit filter
/// lives. A rejected edit simply never makes it in, so the next frame repaints
/// the old text.
fn render_field(
    ui: &mut Ui,
    row: &EditableRow,
    field: Field,
    label: &str,
    width: f32,
    actions: &mut Vec<RosterAction>,
) {
    ui.vertical(|ui| {
        ui.label(
            RichText::new(label)
                .size(12.0)
                .color(UI_CONFIG.colors.label),
        );
        let mut text = row.field(field).to_owned();
        let response = ui.add(TextEdit::singleline(&mut text).desired_width(width));
        if response.changed() {
            actions.push(RosterAction::Edit {
                id: row.id.clone(),
                field,
                text,
            });
        }
    });
}
