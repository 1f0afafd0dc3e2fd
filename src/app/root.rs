use {
    eframe::{
        Frame,
        egui::{Context, Visuals},
    },
    std::{
        mem,
        sync::{Arc, mpsc, mpsc::Receiver},
        thread,
    },
};

use crate::{
    Cli,
    app::{AppState, LoadingState, PhaseView, ReadyState},
    config::DF,
    data::RosterStore,
    models::{Roster, StoredRecord},
    ui::{RosterAction, UI_CONFIG, render_loading, render_roster},
};

pub struct App {
    store: Arc<RosterStore>,
    state: AppState,
    data_rx: Option<Receiver<anyhow::Result<Vec<StoredRecord>>>>,
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let store = Arc::new(RosterStore::new(&args.data_dir));

        let (data_tx, data_rx) = mpsc::channel();
        let loader = Arc::clone(&store);
        thread::spawn(move || {
            let _ = data_tx.send(loader.load_all());
        });

        Self {
            store,
            state: AppState::default(),
            data_rx: Some(data_rx),
        }
    }

    /// LOADING PHASE. Paints the spinner and polls the loader thread. Edits are
    /// impossible here: the roster UI only exists in the Ready phase, so a slow
    /// load can never race user input.
    pub(crate) fn tick_loading_state(&mut self, ctx: &Context) -> AppState {
        render_loading(ctx);
        ctx.request_repaint();

        if let Some(rx) = &self.data_rx {
            if let Ok(result) = rx.try_recv() {
                let roster = match result {
                    Ok(records) => Roster::from_records(&records),
                    Err(err) => {
                        // Any load failure degrades to the fresh-screen look,
                        // same as the first launch. Never surfaced to the user.
                        log::warn!("Error loading roster: {err:#}");
                        Roster::fallback()
                    }
                };
                if DF.log_phases {
                    log::info!("Load complete, {} rows. Entering Ready.", roster.len());
                }
                self.data_rx = None;
                return AppState::Ready(ReadyState { roster });
            }
        }
        AppState::Loading(LoadingState)
    }

    /// READY PHASE MAIN LOOP
    pub(crate) fn tick_ready_state(&mut self, ctx: &Context, state: &mut ReadyState) -> AppState {
        let actions = render_roster(ctx, &state.roster);
        for action in actions {
            self.apply_action(&mut state.roster, action);
        }
        AppState::Ready(state.clone())
    }

    fn apply_action(&self, roster: &mut Roster, action: RosterAction) {
        match action {
            RosterAction::Edit { id, field, text } => roster.set_field(&id, field, &text),
            RosterAction::Save(id) => {
                if let Some(record) = roster.record_for(&id) {
                    if let Err(err) = self.store.save_one(record) {
                        log::error!("Failed to save row {}: {:#}", id, err);
                    }
                }
            }
            // Memory only. The backing store keeps any previously saved record.
            RosterAction::Delete(id) => roster.remove_row(&id),
            RosterAction::Add => roster.add_row(),
            RosterAction::Sort => roster.sort(),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Loading(mut s) => s.tick(self, ctx),
            AppState::Ready(mut s) => s.tick(self, ctx),
        };
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = UI_CONFIG.colors.background;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
