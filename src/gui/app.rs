// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    config::{
        consts::APP_TITLE,
        state::AppState,
    },
    dataset::{self, Dataset, LoadError},
    notes::{self, DynNoteStore, NoteStore},
    render::Document,
    store::MemoryKv,
};

use super::components;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(App::new(state, Some(cc.egui_ctx.clone()))))),
    )?;
    Ok(())
}

/// What the results area shows. Changes only on the search trigger
/// (and once when a dataset load fails).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// Before the first search, or after an empty query / load error.
    Idle { message: Option<String> },
    /// A search ran; may be "not found".
    Results(Document),
}

type LoadSlot = Arc<Mutex<Option<Result<Dataset, LoadError>>>>;

pub struct App {
    pub state: AppState,

    /// Empty until the background load lands
    pub dataset: Dataset,
    pub notes: DynNoteStore,
    pub view: View,

    /// Save confirmation dialog is open
    pub note_saved: bool,
    pub status: String,

    // loader thread writes here once
    pending: Option<LoadSlot>,
}

impl App {
    /// Open the notes store and start the dataset read in the background.
    pub fn new(state: AppState, repaint: Option<egui::Context>) -> Self {
        let mut app = Self::with_dataset(state, Dataset::default(), open_notes_or_memory);
        app.status = format!("Loading {}", app.state.options.data.describe());

        let slot: LoadSlot = Arc::new(Mutex::new(None));
        let worker_slot = slot.clone();
        let source = app.state.options.data.clone();
        thread::spawn(move || {
            let res = dataset::load(&source);
            if let Ok(mut guard) = worker_slot.lock() {
                *guard = Some(res);
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
        app.pending = Some(slot);

        logf!("Init: data={}, title={}", app.state.options.data.describe(), APP_TITLE);
        app
    }

    /// Build around an already-loaded dataset (no background work).
    pub fn with_dataset(
        state: AppState,
        dataset: Dataset,
        open_notes: fn(&AppState) -> (DynNoteStore, Option<String>),
    ) -> Self {
        let (notes, warning) = open_notes(&state);
        let status = warning.unwrap_or_else(|| format!("{} record(s)", dataset.len()));
        Self {
            state,
            dataset,
            notes,
            view: View::Idle { message: None },
            note_saved: false,
            status,
            pending: None,
        }
    }

    /// Pick up the loader result, if it has arrived.
    pub fn poll_load(&mut self) {
        let Some(slot) = &self.pending else { return };
        let res = match slot.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => None,
        };
        let Some(res) = res else { return };
        self.pending = None;
        self.apply_load(res);
    }

    pub fn apply_load(&mut self, res: Result<Dataset, LoadError>) {
        match res {
            Ok(ds) => {
                self.status = format!("{} record(s)", ds.len());
                self.dataset = ds;
            }
            Err(e) => {
                let doc = Document::load_failed(&e);
                self.status = doc.message().unwrap_or_default();
                self.view = View::Idle { message: doc.message() };
            }
        }
    }

    #[inline]
    pub fn is_loading(&self) -> bool { self.pending.is_some() }
}

/// File-backed notes per options; a broken store falls back to memory for this session.
pub fn open_notes_or_memory(state: &AppState) -> (DynNoteStore, Option<String>) {
    match notes::open(&state.options.notes) {
        Ok(store) => (store, None),
        Err(e) => {
            loge!("Notes: {}; using in-memory notes", e);
            let store: DynNoteStore = NoteStore::new(Box::new(MemoryKv::new()));
            (store, Some(format!("Notes not persisted: {e}")))
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.is_loading() {
                    ui.add(egui::Spinner::new().size(12.0));
                }
                ui.label(&self.status);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::search_bar::draw(ui, self);

            ui.separator();

            components::results::draw(ui, self);
        });

        components::saved_modal::draw(ctx, self);
    }
}
