// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    catalog::CatalogClient,
    config::{
        Credentials,
        options::AppOptions,
        state::{AppState, GuiState},
    },
    core::ReqwestGet,
    decade::Decade,
    recommend::{Picks, Recommender},
};

use super::{actions, components, progress::GuiProgress};

pub const WINDOW_TITLE: &str = "Marvel Comics Recommender Engine";

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(AppState {
                options: AppOptions::from_env(),
                gui: GuiState::default(),
            })))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // None when startup failed (e.g. missing keys); status says why
    pub recommender: Option<Recommender<ReqwestGet>>,

    // sorted unique names for the selector
    pub characters: Vec<String>,

    // last completed cycle and the selection it ran for
    pub picks: Option<Picks>,
    pub last_run: Option<(String, Decade)>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut app = Self {
            state,
            recommender: None,
            characters: Vec::new(),
            picks: None,
            last_run: None,
            out_path_text: s!(),
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
        };

        match Self::connect(&app.state.options) {
            Ok(rec) => {
                app.recommender = Some(rec);
                app.load_characters();
            }
            Err(e) => {
                loge!("Init: {}", e);
                app.status(format!("Error: {e}"));
            }
        }

        logf!("Init: characters={}", app.characters.len());
        app.refresh_out_path_text();
        app
    }

    fn connect(options: &AppOptions) -> Result<Recommender<ReqwestGet>, Box<dyn Error>> {
        let creds = Credentials::load()?;
        let client = CatalogClient::connect(creds, &options.query)?;
        Ok(Recommender::new(client, options.query.limit))
    }

    /// Fill `characters` from the recommender's memoized list.
    pub fn load_characters(&mut self) {
        let Some(rec) = self.recommender.as_mut() else { return };
        let mut prog = GuiProgress::new(self.status.clone());

        match rec.characters(Some(&mut prog)) {
            Ok(names) => {
                self.characters = names.to_vec();
            }
            Err(e) => {
                loge!("Init: Character list failed: {}", e);
                self.characters.clear();
                if let Ok(mut s) = self.status.lock() {
                    *s = format!("Error loading characters: {e}");
                }
            }
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Keep the output box in sync with the selection until the user edits it.
    pub fn refresh_out_path_text(&mut self) {
        if self.out_path_dirty {
            return;
        }
        let export = &self.state.options.export;
        self.out_path_text = match self.state.gui.selection() {
            Some((name, decade)) => export.out_path(&name, decade).to_string_lossy().into_owned(),
            None => export.out_dir().to_string_lossy().into_owned(),
        };
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("characters")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                components::character_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(WINDOW_TITLE);

            components::decade_bar::draw(ui, self);

            // Selection changed since the last cycle → run a new one.
            let current = self.state.gui.selection();
            if current.is_some() && current != self.last_run {
                actions::recommend(self);
            }

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::results::draw(ui, self);
        });
    }
}
