//! Main application state and eframe::App implementation.
//!
//! Rendering lives in the `ui` modules as further `impl LunaStoryApp` blocks;
//! this file owns loading, page switching and the stepper transitions that
//! the UI triggers.

use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use crate::event_page::EventPage;
use crate::settings::UserSettings;
use crate::state::{
    DetailMode, LoadResult, LoadedStory, LoadingState, Page, ToastType, DEFAULT_DATA_FILE,
};
use crate::stepper::Stepper;
use crate::story::EventId;

/// What to open on startup (from the command line)
#[derive(Clone, Debug, Default)]
pub struct LaunchOptions {
    pub data_file: Option<PathBuf>,
    pub story_file: Option<PathBuf>,
    /// Open this event page once the data is loaded
    pub event: Option<EventId>,
}

/// Main application state
pub struct LunaStoryApp {
    /// Market data and story, once loaded
    pub loaded: Option<LoadedStory>,
    /// Overview stepper over the loaded story
    pub stepper: Option<Stepper>,
    /// Active event page, when `page` is `Page::Event`
    pub event_page: Option<EventPage>,
    /// Which view fills the central panel
    pub page: Page,
    /// Event page requested before the data finished loading
    pub pending_event: Option<EventId>,
    /// Persisted preferences
    pub settings: UserSettings,
    /// Toast messages for user feedback
    pub toast_message: Option<(String, std::time::Instant, ToastType)>,
    /// Track dropped files to prevent duplicates
    pub last_drop_time: Option<std::time::Instant>,
    /// Channel for receiving loaded data from the background thread
    pub load_receiver: Option<Receiver<LoadResult>>,
    /// Current loading state
    pub loading_state: LoadingState,
}

impl Default for LunaStoryApp {
    fn default() -> Self {
        Self {
            loaded: None,
            stepper: None,
            event_page: None,
            page: Page::Overview,
            pending_event: None,
            settings: UserSettings::default(),
            toast_message: None,
            last_drop_time: None,
            load_receiver: None,
            loading_state: LoadingState::Idle,
        }
    }
}

impl LunaStoryApp {
    pub fn new(cc: &eframe::CreationContext<'_>, launch: LaunchOptions) -> Self {
        // The story reads best on a white page
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let mut app = Self {
            settings: UserSettings::load(),
            pending_event: launch.event,
            ..Self::default()
        };

        let story_file = launch
            .story_file
            .or_else(|| app.settings.last_story_file.clone());
        let data_file = launch
            .data_file
            .or_else(|| app.settings.last_data_file.clone())
            .or_else(|| {
                let fallback = PathBuf::from(DEFAULT_DATA_FILE);
                fallback.exists().then_some(fallback)
            });

        if let Some(path) = data_file {
            app.start_loading(path, story_file);
        }

        app
    }

    /// Font size adjusted by the user's font scale
    pub fn scaled_font(&self, size: f32) -> f32 {
        size * self.settings.font_scale.multiplier()
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Start loading market data (and optionally a story file) in the background
    pub fn start_loading(&mut self, data_path: PathBuf, story_path: Option<PathBuf>) {
        if matches!(self.loading_state, LoadingState::Loading(_)) {
            return;
        }

        let filename = data_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        tracing::info!("Loading {:?} (story: {:?})", data_path, story_path);
        self.loading_state = LoadingState::Loading(filename);

        let (sender, receiver): (Sender<LoadResult>, Receiver<LoadResult>) = channel();
        self.load_receiver = Some(receiver);

        thread::spawn(move || {
            let result = match LoadedStory::load(&data_path, story_path.as_deref()) {
                Ok(loaded) => LoadResult::Success(Box::new(loaded)),
                Err(e) => LoadResult::Error(format!("{:#}", e)),
            };
            let _ = sender.send(result);
        });
    }

    /// Reload the current data with a different story (`None` = built-in)
    pub fn reload_with_story(&mut self, story_path: Option<PathBuf>) {
        if let Some(loaded) = &self.loaded {
            let data_path = loaded.data_path.clone();
            self.start_loading(data_path, story_path);
        } else {
            self.show_toast("Open a market data file first", ToastType::Info);
        }
    }

    /// Check for completed background loads
    pub fn check_loading_complete(&mut self) {
        let Some(receiver) = &self.load_receiver else {
            return;
        };
        let Ok(result) = receiver.try_recv() else {
            return;
        };

        match result {
            LoadResult::Success(loaded) => {
                let loaded = *loaded;
                self.stepper = Some(Stepper::new(loaded.story.clone()));
                self.event_page = None;
                self.page = Page::Overview;

                self.settings.last_data_file = Some(loaded.data_path.clone());
                self.settings.last_story_file = loaded.story_path.clone();
                self.persist_settings();

                let message = format!(
                    "Loaded {} ({} samples, {} annotations)",
                    loaded.name,
                    loaded.market.len(),
                    loaded.story.len()
                );
                self.loaded = Some(loaded);
                self.show_toast(&message, ToastType::Success);

                if let Some(event) = self.pending_event.take() {
                    self.open_event_page(event);
                }
            }
            LoadResult::Error(e) => {
                tracing::error!("Load failed: {}", e);
                self.show_toast(&format!("Error: {}", e), ToastType::Error);
            }
        }
        self.load_receiver = None;
        self.loading_state = LoadingState::Idle;
    }

    // ========================================================================
    // Story Navigation
    // ========================================================================

    /// Primary button: reveal the next annotation
    pub fn advance_story(&mut self) {
        if let Some(stepper) = self.stepper.as_mut() {
            stepper.advance();
        }
    }

    /// Start the story over from the first click
    pub fn reset_story(&mut self) {
        if let Some(stepper) = self.stepper.as_mut() {
            stepper.reset();
        }
        self.show_overview();
    }

    /// Detail button: drill into the current event, in place or on its page
    pub fn activate_detail(&mut self) {
        let Some(stepper) = self.stepper.as_mut() else {
            return;
        };

        match self.settings.detail_mode {
            DetailMode::ToggleInPlace => {
                stepper.toggle_detail();
            }
            DetailMode::OpenEventPage => {
                if let Some(event) = stepper.current_event() {
                    self.open_event_page(event);
                }
            }
        }
    }

    /// Switch to the standalone page of `event`
    pub fn open_event_page(&mut self, event: EventId) {
        let Some(loaded) = &self.loaded else {
            self.pending_event = Some(event);
            return;
        };

        match EventPage::for_event(&loaded.story, event) {
            Ok(page) => {
                tracing::info!("Opening {} page", page.event().page_name());
                self.event_page = Some(page);
                self.page = Page::Event(event);
            }
            Err(e) => {
                self.show_toast(&e.to_string(), ToastType::Error);
            }
        }
    }

    /// Back to the step-through chart
    pub fn show_overview(&mut self) {
        self.page = Page::Overview;
        self.event_page = None;
    }

    /// Feed the pointer position (or its absence) to the active page
    pub fn set_pointer(&mut self, timestamp: Option<i64>) {
        match self.page {
            Page::Overview => {
                if let Some(stepper) = self.stepper.as_mut() {
                    match timestamp {
                        Some(t) => stepper.hover(t),
                        None => stepper.clear_hover(),
                    }
                }
            }
            Page::Event(_) => {
                if let Some(page) = self.event_page.as_mut() {
                    match timestamp {
                        Some(t) => page.hover(t),
                        None => page.clear_hover(),
                    }
                }
            }
        }
    }

    // ========================================================================
    // Settings & Feedback
    // ========================================================================

    pub fn set_detail_mode(&mut self, mode: DetailMode) {
        if self.settings.detail_mode != mode {
            self.settings.detail_mode = mode;
            self.persist_settings();
        }
    }

    pub fn persist_settings(&self) {
        if let Err(e) = self.settings.save() {
            tracing::warn!("Failed to save settings: {:#}", e);
        }
    }

    /// Show a toast message
    pub fn show_toast(&mut self, message: &str, toast_type: ToastType) {
        self.toast_message = Some((
            message.to_string(),
            std::time::Instant::now(),
            toast_type,
        ));
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Handle dropped market data files
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        if matches!(self.loading_state, LoadingState::Loading(_)) {
            return;
        }

        // Debounce file drops (5 second window)
        if let Some(last_drop) = self.last_drop_time {
            if last_drop.elapsed().as_secs() < 5 {
                return;
            }
        }

        let dropped_files: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });

        if let Some(path) = dropped_files.into_iter().next() {
            self.last_drop_time = Some(std::time::Instant::now());
            let story = self.settings.last_story_file.clone();
            self.start_loading(path, story);
        }
    }

    /// Keyboard shortcuts: right arrow / space to advance, D for detail,
    /// Escape back to the overview
    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let (next, detail, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::Escape),
            )
        });

        match self.page {
            Page::Overview => {
                if next {
                    self.advance_story();
                }
                if detail {
                    self.activate_detail();
                }
            }
            Page::Event(_) => {
                if escape || detail {
                    self.show_overview();
                }
            }
        }
    }
}

impl eframe::App for LunaStoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed background loads
        self.check_loading_complete();

        self.handle_dropped_files(ctx);
        self.handle_keyboard(ctx);

        // Request repaint while loading (for spinner animation)
        if matches!(self.loading_state, LoadingState::Loading(_)) {
            ctx.request_repaint();
        }

        self.render_toast(ctx);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.render_menu_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.loaded.is_none() {
                self.render_welcome(ui);
                return;
            }

            match self.page {
                Page::Overview => self.render_overview(ui),
                Page::Event(_) => self.render_event_page(ui),
            }
        });
    }
}
