use crate::config::Config;
use crate::constant::{DEFAULT_WINDOW_TITLE, EXPORT_FILE_NAME};
use crate::messages::{ResponseMessage, WorkerMessage};
use crate::presenter::{export_diff, render_diff};
use crate::sample::sample_versions;
use crate::store::MemoryVersionStore;
use crate::ui::diff_view;
use crate::ui::picker::VersionPicker;
use crate::ui::theme::configure_style;
use crate::ui::title_bar::{TitleBar, TitleBarAction, TitleBarState};
use crate::view_state::ViewState;
use crate::worker::spawn_worker;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

pub struct ReviewApp {
    config: Config,
    store: MemoryVersionStore,
    view: ViewState,
    worker_sender: Sender<WorkerMessage>,
    response_receiver: Receiver<ResponseMessage>,
    status: Option<String>,
}

impl ReviewApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        configure_style(&cc.egui_ctx, config.settings.is_dark());

        let (worker_sender, response_receiver) = spawn_worker(config.data_dir());
        if let Err(e) = worker_sender.send(WorkerMessage::LoadVersions) {
            tracing::error!("Failed to request versions: {}", e);
        }

        Self {
            view: config.initial_view_state(),
            config,
            store: MemoryVersionStore::new(),
            worker_sender,
            response_receiver,
            status: Some("Loading versions...".to_string()),
        }
    }

    fn poll_responses(&mut self) {
        while let Ok(response) = self.response_receiver.try_recv() {
            match response {
                ResponseMessage::VersionsLoaded(Ok(versions)) => {
                    let count = versions.len();
                    if versions.is_empty() && self.config.settings.seed_samples {
                        self.store = MemoryVersionStore::from_versions(sample_versions());
                        self.status = Some("Showing sample versions".to_string());
                    } else {
                        self.store = MemoryVersionStore::from_versions(versions);
                        self.status = Some(format!("{} versions", count));
                    }
                    self.view.retain_known(|id| self.store.contains(id));
                }
                ResponseMessage::VersionsLoaded(Err(e)) => {
                    tracing::error!("Failed to load versions: {}", e);
                    if self.config.settings.seed_samples {
                        self.store = MemoryVersionStore::from_versions(sample_versions());
                    }
                    self.status = Some(format!("Failed to load versions: {}", e));
                }
                ResponseMessage::VersionSaved(Ok(version)) => {
                    self.status = Some(format!("Saved \"{}\"", version.title));
                    if let Err(e) = self.store.insert(version) {
                        tracing::warn!("{}", e);
                    }
                }
                ResponseMessage::VersionSaved(Err(e)) => {
                    tracing::warn!("Import failed: {}", e);
                    self.status = Some(e);
                }
                ResponseMessage::DiffExported(Ok(path)) => {
                    self.status = Some(format!("Exported to {}", path.display()));
                }
                ResponseMessage::DiffExported(Err(e)) => {
                    tracing::error!("Export failed: {}", e);
                    self.status = Some(format!("Export failed: {}", e));
                }
            }
        }
    }

    fn selection_resolves(&self) -> bool {
        let known = |id: &Option<String>| id.as_deref().is_some_and(|id| self.store.contains(id));
        known(&self.view.original) && known(&self.view.modified)
    }

    fn handle_title_action(&mut self, action: TitleBarAction) {
        match action {
            TitleBarAction::Import => {
                let sender = self.worker_sender.clone();
                let author = self.config.settings.author.clone();
                std::thread::spawn(move || {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Text", &["txt", "md"])
                        .pick_file()
                        && let Err(e) = sender.send(WorkerMessage::Import { path, author })
                    {
                        tracing::error!("Failed to send import message: {}", e);
                    }
                });
            }
            TitleBarAction::Export => {
                let Some(text) = export_diff(&self.store, &self.view, self.config.settings.strategy)
                else {
                    return;
                };
                let sender = self.worker_sender.clone();
                std::thread::spawn(move || {
                    if let Some(path) = rfd::FileDialog::new()
                        .set_file_name(EXPORT_FILE_NAME)
                        .save_file()
                        && let Err(e) = sender.send(WorkerMessage::Export { path, text })
                    {
                        tracing::error!("Failed to send export message: {}", e);
                    }
                });
            }
            TitleBarAction::Reload => {
                if let Err(e) = self.worker_sender.send(WorkerMessage::LoadVersions) {
                    tracing::error!("Failed to request versions: {}", e);
                }
            }
        }
    }
}

impl eframe::App for ReviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_responses();

        let can_export = self.selection_resolves();
        let action = egui::TopBottomPanel::top("title_bar_panel")
            .show(ctx, |ui| {
                TitleBar::show(
                    ui,
                    TitleBarState {
                        title: DEFAULT_WINDOW_TITLE,
                        can_export,
                        status: self.status.as_deref(),
                    },
                )
            })
            .inner;
        if let Some(action) = action {
            self.handle_title_action(action);
        }

        egui::SidePanel::left("version_panel")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                VersionPicker::show(
                    ui,
                    &self.store,
                    &mut self.view,
                    &mut self.config.settings.strategy,
                );
            });

        let rendered = render_diff(&self.store, &self.view, self.config.settings.strategy);
        let font_size = self.config.settings.font_size;
        egui::CentralPanel::default().show(ctx, |ui| {
            diff_view::render(ui, &rendered, font_size);
        });

        // Worker responses do not generate input events
        ctx.request_repaint_after(Duration::from_millis(250));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.remember_view(&self.view);
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config on exit: {}", e);
        }
    }
}
