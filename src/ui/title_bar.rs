use egui::{Align, Layout, RichText, Ui};

pub enum TitleBarAction {
    Import,
    Export,
    Reload,
}

pub struct TitleBar;

pub struct TitleBarState<'a> {
    pub title: &'a str,
    pub can_export: bool,
    pub status: Option<&'a str>,
}

impl TitleBar {
    pub fn show(ui: &mut Ui, state: TitleBarState<'_>) -> Option<TitleBarAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                ui.label(RichText::new(state.title).strong());
                ui.add_space(16.0);

                if ui
                    .button("📂 Import")
                    .on_hover_text("Save a text file as a new version")
                    .clicked()
                {
                    action = Some(TitleBarAction::Import);
                }
                if ui
                    .add_enabled(state.can_export, egui::Button::new("⬇ Export Diff"))
                    .clicked()
                {
                    action = Some(TitleBarAction::Export);
                }
                if ui.button("🔄").on_hover_text("Reload versions").clicked() {
                    action = Some(TitleBarAction::Reload);
                }
            });

            if let Some(status) = state.status {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(status).weak());
                });
            }
        });

        action
    }
}
