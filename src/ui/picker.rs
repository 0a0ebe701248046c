use crate::diff::DiffStrategy;
use crate::store::{ContentVersion, MemoryVersionStore};
use crate::view_state::ViewState;
use egui::{ComboBox, RichText, Ui};

pub struct VersionPicker;

impl VersionPicker {
    /// Version selection and view toggles
    pub fn show(
        ui: &mut Ui,
        store: &MemoryVersionStore,
        state: &mut ViewState,
        strategy: &mut DiffStrategy,
    ) {
        ui.heading("Select Versions to Compare");
        ui.label(
            RichText::new("Choose two versions of your content to see the differences").weak(),
        );
        ui.add_space(8.0);

        ui.label("Original Version");
        if let Some(id) = Self::version_combo(ui, "original_version", store, &state.original) {
            state.select_original(id);
        }

        ui.label("Modified Version");
        if let Some(id) = Self::version_combo(ui, "modified_version", store, &state.modified) {
            state.select_modified(id);
        }

        ui.horizontal(|ui| {
            if ui.button("⇅ Swap").clicked() {
                state.swap();
            }
            if ui.button("Clear").clicked() {
                state.clear_selection();
            }
        });

        ui.separator();

        let options = &mut state.options;
        ui.checkbox(&mut options.side_by_side, "Side-by-side view");
        ui.checkbox(&mut options.show_line_numbers, "Show line numbers");
        ui.checkbox(&mut options.show_only_changes, "Show only changes");

        let mut minimal = *strategy == DiffStrategy::LineDiff;
        if ui
            .checkbox(&mut minimal, "Minimal diff")
            .on_hover_text("Realign on matching lines after a change instead of the cursor walk")
            .changed()
        {
            *strategy = if minimal {
                DiffStrategy::LineDiff
            } else {
                DiffStrategy::CursorWalk
            };
        }
    }

    /// Returns the newly picked id, if the user picked one
    fn version_combo(
        ui: &mut Ui,
        salt: &str,
        store: &MemoryVersionStore,
        current: &Option<String>,
    ) -> Option<String> {
        let selected_text = current
            .as_deref()
            .and_then(|id| store.iter().find(|v| v.id == id))
            .map(ContentVersion::label)
            .unwrap_or_else(|| "Select version".to_string());

        let mut picked = current.clone();
        ComboBox::from_id_salt(salt)
            .selected_text(selected_text)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for version in store.iter() {
                    ui.selectable_value(&mut picked, Some(version.id.clone()), version.label())
                        .on_hover_text(format!("by {}", version.author));
                }
            });

        if picked != *current { picked } else { None }
    }
}
