use serde::{Deserialize, Serialize};

/// Display toggles for the comparison view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Show both raw texts next to each other instead of the unified diff
    #[serde(default = "default_true")]
    pub side_by_side: bool,

    /// Prefix unified lines with their line number
    #[serde(default = "default_true")]
    pub show_line_numbers: bool,

    /// Hide unchanged lines in the unified diff. Summary counts are unaffected.
    #[serde(default)]
    pub show_only_changes: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            side_by_side: true,
            show_line_numbers: true,
            show_only_changes: false,
        }
    }
}

/// Everything the presenter needs besides the store.
///
/// The UI mutates this; rendering only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub original: Option<String>,

    #[serde(default)]
    pub modified: Option<String>,

    #[serde(default)]
    pub options: ViewOptions,
}

impl ViewState {
    pub fn with_options(options: ViewOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn select_original(&mut self, id: impl Into<String>) {
        self.original = Some(id.into());
    }

    pub fn select_modified(&mut self, id: impl Into<String>) {
        self.modified = Some(id.into());
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.original, &mut self.modified);
    }

    pub fn clear_selection(&mut self) {
        self.original = None;
        self.modified = None;
    }

    pub fn is_complete(&self) -> bool {
        self.original.is_some() && self.modified.is_some()
    }

    /// Drop selections for which `is_known` returns false
    pub fn retain_known(&mut self, is_known: impl Fn(&str) -> bool) {
        if self.original.as_deref().is_some_and(|id| !is_known(id)) {
            self.original = None;
        }
        if self.modified.as_deref().is_some_and(|id| !is_known(id)) {
            self.modified = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_viewer_defaults() {
        let options = ViewOptions::default();
        assert!(options.side_by_side);
        assert!(options.show_line_numbers);
        assert!(!options.show_only_changes);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let state: ViewState = serde_json::from_str(r#"{"original":"1"}"#).unwrap();
        assert_eq!(state.original.as_deref(), Some("1"));
        assert_eq!(state.modified, None);
        assert_eq!(state.options, ViewOptions::default());

        let options: ViewOptions = serde_json::from_str(r#"{"side_by_side":false}"#).unwrap();
        assert!(!options.side_by_side);
        assert!(options.show_line_numbers);
    }

    #[test]
    fn selection_lifecycle() {
        let mut state = ViewState::default();
        assert!(!state.is_complete());

        state.select_original("1");
        state.select_modified("3");
        assert!(state.is_complete());

        state.swap();
        assert_eq!(state.original.as_deref(), Some("3"));
        assert_eq!(state.modified.as_deref(), Some("1"));

        state.clear_selection();
        assert!(!state.is_complete());
    }

    #[test]
    fn retain_known_drops_stale_ids() {
        let mut state = ViewState::default();
        state.select_original("1");
        state.select_modified("gone");

        let ids = ["1", "2"];
        state.retain_known(|id| ids.iter().any(|k| *k == id));

        assert_eq!(state.original.as_deref(), Some("1"));
        assert_eq!(state.modified, None);
    }
}
