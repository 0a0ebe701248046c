use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffLineKind {
    Added,
    Removed,
    Unchanged,
    /// Reserved. Neither diff strategy emits it.
    Modified,
}

impl DiffLineKind {
    /// Marker prepended to the line text in the unified view
    pub fn marker(&self) -> &'static str {
        match self {
            DiffLineKind::Added => "+ ",
            DiffLineKind::Removed => "- ",
            DiffLineKind::Unchanged | DiffLineKind::Modified => "",
        }
    }
}

/// One record of a line diff.
///
/// Positions are 1-based. `position_in_modified` is set for added and
/// unchanged lines, `position_in_original` for removed and unchanged lines.
/// Added lines also carry `position_in_original`: the original-side cursor
/// at the time of the insertion. It is informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub kind: DiffLineKind,
    pub content: String,
    pub position_in_modified: Option<usize>,
    pub position_in_original: Option<usize>,
}

impl DiffLine {
    pub fn unchanged(content: &str, original: usize, modified: usize) -> Self {
        Self {
            kind: DiffLineKind::Unchanged,
            content: content.to_string(),
            position_in_modified: Some(modified),
            position_in_original: Some(original),
        }
    }

    pub fn removed(content: &str, original: usize) -> Self {
        Self {
            kind: DiffLineKind::Removed,
            content: content.to_string(),
            position_in_modified: None,
            position_in_original: Some(original),
        }
    }

    pub fn added(content: &str, modified: usize, original_cursor: usize) -> Self {
        Self {
            kind: DiffLineKind::Added,
            content: content.to_string(),
            position_in_modified: Some(modified),
            position_in_original: Some(original_cursor),
        }
    }

    pub fn is_change(&self) -> bool {
        self.kind != DiffLineKind::Unchanged
    }
}

/// Which line diff to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffStrategy {
    /// Greedy single-pass cursor walk. Never resynchronises after the first
    /// divergence; kept as the default for compatibility with existing
    /// review output.
    #[default]
    CursorWalk,
    /// Minimal line diff (Myers). Changes the output for any pair of texts
    /// that diverge and later agree again.
    LineDiff,
}
