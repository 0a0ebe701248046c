//! Turns a pair of selected versions into something the UI can draw
//!
//! Rendering is a pure projection of the view state and the store. An
//! incomplete or unresolved selection yields [`RenderedDiff::Prompt`].

use crate::diff::{
    DiffLine, DiffLineKind, DiffStrategy, DiffSummary, diff_texts, has_meaningful_changes,
    summarize,
};
use crate::store::{ContentVersion, VersionStore};
use crate::view_state::{ViewOptions, ViewState};

/// One side of the side-by-side view: a version's header and raw text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPane {
    pub title: String,
    pub author: String,
    pub timestamp: String,
    pub content: String,
}

impl From<ContentVersion> for VersionPane {
    fn from(version: ContentVersion) -> Self {
        Self {
            title: version.title,
            author: version.author,
            timestamp: version.timestamp,
            content: version.content,
        }
    }
}

/// A unified-view line ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub kind: DiffLineKind,
    /// Line number column, e.g. `12`, `+12` or `-7`; `None` when line numbers are off
    pub gutter: Option<String>,
    /// Content with its `+ `/`- ` marker
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedDiff {
    /// Selection incomplete or not found in the store
    Prompt,
    SideBySide {
        original: VersionPane,
        modified: VersionPane,
        summary: DiffSummary,
    },
    Unified {
        lines: Vec<RenderedLine>,
        summary: DiffSummary,
        meaningful: bool,
    },
}

impl RenderedDiff {
    pub fn summary(&self) -> Option<DiffSummary> {
        match self {
            RenderedDiff::Prompt => None,
            RenderedDiff::SideBySide { summary, .. } | RenderedDiff::Unified { summary, .. } => {
                Some(*summary)
            }
        }
    }
}

fn gutter(line: &DiffLine) -> String {
    let number = |pos: Option<usize>| pos.map(|p| p.to_string()).unwrap_or_default();
    match line.kind {
        DiffLineKind::Added => format!("+{}", number(line.position_in_modified)),
        DiffLineKind::Removed => format!("-{}", number(line.position_in_original)),
        DiffLineKind::Unchanged | DiffLineKind::Modified => number(line.position_in_modified),
    }
}

/// Format diff lines for the unified view.
///
/// `side_by_side` is ignored here; only the filter and line numbers apply.
pub fn render_lines(diff_lines: &[DiffLine], options: &ViewOptions) -> Vec<RenderedLine> {
    diff_lines
        .iter()
        .filter(|line| !options.show_only_changes || line.is_change())
        .map(|line| RenderedLine {
            kind: line.kind,
            gutter: options.show_line_numbers.then(|| gutter(line)),
            text: format!("{}{}", line.kind.marker(), line.content),
        })
        .collect()
}

fn resolve(
    store: &impl VersionStore,
    state: &ViewState,
) -> Option<(ContentVersion, ContentVersion)> {
    let (Some(original_id), Some(modified_id)) = (&state.original, &state.modified) else {
        return None;
    };

    match (
        store.get_version(original_id),
        store.get_version(modified_id),
    ) {
        (Some(original), Some(modified)) => Some((original, modified)),
        _ => {
            tracing::debug!(
                "Selection {} / {} does not resolve",
                original_id,
                modified_id
            );
            None
        }
    }
}

/// Render the comparison for the current view state
pub fn render_diff(
    store: &impl VersionStore,
    state: &ViewState,
    strategy: DiffStrategy,
) -> RenderedDiff {
    let Some((original, modified)) = resolve(store, state) else {
        return RenderedDiff::Prompt;
    };

    let diff_lines = diff_texts(strategy, &original.content, &modified.content);
    let summary = summarize(&diff_lines);

    if state.options.side_by_side {
        RenderedDiff::SideBySide {
            original: original.into(),
            modified: modified.into(),
            summary,
        }
    } else {
        RenderedDiff::Unified {
            lines: render_lines(&diff_lines, &state.options),
            summary,
            meaningful: has_meaningful_changes(&diff_lines),
        }
    }
}

/// Plain-text unified diff for export, or `None` if the selection does not resolve.
///
/// Always unified, honouring the line-number and changes-only toggles.
pub fn export_diff(
    store: &impl VersionStore,
    state: &ViewState,
    strategy: DiffStrategy,
) -> Option<String> {
    let (original, modified) = resolve(store, state)?;

    let diff_lines = diff_texts(strategy, &original.content, &modified.content);
    let summary = summarize(&diff_lines);

    let mut out = vec![
        format!(
            "--- {} ({}) by {}",
            original.title, original.timestamp, original.author
        ),
        format!(
            "+++ {} ({}) by {}",
            modified.title, modified.timestamp, modified.author
        ),
        format!(
            "+{} additions, -{} deletions, {} unchanged",
            summary.additions, summary.deletions, summary.unchanged
        ),
        String::new(),
    ];

    for line in render_lines(&diff_lines, &state.options) {
        match line.gutter {
            Some(gutter) => out.push(format!("{:>6} {}", gutter, line.text)),
            None => out.push(line.text),
        }
    }

    Some(out.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compute_diff;
    use crate::sample::sample_versions;
    use crate::store::MemoryVersionStore;

    fn store() -> MemoryVersionStore {
        let mut versions = sample_versions();
        versions.push(ContentVersion {
            id: "abc-1".to_string(),
            title: "Letters".to_string(),
            author: "Teacher".to_string(),
            timestamp: "2024-02-01 09:00".to_string(),
            content: "a\nb\nc".to_string(),
        });
        versions.push(ContentVersion {
            id: "abc-2".to_string(),
            title: "Letters revised".to_string(),
            author: "Student".to_string(),
            timestamp: "2024-02-02 09:00".to_string(),
            content: "a\nx\nc".to_string(),
        });
        MemoryVersionStore::from_versions(versions)
    }

    fn state(original: &str, modified: &str, options: ViewOptions) -> ViewState {
        ViewState {
            original: Some(original.to_string()),
            modified: Some(modified.to_string()),
            options,
        }
    }

    fn unified(show_line_numbers: bool, show_only_changes: bool) -> ViewOptions {
        ViewOptions {
            side_by_side: false,
            show_line_numbers,
            show_only_changes,
        }
    }

    #[test]
    fn incomplete_selection_prompts() {
        let store = store();
        let mut view = ViewState::default();
        assert_eq!(
            render_diff(&store, &view, DiffStrategy::CursorWalk),
            RenderedDiff::Prompt
        );

        view.select_original("1");
        assert_eq!(
            render_diff(&store, &view, DiffStrategy::CursorWalk),
            RenderedDiff::Prompt
        );
    }

    #[test]
    fn unknown_id_prompts() {
        let store = store();
        let view = state("1", "does-not-exist", unified(true, false));

        let rendered = render_diff(&store, &view, DiffStrategy::CursorWalk);
        assert_eq!(rendered, RenderedDiff::Prompt);
        assert!(rendered.summary().is_none());
        assert!(export_diff(&store, &view, DiffStrategy::CursorWalk).is_none());
    }

    #[test]
    fn summary_ignores_changes_only_filter() {
        let store = store();
        let all = render_diff(
            &store,
            &state("1", "3", unified(true, false)),
            DiffStrategy::CursorWalk,
        );
        let changes_only = render_diff(
            &store,
            &state("1", "3", unified(true, true)),
            DiffStrategy::CursorWalk,
        );

        assert_eq!(all.summary(), changes_only.summary());

        let (
            RenderedDiff::Unified { lines: all_lines, .. },
            RenderedDiff::Unified {
                lines: changed_lines,
                ..
            },
        ) = (all, changes_only)
        else {
            panic!("expected unified views");
        };
        assert!(changed_lines.len() < all_lines.len());
        assert!(
            changed_lines
                .iter()
                .all(|l| l.kind != DiffLineKind::Unchanged)
        );
    }

    #[test]
    fn side_by_side_shows_raw_texts() {
        let store = store();
        let original = store.get_version("1").unwrap();
        let modified = store.get_version("2").unwrap();

        for show_line_numbers in [false, true] {
            for show_only_changes in [false, true] {
                let options = ViewOptions {
                    side_by_side: true,
                    show_line_numbers,
                    show_only_changes,
                };
                for strategy in [DiffStrategy::CursorWalk, DiffStrategy::LineDiff] {
                    match render_diff(&store, &state("1", "2", options), strategy) {
                        RenderedDiff::SideBySide {
                            original: left,
                            modified: right,
                            ..
                        } => {
                            assert_eq!(left.content, original.content);
                            assert_eq!(right.content, modified.content);
                            assert_eq!(left.title, original.title);
                        }
                        other => panic!("expected side-by-side, got {:?}", other),
                    }
                }
            }
        }
    }

    #[test]
    fn unified_lines_carry_markers_and_gutters() {
        let store = store();
        let rendered = render_diff(
            &store,
            &state("abc-1", "abc-2", unified(true, false)),
            DiffStrategy::CursorWalk,
        );

        let RenderedDiff::Unified { lines, summary, .. } = rendered else {
            panic!("expected unified view");
        };
        let shown: Vec<_> = lines
            .iter()
            .map(|l| (l.gutter.clone().unwrap(), l.text.clone()))
            .collect();
        assert_eq!(
            shown,
            vec![
                ("1".to_string(), "a".to_string()),
                ("-2".to_string(), "- b".to_string()),
                ("-3".to_string(), "- c".to_string()),
                ("+2".to_string(), "+ x".to_string()),
                ("+3".to_string(), "+ c".to_string()),
            ]
        );
        assert_eq!(summary.additions, 2);
        assert_eq!(summary.deletions, 2);
        assert_eq!(summary.unchanged, 1);
    }

    #[test]
    fn line_numbers_can_be_hidden() {
        let diff = compute_diff(&["a", "b"], &["a", "c"]);
        let lines = render_lines(&diff, &unified(false, true));

        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.gutter.is_none()));
        assert_eq!(lines[0].text, "- b");
    }

    #[test]
    fn line_diff_strategy_resynchronises() {
        let store = store();
        let rendered = render_diff(
            &store,
            &state("abc-1", "abc-2", unified(false, false)),
            DiffStrategy::LineDiff,
        );

        let summary = rendered.summary().unwrap();
        assert_eq!(summary.unchanged, 2);
        assert_eq!(summary.additions, 1);
        assert_eq!(summary.deletions, 1);
    }

    #[test]
    fn export_uses_unified_layout() {
        let store = store();
        let view = state("abc-1", "abc-2", ViewOptions::default());

        let text = export_diff(&store, &view, DiffStrategy::CursorWalk).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "--- Letters (2024-02-01 09:00) by Teacher");
        assert_eq!(lines[1], "+++ Letters revised (2024-02-02 09:00) by Student");
        assert_eq!(lines[2], "+2 additions, -2 deletions, 1 unchanged");
        assert_eq!(lines[4], "     1 a");
        assert_eq!(lines[5], "    -2 - b");
        assert_eq!(lines.len(), 9);
    }
}
