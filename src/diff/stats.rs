use super::types::{DiffLine, DiffLineKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub additions: usize,
    pub deletions: usize,
    pub unchanged: usize,
}

impl DiffSummary {
    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }
}

/// Count line kinds over a full diff.
///
/// Always pass the unfiltered diff; display filters must not change these numbers.
pub fn summarize(diff_lines: &[DiffLine]) -> DiffSummary {
    let mut summary = DiffSummary::default();

    for line in diff_lines {
        match line.kind {
            DiffLineKind::Added => summary.additions += 1,
            DiffLineKind::Removed => summary.deletions += 1,
            DiffLineKind::Unchanged => summary.unchanged += 1,
            DiffLineKind::Modified => {}
        }
    }

    summary
}

/// Check if diff lines contain meaningful changes (non-blank added or removed content)
pub fn has_meaningful_changes(diff_lines: &[DiffLine]) -> bool {
    diff_lines
        .iter()
        .any(|line| line.is_change() && !line.content.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compute_diff;

    #[test]
    fn counts_each_kind() {
        let diff = compute_diff(&["a", "b", "c"], &["a", "x", "c"]);
        let summary = summarize(&diff);

        assert_eq!(
            summary,
            DiffSummary {
                additions: 2,
                deletions: 2,
                unchanged: 1,
            }
        );
        assert!(summary.has_changes());
    }

    #[test]
    fn identical_texts_have_no_changes() {
        let diff = compute_diff(&["x", "y"], &["x", "y"]);
        let summary = summarize(&diff);

        assert_eq!(summary.unchanged, 2);
        assert!(!summary.has_changes());
        assert!(!has_meaningful_changes(&diff));
    }

    #[test]
    fn blank_only_changes_are_not_meaningful() {
        let diff = compute_diff(&["a", "   "], &["a", "\t"]);
        assert!(summarize(&diff).has_changes());
        assert!(!has_meaningful_changes(&diff));
    }
}
