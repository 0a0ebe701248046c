use super::types::{DiffLine, DiffStrategy};
use similar::{Algorithm, DiffTag, capture_diff_slices};

/// Split a text body into lines on `'\n'`.
///
/// An empty text is one empty line and a trailing newline produces a
/// trailing empty line. Carriage returns are left in place.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Compute a line diff between `original` and `modified` with the cursor walk.
///
/// Both cursors advance together while the current lines are equal. On the
/// first mismatch every remaining original line is reported removed, then
/// every remaining modified line added. A side that has run out compares as
/// an empty line, so an empty line on the other side still counts as
/// unchanged.
pub fn compute_diff<S: AsRef<str>>(original: &[S], modified: &[S]) -> Vec<DiffLine> {
    let mut diff_lines = Vec::with_capacity(original.len().max(modified.len()));
    let mut i = 0usize;
    let mut j = 0usize;

    while i < original.len() || j < modified.len() {
        let a = original.get(i).map(|s| s.as_ref()).unwrap_or("");
        let b = modified.get(j).map(|s| s.as_ref()).unwrap_or("");

        if a == b {
            diff_lines.push(DiffLine::unchanged(b, i + 1, j + 1));
            i += 1;
            j += 1;
        } else if i < original.len() {
            diff_lines.push(DiffLine::removed(a, i + 1));
            i += 1;
        } else {
            diff_lines.push(DiffLine::added(b, j + 1, i + 1));
            j += 1;
        }
    }

    diff_lines
}

/// Minimal line diff via Myers.
///
/// Replaced blocks are emitted as all removals followed by all additions.
fn compute_line_diff<S: AsRef<str>>(original: &[S], modified: &[S]) -> Vec<DiffLine> {
    let old: Vec<&str> = original.iter().map(|s| s.as_ref()).collect();
    let new: Vec<&str> = modified.iter().map(|s| s.as_ref()).collect();
    let mut diff_lines = Vec::with_capacity(old.len().max(new.len()));

    for op in capture_diff_slices(Algorithm::Myers, &old, &new) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                for (o, n) in old_range.zip(new_range) {
                    diff_lines.push(DiffLine::unchanged(new[n], o + 1, n + 1));
                }
            }
            DiffTag::Delete => {
                for o in old_range {
                    diff_lines.push(DiffLine::removed(old[o], o + 1));
                }
            }
            DiffTag::Insert => {
                for n in new_range {
                    diff_lines.push(DiffLine::added(new[n], n + 1, old_range.start + 1));
                }
            }
            DiffTag::Replace => {
                let cursor = old_range.end + 1;
                for o in old_range {
                    diff_lines.push(DiffLine::removed(old[o], o + 1));
                }
                for n in new_range {
                    diff_lines.push(DiffLine::added(new[n], n + 1, cursor));
                }
            }
        }
    }

    diff_lines
}

/// Run the selected strategy
pub fn compute_diff_with<S: AsRef<str>>(
    strategy: DiffStrategy,
    original: &[S],
    modified: &[S],
) -> Vec<DiffLine> {
    match strategy {
        DiffStrategy::CursorWalk => compute_diff(original, modified),
        DiffStrategy::LineDiff => compute_line_diff(original, modified),
    }
}

/// Diff two text bodies after splitting them into lines
pub fn diff_texts(strategy: DiffStrategy, original: &str, modified: &str) -> Vec<DiffLine> {
    compute_diff_with(strategy, &split_lines(original), &split_lines(modified))
}
