//! Line diffing between two content versions
//!
//! The engine is pure: two line sequences in, an ordered list of
//! [`DiffLine`] records out.

mod engine;
mod stats;
mod types;

pub use engine::{compute_diff, compute_diff_with, diff_texts, split_lines};
pub use stats::{DiffSummary, has_meaningful_changes, summarize};
pub use types::{DiffLine, DiffLineKind, DiffStrategy};
