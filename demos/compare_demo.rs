//! Example comparing the bundled sample versions without the UI
//!
//! Run with: cargo run --example compare_demo

use masterplan_review::diff::DiffStrategy;
use masterplan_review::presenter::{RenderedDiff, export_diff, render_diff};
use masterplan_review::sample::sample_versions;
use masterplan_review::store::MemoryVersionStore;
use masterplan_review::view_state::{ViewOptions, ViewState};

fn main() {
    let store = MemoryVersionStore::from_versions(sample_versions());

    let mut view = ViewState::with_options(ViewOptions {
        side_by_side: false,
        show_line_numbers: true,
        show_only_changes: true,
    });
    view.select_original("1");
    view.select_modified("3");

    for strategy in [DiffStrategy::CursorWalk, DiffStrategy::LineDiff] {
        println!("=== {:?} ===\n", strategy);

        if let RenderedDiff::Unified { summary, .. } = render_diff(&store, &view, strategy) {
            println!(
                "+{} additions, -{} deletions, {} unchanged\n",
                summary.additions, summary.deletions, summary.unchanged
            );
        }

        if let Some(text) = export_diff(&store, &view, strategy) {
            println!("{}\n", text);
        }
    }
}
