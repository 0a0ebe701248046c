use super::theme;
use crate::constant::PROMPT_TEXT;
use crate::diff::{DiffLineKind, DiffSummary};
use crate::presenter::{RenderedDiff, RenderedLine, VersionPane};
use egui::{RichText, ScrollArea, Ui};

/// Draw whatever the presenter produced
pub fn render(ui: &mut Ui, rendered: &RenderedDiff, font_size: f32) {
    match rendered {
        RenderedDiff::Prompt => render_prompt(ui),
        RenderedDiff::SideBySide {
            original,
            modified,
            summary,
        } => {
            render_summary(ui, summary, true);
            ui.separator();
            ui.columns(2, |columns| {
                render_pane(&mut columns[0], "original_pane", original, font_size);
                render_pane(&mut columns[1], "modified_pane", modified, font_size);
            });
        }
        RenderedDiff::Unified {
            lines,
            summary,
            meaningful,
        } => {
            render_summary(ui, summary, *meaningful);
            ui.separator();
            render_unified(ui, lines, font_size);
        }
    }
}

fn render_prompt(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(100.0);
        ui.heading("⇄");
        ui.add_space(10.0);
        ui.label(RichText::new(PROMPT_TEXT).weak());
    });
}

fn render_summary(ui: &mut Ui, summary: &DiffSummary, meaningful: bool) {
    let dark = ui.visuals().dark_mode;
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("+{} additions", summary.additions))
                .color(theme::added_text(dark)),
        );
        ui.label(
            RichText::new(format!("-{} deletions", summary.deletions))
                .color(theme::removed_text(dark)),
        );
        ui.label(format!("{} unchanged", summary.unchanged));

        if !summary.has_changes() {
            ui.label(RichText::new("(identical)").weak());
        } else if !meaningful {
            ui.label(RichText::new("(whitespace only)").weak());
        }
    });
}

fn render_pane(ui: &mut Ui, salt: &str, pane: &VersionPane, font_size: f32) {
    ui.label(RichText::new(&pane.title).strong());
    ui.label(RichText::new(format!("{} by {}", pane.timestamp, pane.author)).weak());
    ui.add_space(4.0);

    ScrollArea::vertical()
        .id_salt(salt)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(RichText::new(&pane.content).monospace().size(font_size)).wrap(),
            );
        });
}

fn render_unified(ui: &mut Ui, lines: &[RenderedLine], font_size: f32) {
    let dark = ui.visuals().dark_mode;

    ScrollArea::vertical()
        .id_salt("unified_diff")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.style_mut().spacing.item_spacing.y = 0.0;
            let width = ui.available_width();

            for line in lines {
                egui::Frame::default()
                    .fill(theme::line_background(line.kind, dark))
                    .inner_margin(2.0)
                    .show(ui, |ui| {
                        ui.set_min_width(width - 4.0);
                        ui.horizontal(|ui| {
                            if let Some(gutter) = &line.gutter {
                                ui.label(
                                    RichText::new(format!("{:>6}", gutter))
                                        .monospace()
                                        .size(font_size)
                                        .weak(),
                                );
                            }

                            let mut text = RichText::new(&line.text).monospace().size(font_size);
                            match line.kind {
                                DiffLineKind::Added => text = text.color(theme::added_text(dark)),
                                DiffLineKind::Removed => {
                                    text = text.color(theme::removed_text(dark))
                                }
                                DiffLineKind::Unchanged | DiffLineKind::Modified => {}
                            }
                            ui.add(egui::Label::new(text).wrap());
                        });
                    });
            }
        });
}
