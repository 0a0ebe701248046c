use crate::diff::DiffLineKind;
use egui::{Color32, Context, Stroke, Visuals};

pub const REMOVED_LINE_BG: Color32 = Color32::from_rgb(255, 230, 230);
pub const ADDED_LINE_BG: Color32 = Color32::from_rgb(230, 255, 230);
pub const REMOVED_TEXT_COLOR: Color32 = Color32::from_rgb(150, 0, 0);
pub const ADDED_TEXT_COLOR: Color32 = Color32::from_rgb(0, 100, 0);

// Dark-mode counterparts
const REMOVED_LINE_BG_DARK: Color32 = Color32::from_rgb(70, 30, 30);
const ADDED_LINE_BG_DARK: Color32 = Color32::from_rgb(30, 60, 30);
const REMOVED_TEXT_COLOR_DARK: Color32 = Color32::from_rgb(255, 150, 150);
const ADDED_TEXT_COLOR_DARK: Color32 = Color32::from_rgb(150, 230, 150);

pub fn configure_style(ctx: &Context, dark: bool) {
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    });

    let mut visuals = if dark { Visuals::dark() } else { Visuals::light() };
    visuals.window_shadow = egui::epaint::Shadow::NONE;
    visuals.popup_shadow = egui::epaint::Shadow::NONE;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.0, Color32::TRANSPARENT);

    ctx.set_visuals(visuals);
}

/// Background fill for a unified-view line
pub fn line_background(kind: DiffLineKind, dark: bool) -> Color32 {
    match (kind, dark) {
        (DiffLineKind::Added, false) => ADDED_LINE_BG,
        (DiffLineKind::Added, true) => ADDED_LINE_BG_DARK,
        (DiffLineKind::Removed, false) => REMOVED_LINE_BG,
        (DiffLineKind::Removed, true) => REMOVED_LINE_BG_DARK,
        (DiffLineKind::Unchanged | DiffLineKind::Modified, _) => Color32::TRANSPARENT,
    }
}

pub fn added_text(dark: bool) -> Color32 {
    if dark {
        ADDED_TEXT_COLOR_DARK
    } else {
        ADDED_TEXT_COLOR
    }
}

pub fn removed_text(dark: bool) -> Color32 {
    if dark {
        REMOVED_TEXT_COLOR_DARK
    } else {
        REMOVED_TEXT_COLOR
    }
}
