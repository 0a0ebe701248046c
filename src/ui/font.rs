//! System font loading
//!
//! Course content is arbitrary Unicode, so a system font covering CJK is
//! registered ahead of egui's bundled fonts when one can be found.

use eframe::egui::{FontData, FontDefinitions, FontFamily};
use font_kit::handle::Handle;
use font_kit::source::SystemSource;
use std::sync::Arc;

const SYSTEM_FONT_NAME: &str = "SystemFont";

/// Build font definitions, trying `preferred` families before the platform defaults
pub fn setup_fonts(preferred: &[String]) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    let source = SystemSource::new();

    let candidates = preferred
        .iter()
        .map(String::as_str)
        .chain(platform_font_names().iter().copied());

    for name in candidates {
        if let Some(data) = load_family(&source, name) {
            register(&mut fonts, data);
            tracing::info!("Using system font '{}'", name);
            return fonts;
        }
    }

    match load_sans_serif(&source) {
        Some(data) => {
            register(&mut fonts, data);
            tracing::info!("Using generic system font for text");
        }
        None => tracing::warn!("Could not load a system font, using defaults"),
    }

    fonts
}

fn platform_font_names() -> &'static [&'static str] {
    match std::env::consts::OS {
        "macos" => &["PingFang SC", "Hiragino Sans GB", "Heiti SC"],
        "windows" => &["Microsoft YaHei", "SimSun", "MS Gothic"],
        "linux" => &["Noto Sans CJK SC", "Noto Sans CJK TC"],
        _ => &[],
    }
}

fn read_handle(handle: &Handle) -> Option<Vec<u8>> {
    match handle {
        Handle::Memory { bytes, .. } => Some(bytes.to_vec()),
        Handle::Path { path, .. } => std::fs::read(path).ok(),
    }
}

fn load_family(source: &SystemSource, name: &str) -> Option<Vec<u8>> {
    let family = source.select_family_by_name(name).ok()?;
    family.fonts().first().and_then(read_handle)
}

fn load_sans_serif(source: &SystemSource) -> Option<Vec<u8>> {
    let handle = source
        .select_best_match(
            &[font_kit::family_name::FamilyName::SansSerif],
            &font_kit::properties::Properties::new(),
        )
        .ok()?;
    read_handle(&handle)
}

/// Primary for proportional text, fallback for monospace
fn register(fonts: &mut FontDefinitions, data: Vec<u8>) {
    fonts.font_data.insert(
        SYSTEM_FONT_NAME.to_owned(),
        Arc::new(FontData::from_owned(data)),
    );

    if let Some(family) = fonts.families.get_mut(&FontFamily::Proportional) {
        family.insert(0, SYSTEM_FONT_NAME.to_owned());
    }
    if let Some(family) = fonts.families.get_mut(&FontFamily::Monospace) {
        family.push(SYSTEM_FONT_NAME.to_owned());
    }
}
