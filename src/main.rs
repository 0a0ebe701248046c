use masterplan_review::app::ReviewApp;
use masterplan_review::config::Config;
use masterplan_review::constant;
use masterplan_review::ui;

fn main() -> eframe::Result {
    let config = Config::default();
    tracing_subscriber::fmt()
        .with_max_level(config.settings.log_level())
        .init();

    let options = ui::viewport::build_viewport();

    eframe::run_native(
        constant::DEFAULT_WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            let fonts = ui::font::setup_fonts(&config.settings.preferred_fonts);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(ReviewApp::new(cc, config)))
        }),
    )
}
