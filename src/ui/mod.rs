pub mod diff_view;
pub mod font;
pub mod picker;
pub mod theme;
pub mod title_bar;
pub mod viewport;
