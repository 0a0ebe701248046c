//! Masterplan Review library
//!
//! Compares saved revisions of course content. The diff engine, presenter
//! and version stores are usable without the desktop UI.

pub mod app;
pub mod config;
pub mod constant;
pub mod diff;
pub mod messages;
pub mod presenter;
pub mod sample;
pub mod store;
pub mod ui;
pub mod view_state;
pub mod worker;
