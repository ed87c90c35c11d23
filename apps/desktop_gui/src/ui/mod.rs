//! UI layer for the desktop shell: app frame, per-view renderers and shared widgets.

pub mod app;
pub mod screens;
pub mod widgets;

pub use app::ChavrutaApp;
