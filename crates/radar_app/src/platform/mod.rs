mod app;
mod effects;
mod format;
mod logging;
mod ui;

pub use app::run_app;
