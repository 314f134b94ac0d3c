mod app;
mod effects;
mod logging;
mod registry_file;
mod ui;

pub use app::run_app;
