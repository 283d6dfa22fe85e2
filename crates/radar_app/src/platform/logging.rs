//! Platform logging initialization for radar_app.
//!
//! The alternate screen belongs to the dashboard, so logs always go to
//! `./radar.log` in the current working directory, never to the terminal.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

/// Initialize the file logger. When the log file cannot be created the app
/// simply runs without logging.
pub fn initialize() {
    let log_path = PathBuf::from("./radar.log");
    match File::create(&log_path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Info, build_config(), file);
        }
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                log_path, err
            );
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
