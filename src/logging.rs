use log::{info, LevelFilter};
use std::env;

pub const UI_NAMESPACE: &str = "uv_dial::ui";
pub const FORECAST_NAMESPACE: &str = "uv_dial::forecast";
pub const CONFIG_NAMESPACE: &str = "uv_dial::config";

pub fn init_logging() {
    // Set default log level if not specified in environment
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "info");
        }
    }

    env_logger::Builder::from_env(env_logger::Env::default())
        .format_timestamp_millis()
        .format_module_path(true)
        .format_target(true)
        .filter(Some(UI_NAMESPACE), LevelFilter::Debug)
        .filter(Some(FORECAST_NAMESPACE), LevelFilter::Debug)
        .filter(Some(CONFIG_NAMESPACE), LevelFilter::Debug)
        .init();

    info!("Logging initialized");
}

// Convenience macros for each namespace
#[macro_export]
macro_rules! ui_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::UI_NAMESPACE, $($arg)*)
    };
}

#[macro_export]
macro_rules! forecast_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::FORECAST_NAMESPACE, $($arg)*)
    };
}

#[macro_export]
macro_rules! config_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::CONFIG_NAMESPACE, $($arg)*)
    };
}
