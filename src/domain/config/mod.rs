//! Configuration value objects

pub mod app_config;

pub use app_config::{AppConfig, DEFAULT_BOT_NAME, DEFAULT_TIMEOUT_SECS};
