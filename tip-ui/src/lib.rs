pub mod app;
pub mod config;
pub mod logging;
pub mod utils;
pub mod views;

pub use app::{Command, CommandError, Flow, Session};
pub use config::{AppConfig, ConfigError};
