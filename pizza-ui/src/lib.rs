pub mod app;
pub mod config;
pub mod logging;
pub mod render;

pub use app::{Command, CommandError, run_session};
pub use config::AppConfig;
