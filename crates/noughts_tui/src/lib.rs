//! Noughts terminal app.
//!
//! Renders a [`noughts::Session`] with ratatui, turns key presses into
//! session events and times the computer's answers with tokio.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod scheduler;
pub mod screens;
pub mod ui;

pub use app::{App, run_tui};
pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings};
pub use logging::init_tracing;
pub use replay::replay;
pub use scheduler::AiScheduler;
