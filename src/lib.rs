//! EduDash - Terminal Analytics Dashboard
//!
//! A TUI dashboard that polls the admissions assistant HTTP API and
//! renders conversation statistics and educational program listings.

pub mod api;
pub mod app;
pub mod config;
pub mod ui;
pub mod view;

// Re-exports
pub use api::{ApiClient, ApiError, Program, ProgramsResponse, StatsResponse};
pub use app::{App, FetchEvent};
pub use config::Config;

/// Result type alias
pub type Result<T> = anyhow::Result<T>;
