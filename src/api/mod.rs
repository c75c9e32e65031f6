//! API layer - HTTP client and response types

mod client;
mod types;

pub use client::{ApiClient, ApiError};
pub use types::{ApiStatus, BackgroundCount, DailyCount, Program, ProgramsResponse, StatsResponse};
