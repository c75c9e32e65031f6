//! Response types for the dashboard API

use serde::{Deserialize, Serialize};

/// Application-level status carried by every response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// Body of GET /api/stats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub daily_conversations: Vec<DailyCount>,
    #[serde(default)]
    pub user_backgrounds: Vec<BackgroundCount>,
    pub message: Option<String>,
}

/// Conversations recorded on a single day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCount {
    /// Calendar day, YYYY-MM-DD
    pub date: String,
    pub conversations: u64,
}

/// Number of users sharing one background category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundCount {
    pub background: String,
    pub count: u64,
}

/// Body of GET /api/programs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramsResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub programs: Vec<Program>,
    pub message: Option<String>,
}

/// One educational program as served by the API.
/// Everything except name and url is optional upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub cost: Option<String>,
    pub budget_places: Option<u32>,
    pub contract_places: Option<u32>,
    /// ISO-8601 timestamp string
    pub updated_at: Option<String>,
}
