//! Program cards and panel state

use crate::api::Program;
use chrono::NaiveDateTime;

/// Strip control characters from server-supplied text before it reaches the
/// terminal. A raw message must never be able to smuggle escape sequences
/// into the rendered output.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// Display-ready program card. Missing fields are filled with
/// fixed placeholders so every card renders the same shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramCard {
    pub name: String,
    pub description: String,
    pub budget_places: u32,
    pub contract_places: u32,
    pub duration: String,
    pub cost: String,
    pub updated_at: String,
    pub url: String,
}

impl ProgramCard {
    pub fn from_program(program: &Program) -> Self {
        Self {
            name: sanitize(&program.name),
            description: program
                .description
                .as_deref()
                .map(sanitize)
                .unwrap_or_else(|| "No description".to_string()),
            budget_places: program.budget_places.unwrap_or(0),
            contract_places: program.contract_places.unwrap_or(0),
            duration: program
                .duration
                .as_deref()
                .map(sanitize)
                .unwrap_or_else(|| "N/A".to_string()),
            cost: program
                .cost
                .as_deref()
                .map(sanitize)
                .unwrap_or_else(|| "Not specified".to_string()),
            updated_at: program
                .updated_at
                .as_deref()
                .map(format_updated)
                .unwrap_or_else(|| "N/A".to_string()),
            url: sanitize(&program.url),
        }
    }
}

/// Date-only form of the updated-at timestamp, raw passthrough on parse failure
fn format_updated(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| sanitize(timestamp))
}

/// Programs panel display state
#[derive(Debug, Clone, PartialEq)]
pub enum ProgramsPanel {
    /// Waiting for the first response
    Loading,
    /// Server returned an empty program list
    Empty,
    Loaded(Vec<ProgramCard>),
    /// Fetch failed; the message is shown as a banner in the panel
    Error(String),
}

impl ProgramsPanel {
    /// Build the panel state from a fresh program list
    pub fn from_programs(programs: &[Program]) -> Self {
        if programs.is_empty() {
            Self::Empty
        } else {
            Self::Loaded(programs.iter().map(ProgramCard::from_program).collect())
        }
    }

    /// Error banner state with a sanitized message
    pub fn error(message: &str) -> Self {
        Self::Error(sanitize(message))
    }

    /// Cards currently shown, empty for every non-loaded state
    pub fn cards(&self) -> &[ProgramCard] {
        match self {
            Self::Loaded(cards) => cards,
            _ => &[],
        }
    }
}
