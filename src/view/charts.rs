//! Chart view models built from a stats snapshot
//!
//! Each successful stats fetch produces fresh chart models that fully
//! replace the previous ones; nothing here is updated in place.

use crate::api::{BackgroundCount, DailyCount};
use chrono::NaiveDate;
use ratatui::style::Color;

/// Display labels for the known background categories.
/// Unrecognized keys pass through unchanged so future categories still render.
pub fn background_label(key: &str) -> String {
    match key {
        "technical" => "Technical".to_string(),
        "product" => "Product".to_string(),
        "mixed" => "Mixed".to_string(),
        "beginner" => "Beginner".to_string(),
        "unknown" => "Not specified".to_string(),
        other => other.to_string(),
    }
}

/// Slice palette, cycled when there are more categories than colors
const SLICE_COLORS: [Color; 5] = [
    Color::Red,
    Color::Blue,
    Color::Yellow,
    Color::Cyan,
    Color::Magenta,
];

/// Line chart of conversations per day
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationsChart {
    /// (day index, conversation count) points
    pub points: Vec<(f64, f64)>,
    /// Day/month axis labels, one per point
    pub labels: Vec<String>,
    /// Largest count in the series, for y-axis bounds
    pub max: u64,
}

impl ConversationsChart {
    /// Build from a daily series
    pub fn build(daily: &[DailyCount]) -> Self {
        let points = daily
            .iter()
            .enumerate()
            .map(|(i, d)| (i as f64, d.conversations as f64))
            .collect();
        let labels = daily.iter().map(|d| format_day(&d.date)).collect();
        let max = daily.iter().map(|d| d.conversations).max().unwrap_or(0);

        Self { points, labels, max }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Day/month label, raw passthrough when the date does not parse
fn format_day(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%d %b").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// One category slice of the background breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundSlice {
    pub label: String,
    pub count: u64,
    pub color: Color,
}

/// Category breakdown of user backgrounds
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundChart {
    pub slices: Vec<BackgroundSlice>,
    pub total: u64,
}

impl BackgroundChart {
    /// Build from a background distribution
    pub fn build(backgrounds: &[BackgroundCount]) -> Self {
        let slices = backgrounds
            .iter()
            .enumerate()
            .map(|(i, b)| BackgroundSlice {
                label: background_label(&b.background),
                count: b.count,
                color: SLICE_COLORS[i % SLICE_COLORS.len()],
            })
            .collect();
        let total = backgrounds.iter().map(|b| b.count).sum();

        Self { slices, total }
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
