//! App-level tests covering snapshot application, the staleness guard,
//! and the asymmetric failure behavior of the two refresh flows.

use std::time::Duration;

use edudash::api::{
    ApiClient, ApiError, ApiStatus, BackgroundCount, DailyCount, Program, ProgramsResponse,
    StatsResponse,
};
use edudash::app::App;
use edudash::config::Config;
use edudash::view::ProgramsPanel;

fn make_app() -> App {
    let client = ApiClient::new("http://localhost:9", Duration::from_secs(1)).unwrap();
    App::new(client, &Config::default())
}

fn stats(daily: &[(&str, u64)], backgrounds: &[(&str, u64)]) -> StatsResponse {
    StatsResponse {
        status: ApiStatus::Success,
        daily_conversations: daily
            .iter()
            .map(|(date, conversations)| DailyCount {
                date: date.to_string(),
                conversations: *conversations,
            })
            .collect(),
        user_backgrounds: backgrounds
            .iter()
            .map(|(background, count)| BackgroundCount {
                background: background.to_string(),
                count: *count,
            })
            .collect(),
        message: None,
    }
}

fn programs(names: &[&str]) -> ProgramsResponse {
    ProgramsResponse {
        status: ApiStatus::Success,
        programs: names
            .iter()
            .map(|name| Program {
                name: name.to_string(),
                url: format!("https://example.org/{}", name.to_lowercase()),
                description: None,
                duration: None,
                cost: None,
                budget_places: None,
                contract_places: None,
                updated_at: None,
            })
            .collect(),
        message: None,
    }
}

#[test]
fn test_stats_snapshot_replaces_both_charts() {
    let mut app = make_app();
    assert!(app.conversations.is_none());
    assert!(app.backgrounds.is_none());

    app.handle_stats(
        1,
        Ok(stats(
            &[("2025-08-18", 4), ("2025-08-19", 7), ("2025-08-20", 2)],
            &[("technical", 12), ("product", 3)],
        )),
    );

    assert_eq!(app.conversations.as_ref().unwrap().len(), 3);
    assert_eq!(app.backgrounds.as_ref().unwrap().len(), 2);
    assert_eq!(app.stats_refreshes, 1);

    // Second snapshot fully replaces the first
    app.handle_stats(2, Ok(stats(&[("2025-08-21", 9)], &[("mixed", 1)])));

    assert_eq!(app.conversations.as_ref().unwrap().len(), 1);
    assert_eq!(app.backgrounds.as_ref().unwrap().len(), 1);
    assert_eq!(app.stats_refreshes, 2);
}

#[test]
fn test_stats_failure_keeps_previous_charts() {
    let mut app = make_app();
    app.handle_stats(1, Ok(stats(&[("2025-08-18", 4)], &[("technical", 12)])));

    app.handle_stats(2, Err(ApiError::Api("database unavailable".to_string())));

    // Charts are stale but intact; failures only go to the log
    assert_eq!(app.conversations.as_ref().unwrap().len(), 1);
    assert_eq!(app.stats_refreshes, 1);
}

#[test]
fn test_stale_stats_response_is_dropped() {
    let mut app = make_app();

    // Generation 2 resolves first, then the slow generation 1 arrives
    app.handle_stats(2, Ok(stats(&[("2025-08-19", 7)], &[("product", 3)])));
    app.handle_stats(
        1,
        Ok(stats(&[("2025-08-18", 4), ("2025-08-19", 5)], &[])),
    );

    let chart = app.conversations.as_ref().unwrap();
    assert_eq!(chart.len(), 1);
    assert_eq!(chart.points[0], (0.0, 7.0));
    assert_eq!(app.stats_refreshes, 1);
}

#[test]
fn test_first_stats_application_has_nothing_to_replace() {
    let mut app = make_app();

    // Must not fail when no prior chart exists, and again right after
    app.handle_stats(1, Ok(stats(&[("2025-08-18", 4)], &[])));
    app.handle_stats(2, Ok(stats(&[("2025-08-19", 7)], &[])));

    assert_eq!(app.stats_refreshes, 2);
}

#[test]
fn test_empty_program_list_shows_placeholder() {
    let mut app = make_app();
    app.handle_programs(1, Ok(programs(&[])));

    assert_eq!(app.programs, ProgramsPanel::Empty);
    assert!(app.programs.cards().is_empty());
}

#[test]
fn test_program_list_renders_one_card_each() {
    let mut app = make_app();
    app.handle_programs(1, Ok(programs(&["Alpha", "Beta", "Gamma"])));

    let cards = app.programs.cards();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].name, "Alpha");
    assert_eq!(cards[2].url, "https://example.org/gamma");
    // Absent numeric fields display as zero
    assert_eq!(cards[0].budget_places, 0);
}

#[test]
fn test_programs_failure_shows_error_banner() {
    let mut app = make_app();
    app.handle_programs(
        1,
        Err(ApiError::Api("connection refused by upstream".to_string())),
    );

    match &app.programs {
        ProgramsPanel::Error(message) => {
            assert!(message.contains("connection refused by upstream"))
        }
        other => panic!("expected error banner, got {:?}", other),
    }
}

#[test]
fn test_stale_programs_response_is_dropped() {
    let mut app = make_app();

    app.handle_programs(2, Ok(programs(&["Alpha"])));
    app.handle_programs(1, Err(ApiError::Api("slow failure".to_string())));

    // The stale failure must not overwrite the fresh card list
    assert_eq!(app.programs.cards().len(), 1);
}

#[test]
fn test_selection_is_clamped_to_new_list() {
    let mut app = make_app();
    app.handle_programs(1, Ok(programs(&["Alpha", "Beta", "Gamma"])));
    app.selected_program = 2;

    app.handle_programs(2, Ok(programs(&["Alpha"])));
    assert_eq!(app.selected_program, 0);
}
