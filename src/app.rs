//! Application state and refresh orchestration
//!
//! The app owns all view state (chart models, programs panel) and a
//! channel where background fetch tasks report their results. Fetches
//! carry a generation number; a response that arrives after a newer one
//! has already been applied is dropped, so a slow request can never
//! overwrite fresher data.

use crate::api::{ApiClient, ApiError, ProgramsResponse, StatsResponse};
use crate::config::Config;
use crate::view::{BackgroundChart, ConversationsChart, ProgramsPanel};
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Result of a background fetch, tagged with its request generation
#[derive(Debug)]
pub enum FetchEvent {
    Stats {
        generation: u64,
        result: Result<StatsResponse, ApiError>,
    },
    Programs {
        generation: u64,
        result: Result<ProgramsResponse, ApiError>,
    },
}

/// Application state
pub struct App {
    client: ApiClient,
    event_tx: mpsc::UnboundedSender<FetchEvent>,
    event_rx: mpsc::UnboundedReceiver<FetchEvent>,
    inflight: Vec<JoinHandle<()>>,

    // View state, replaced wholesale per snapshot
    pub conversations: Option<ConversationsChart>,
    pub backgrounds: Option<BackgroundChart>,
    pub programs: ProgramsPanel,

    // Generation counters for the staleness guard
    stats_generation: u64,
    stats_applied: u64,
    programs_generation: u64,
    programs_applied: u64,

    stats_interval: Duration,
    last_stats_spawn: Instant,
    pub last_stats_at: Option<DateTime<Local>>,
    pub stats_refreshes: u64,
    pub should_quit: bool,
    pub selected_program: usize,
}

impl App {
    /// Create the app; no fetches are issued until [`App::start`]
    pub fn new(client: ApiClient, config: &Config) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Self {
            client,
            event_tx,
            event_rx,
            inflight: Vec::new(),
            conversations: None,
            backgrounds: None,
            programs: ProgramsPanel::Loading,
            stats_generation: 0,
            stats_applied: 0,
            programs_generation: 0,
            programs_applied: 0,
            stats_interval: config.stats_interval(),
            last_stats_spawn: Instant::now(),
            last_stats_at: None,
            stats_refreshes: 0,
            should_quit: false,
            selected_program: 0,
        }
    }

    /// Kick off the initial stats and programs fetches
    pub fn start(&mut self) {
        self.spawn_stats_refresh();
        self.spawn_programs_refresh();
    }

    /// Spawn a stats fetch. Overlapping fetches are allowed; the
    /// generation guard drops whichever response turns out stale.
    pub fn spawn_stats_refresh(&mut self) {
        self.stats_generation += 1;
        let generation = self.stats_generation;
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        self.last_stats_spawn = Instant::now();

        log::debug!("Fetching stats (generation {})", generation);
        let handle = tokio::spawn(async move {
            let result = client.get_stats().await;
            let _ = tx.send(FetchEvent::Stats { generation, result });
        });
        self.inflight.push(handle);
    }

    /// Spawn a programs fetch
    pub fn spawn_programs_refresh(&mut self) {
        self.programs_generation += 1;
        let generation = self.programs_generation;
        let client = self.client.clone();
        let tx = self.event_tx.clone();

        log::debug!("Fetching programs (generation {})", generation);
        let handle = tokio::spawn(async move {
            let result = client.get_programs().await;
            let _ = tx.send(FetchEvent::Programs { generation, result });
        });
        self.inflight.push(handle);
    }

    /// Re-run the stats flow when the refresh interval has elapsed
    pub fn tick(&mut self) {
        if self.last_stats_spawn.elapsed() >= self.stats_interval {
            log::info!("Stats refresh interval elapsed");
            self.spawn_stats_refresh();
        }
    }

    /// Drain completed fetches (non-blocking)
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                FetchEvent::Stats { generation, result } => {
                    self.handle_stats(generation, result)
                }
                FetchEvent::Programs { generation, result } => {
                    self.handle_programs(generation, result)
                }
            }
        }

        self.inflight.retain(|handle| !handle.is_finished());
    }

    /// Apply a stats fetch result. Failures go to the log only and the
    /// charts keep their previous contents.
    pub fn handle_stats(&mut self, generation: u64, result: Result<StatsResponse, ApiError>) {
        if generation <= self.stats_applied {
            log::debug!("Dropping stale stats response (generation {})", generation);
            return;
        }

        match result {
            Ok(stats) => {
                self.conversations = Some(ConversationsChart::build(&stats.daily_conversations));
                self.backgrounds = Some(BackgroundChart::build(&stats.user_backgrounds));
                self.stats_applied = generation;
                self.stats_refreshes += 1;
                self.last_stats_at = Some(Local::now());
            }
            Err(e) => {
                log::error!("Error loading stats: {}", e);
            }
        }
    }

    /// Apply a programs fetch result. Both success and failure replace
    /// the panel; failures become a visible error banner.
    pub fn handle_programs(&mut self, generation: u64, result: Result<ProgramsResponse, ApiError>) {
        if generation <= self.programs_applied {
            log::debug!(
                "Dropping stale programs response (generation {})",
                generation
            );
            return;
        }
        self.programs_applied = generation;

        match result {
            Ok(resp) => {
                self.programs = ProgramsPanel::from_programs(&resp.programs);
            }
            Err(e) => {
                log::warn!("Error loading programs: {}", e);
                self.programs = ProgramsPanel::error(&e.to_string());
            }
        }

        // Keep the selection inside the new card list
        let count = self.programs.cards().len();
        if self.selected_program >= count {
            self.selected_program = count.saturating_sub(1);
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                log::info!("Manual refresh requested");
                self.spawn_stats_refresh();
                self.spawn_programs_refresh();
            }
            KeyCode::Up => {
                if self.selected_program > 0 {
                    self.selected_program -= 1;
                }
            }
            KeyCode::Down => {
                let count = self.programs.cards().len();
                if self.selected_program + 1 < count {
                    self.selected_program += 1;
                }
            }
            _ => {}
        }
    }

    /// Check if we should poll for input
    pub fn should_poll_input() -> Result<bool> {
        Ok(event::poll(Duration::from_millis(100))?)
    }

    /// Get keyboard event
    pub fn read_event() -> Result<Event> {
        Ok(event::read()?)
    }

    /// Abort any in-flight fetches
    pub fn shutdown(&mut self) {
        for handle in self.inflight.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}
