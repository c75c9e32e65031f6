//! Dashboard rendering - charts row and programs panel

use crate::app::App;
use crate::view::{BackgroundChart, ConversationsChart, ProgramCard, ProgramsPanel};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, List, ListItem,
        Paragraph, Wrap,
    },
    Frame,
};

/// Render the full dashboard
pub fn render_dashboard(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Charts row
            Constraint::Min(8),     // Programs
            Constraint::Length(3),  // Footer
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_charts(f, app, chunks[1]);
    render_programs(f, app, chunks[2]);
    render_footer(f, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let updated = app
        .last_stats_at
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    let programs_summary = match &app.programs {
        ProgramsPanel::Loading => "loading".to_string(),
        ProgramsPanel::Empty => "none".to_string(),
        ProgramsPanel::Loaded(cards) => cards.len().to_string(),
        ProgramsPanel::Error(_) => "error".to_string(),
    };

    let status_text = format!(
        "📊 EduDash | Stats updated: {} ({}x) | Programs: {}",
        updated, app.stats_refreshes, programs_summary
    );

    let header = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Cyan));

    f.render_widget(header, area);
}

fn render_charts(f: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_conversations(f, app.conversations.as_ref(), halves[0]);
    render_backgrounds(f, app.backgrounds.as_ref(), halves[1]);
}

fn render_conversations(f: &mut Frame, chart: Option<&ConversationsChart>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Conversations (daily)");

    let Some(chart) = chart else {
        render_placeholder(f, block, "(waiting for stats)", area);
        return;
    };
    if chart.is_empty() {
        render_placeholder(f, block, "(no conversations yet)", area);
        return;
    }

    let datasets = vec![Dataset::default()
        .name("conversations")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&chart.points)];

    let x_max = chart.len().saturating_sub(1).max(1) as f64;
    let y_max = chart.max.max(1) as f64;

    // First and last day on the x axis, zero and peak on the y axis
    let x_labels: Vec<Span> = vec![
        Span::raw(chart.labels.first().cloned().unwrap_or_default()),
        Span::raw(chart.labels.last().cloned().unwrap_or_default()),
    ];
    let y_labels: Vec<Span> = vec![Span::raw("0"), Span::raw(chart.max.to_string())];

    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    f.render_widget(widget, area);
}

fn render_backgrounds(f: &mut Frame, chart: Option<&BackgroundChart>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("User backgrounds");

    let Some(chart) = chart else {
        render_placeholder(f, block, "(waiting for stats)", area);
        return;
    };
    if chart.is_empty() {
        render_placeholder(f, block, "(no profiles yet)", area);
        return;
    }

    let bars: Vec<Bar> = chart
        .slices
        .iter()
        .map(|slice| {
            Bar::default()
                .value(slice.count)
                .label(Line::from(slice.label.clone()))
                .style(Style::default().fg(slice.color))
                .value_style(Style::default().fg(Color::Black).bg(slice.color))
        })
        .collect();

    let widget = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(widget, area);
}

fn render_placeholder(f: &mut Frame, block: Block, text: &str, area: Rect) {
    let placeholder = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(placeholder, area);
}

fn render_programs(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Programs (↑↓ select, r refresh)");

    match &app.programs {
        ProgramsPanel::Loading => {
            render_placeholder(f, block, "(loading programs...)", area);
        }
        ProgramsPanel::Empty => {
            render_placeholder(f, block, "No programs found. Press 'r' to reload.", area);
        }
        ProgramsPanel::Error(message) => {
            let banner = Paragraph::new(format!("⚠ Failed to load programs: {}", message))
                .block(block)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::Red));
            f.render_widget(banner, area);
        }
        ProgramsPanel::Loaded(cards) => {
            let items: Vec<ListItem> = cards
                .iter()
                .enumerate()
                .map(|(idx, card)| program_item(card, idx == app.selected_program))
                .collect();

            let list = List::new(items).block(block);
            f.render_widget(list, area);
        }
    }
}

fn program_item(card: &ProgramCard, selected: bool) -> ListItem<'static> {
    let style = if selected {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("🎓 {}", card.name),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  updated {}", card.updated_at),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            card.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(
                format!("budget {}", card.budget_places),
                Style::default().fg(Color::Blue),
            ),
            Span::raw(" │ "),
            Span::styled(
                format!("contract {}", card.contract_places),
                Style::default().fg(Color::Green),
            ),
            Span::raw(" │ "),
            Span::styled(
                format!("duration {}", card.duration),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(" │ "),
            Span::styled(
                format!("cost {}", card.cost),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(Span::styled(
            card.url.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(""),
    ];

    ListItem::new(lines).style(style)
}

fn render_footer(f: &mut Frame, area: Rect) {
    let help_text = "q: Quit │ r: Refresh │ ↑↓: Select program";

    let footer = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::DarkGray));

    f.render_widget(footer, area);
}
