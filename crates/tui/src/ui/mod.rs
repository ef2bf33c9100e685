pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use dashboard::{DashboardState, DataSource};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{Mode, UiState};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &DashboardState, ui: &UiState) {
    let theme = Theme::default();
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    // Header, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, layout[0], state, ui, &theme);
    screens::dashboard::render(frame, layout[1], state, &theme);
    render_bottom_bar(frame, layout[2], ui, &theme);

    if ui.mode == Mode::IncomeInput {
        render_income_prompt(frame, area, ui, &theme);
    }
    components::toast::render(frame, area, ui.toast.as_ref(), &theme);
}

fn render_header(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &DashboardState,
    ui: &UiState,
    theme: &Theme,
) {
    let (status, status_style) = if state.is_loading {
        ("Loading", Style::default().fg(theme.dim))
    } else {
        match state.source {
            Some(DataSource::Live) => ("Live", Style::default().fg(theme.positive)),
            Some(DataSource::Fallback) => ("Demo data", Style::default().fg(theme.error)),
            None => ("-", Style::default().fg(theme.dim)),
        }
    };
    let refresh = state
        .last_refresh
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    let line = Line::from(vec![
        Span::styled(
            "FinAgent",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Backend", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", ui.base_url)),
        Span::styled("Refresh", Style::default().fg(theme.dim)),
        Span::raw(format!(": {refresh}  ")),
        Span::styled(status, status_style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, ui: &UiState, theme: &Theme) {
    let hints: &[(&str, &str)] = match ui.mode {
        Mode::Normal => &[("a", "add income"), ("r", "refresh"), ("q", "quit")],
        Mode::IncomeInput => &[("Enter", "submit"), ("Esc", "cancel")],
    };

    let mut parts = Vec::new();
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        }
        parts.push(Span::styled(*key, Style::default().fg(theme.accent)));
        parts.push(Span::raw(format!(" {label}")));
    }
    if ui.busy {
        parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        parts.push(Span::styled("working...", Style::default().fg(theme.dim)));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn render_income_prompt(frame: &mut Frame<'_>, area: Rect, ui: &UiState, theme: &Theme) {
    let rect = centered(area, 40, 3);
    let block = Block::default()
        .title(Span::styled(
            " Enter income amount (₹) ",
            Style::default().fg(theme.accent),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.surface));

    let input = Paragraph::new(Line::from(vec![
        Span::styled(ui.income_input.as_str(), Style::default().fg(theme.text)),
        Span::styled("█", Style::default().fg(theme.dim)),
    ]))
    .block(block);

    frame.render_widget(Clear, rect);
    frame.render_widget(input, rect);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
