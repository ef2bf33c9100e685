use dashboard::DashboardState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

use crate::ui::{
    components::{
        card::Card,
        money::{format_amount, styled_amount},
    },
    theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &DashboardState, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Balance
            Constraint::Length(6), // Nudge
            Constraint::Min(3),    // Forecast
        ])
        .split(area);

    render_balance(frame, layout[0], state, theme);
    render_nudge(frame, layout[1], state, theme);
    render_forecast(frame, layout[2], state, theme);
}

fn render_balance(frame: &mut Frame<'_>, area: Rect, state: &DashboardState, theme: &Theme) {
    let value = state
        .balance
        .map(format_amount)
        .unwrap_or_else(|| "₹---".to_string());

    let lines = vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("a", Style::default().fg(theme.accent)),
            Span::styled(" add income", Style::default().fg(theme.dim)),
        ]),
    ];

    Card::new("Total Balance", theme).render_with(frame, area, Paragraph::new(lines));
}

fn render_nudge(frame: &mut Frame<'_>, area: Rect, state: &DashboardState, theme: &Theme) {
    let text = if state.nudge_text.is_empty() {
        "Loading nudge..."
    } else {
        state.nudge_text.as_str()
    };
    let text_style = if state.is_critical() {
        Style::default().fg(theme.error)
    } else {
        Style::default().fg(theme.text)
    };

    let mut lines = vec![Line::from(Span::styled(text, text_style))];
    if let Some(risk) = &state.risk_level {
        lines.push(Line::from(Span::styled(
            format!("Risk: {risk}"),
            Style::default().fg(theme.dim),
        )));
    }

    Card::new("Smart Nudge", theme)
        .alert(state.is_critical())
        .render_with(
            frame,
            area,
            Paragraph::new(lines).wrap(Wrap { trim: true }),
        );
}

fn render_forecast(frame: &mut Frame<'_>, area: Rect, state: &DashboardState, theme: &Theme) {
    let card = Card::new("Weekly Forecast", theme);

    if state.forecast.is_empty() {
        let message = if state.is_loading {
            "Loading forecast..."
        } else {
            "No forecast"
        };
        card.render_with(
            frame,
            area,
            Paragraph::new(Span::styled(message, Style::default().fg(theme.dim))),
        );
        return;
    }

    let items: Vec<ListItem> = state
        .forecast
        .iter()
        .map(|point| {
            ListItem::new(Line::from(vec![
                Span::styled("▌ ", Style::default().fg(theme.accent)),
                Span::styled(format!("{:<5}", point.day), Style::default().fg(theme.text)),
                styled_amount(point.amount, theme),
            ]))
        })
        .collect();

    card.render_with(frame, area, List::new(items));
}
