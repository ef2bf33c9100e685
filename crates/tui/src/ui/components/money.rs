use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// `₹35000`, `₹150.5`, `₹-5000`.
pub fn format_amount(amount: f64) -> String {
    format!("₹{amount}")
}

/// Negative projections in red, the rest in green.
pub fn styled_amount(amount: f64, theme: &Theme) -> Span<'static> {
    let color = if amount < 0.0 {
        theme.negative
    } else {
        theme.positive
    };
    Span::styled(format_amount(amount), Style::default().fg(color))
}
