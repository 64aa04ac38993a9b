use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::DailyStats;
use crate::tui::theme;
use crate::utils::format::day_word;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    current: u32,
    best: u32,
    weekly: &[DailyStats],
) {
    let block = Block::default()
        .title(Span::styled(" Racha ", theme::sun()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    // Last-7-days dots by games played
    let mut dot_spans = vec![Span::styled("  ", theme::dim())];
    for i in 0..7 {
        let (dot, style) = if i < weekly.len() {
            match weekly[i].games_done {
                n if n >= 4 => ("●", theme::green().add_modifier(Modifier::BOLD)),
                2 | 3 => ("●", theme::orange()),
                1 => ("◑", theme::orange()),
                _ => ("○", theme::dim()),
            }
        } else {
            ("·", theme::dim())
        };
        dot_spans.push(Span::styled(dot, style));
        dot_spans.push(Span::styled("  ", theme::dim()));
    }
    let dots_line = Line::from(dot_spans);

    // Streak bar, filled toward a 30-day month
    let bar_len = 12usize;
    let ratio = (current as f64 / 30.0).min(1.0);
    let filled = (ratio * bar_len as f64).round() as usize;
    let empty = bar_len.saturating_sub(filled);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(empty));

    let streak_line = Line::from(vec![
        Span::styled("  ", theme::dim()),
        Span::styled(bar, theme::green()),
        Span::styled(
            format!("  {} {}", current, day_word(current)),
            theme::green().add_modifier(Modifier::BOLD),
        ),
    ]);

    let meta_line = Line::from(vec![Span::styled(
        format!("  Mejor: {} {}", best, day_word(best)),
        theme::dim(),
    )]);

    let text = vec![
        Line::from(""),
        streak_line,
        Line::from(""),
        dots_line,
        Line::from(""),
        meta_line,
    ];
    frame.render_widget(Paragraph::new(text).block(block), area);
}
