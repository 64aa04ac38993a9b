use chrono::Local;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, player_name: &str, level: u32, title: &str) {
    let today = Local::now();
    let date_str = today.format("%A, %b %d, %Y").to_string();

    let title_line = Line::from(vec![
        Span::styled("  🐣  ", theme::sun()),
        Span::styled("pollito", theme::sun().add_modifier(Modifier::BOLD)),
    ]);

    let info_line = Line::from(vec![
        Span::styled(player_name, theme::orange()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(format!("Nivel {} — {}", level, title), theme::orange()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(date_str, theme::dim()),
    ]);

    let text = vec![title_line, Line::from(""), info_line];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::sun().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
