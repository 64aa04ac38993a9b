use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::engine::pet::REQUIRED_GAMES_PER_DAY;
use crate::models::GameKind;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, played: &[GameKind], games_today: u32) {
    let block = Block::default()
        .title(Span::styled(" Juegos de hoy ", theme::sun()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let mut lines = vec![Line::from("")];
    for kind in GameKind::all() {
        let done = played.contains(&kind);
        let (mark, style) = if done {
            ("✓", theme::green())
        } else {
            ("○", theme::dim())
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", mark), style),
            Span::styled(
                kind.display_name(),
                if done { theme::green() } else { theme::dim() },
            ),
        ]));
    }

    lines.push(Line::from(""));
    let quota_line = if games_today >= REQUIRED_GAMES_PER_DAY {
        Line::from(Span::styled(
            "  ¡Cuota completa!",
            theme::green().add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("  {}/{} para alimentar", games_today, REQUIRED_GAMES_PER_DAY),
            theme::orange(),
        ))
    };
    lines.push(quota_line);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
