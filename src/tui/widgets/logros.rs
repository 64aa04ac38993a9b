use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::engine::achievements::{AchievementStatus, Category};
use crate::tui::theme;

/// Full catalog, grouped by category. `scroll` is in rendered lines.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    grouped: &[(Category, Vec<AchievementStatus>)],
    scroll: u16,
) {
    let unlocked: usize = grouped
        .iter()
        .flat_map(|(_, v)| v.iter())
        .filter(|s| s.unlocked)
        .count();
    let total: usize = grouped.iter().map(|(_, v)| v.len()).sum();

    let block = Block::default()
        .title(Span::styled(
            format!(" Logros  {}/{} ", unlocked, total),
            theme::sun(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER_FOCUS))
        .style(theme::surface());

    let mut lines = Vec::new();
    for (category, entries) in grouped {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", category.display_name()),
            theme::sun().add_modifier(Modifier::BOLD),
        )));
        for status in entries {
            let a = status.achievement;
            let (mark, name_style, desc_style) = if status.unlocked {
                ("✓", theme::green().add_modifier(Modifier::BOLD), theme::green())
            } else {
                ("○", theme::dim(), theme::dim())
            };
            lines.push(Line::from(vec![
                Span::styled(format!("    {} ", mark), name_style),
                Span::styled(format!("{:<22}", a.name), name_style),
                Span::styled(a.description, desc_style),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
