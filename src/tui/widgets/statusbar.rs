use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::View;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, view: &View) {
    let hints: &[(&str, &str)] = match view {
        View::Dashboard => &[
            ("f", "feed"),
            ("a", "logros"),
            ("s", "stats"),
            ("?", "help"),
            ("Esc", "quit"),
        ],
        View::Achievements => &[("↑↓", "scroll"), ("a/Esc", "back")],
        View::Stats => &[("s/Esc", "back")],
        View::Help => &[("?/Esc", "back")],
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(format!("  [{}] ", key), theme::sun()));
        spans.push(Span::styled(*label, theme::dim()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
