use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::models::{DailyActivityFacts, PetPhase};
use crate::tui::theme;

/// Señor Pollo by phase. The fed bird gets a worm.
fn art(phase: PetPhase, happiness: u8) -> [&'static str; 4] {
    match phase {
        PetPhase::Fed => [r"   \\ //", "   ('o')~", "  <(   )>", "    ^ ^"],
        PetPhase::ReadyToFeed => [r"   \\ //", "   ('o')", "  <(   )>", "    ^ ^"],
        PetPhase::Hungry if happiness < 20 => [r"   \\ //", "   (;o;)", "  <(   )>", "    ^ ^"],
        PetPhase::Hungry => [r"   \\ //", "   ('.')", "  <(   )>", "    ^ ^"],
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    pet_name: &str,
    facts: &DailyActivityFacts,
    phase: PetPhase,
) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", pet_name), theme::sun()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // art
            Constraint::Length(1), // phase
            Constraint::Length(4), // big happiness
            Constraint::Min(0),
        ])
        .split(inner);

    let phase_style = match phase {
        PetPhase::Hungry if facts.happiness_level < 20 => theme::red(),
        PetPhase::Hungry => theme::orange(),
        PetPhase::ReadyToFeed => theme::green().add_modifier(Modifier::BOLD),
        PetPhase::Fed => theme::sky(),
    };

    let art_lines: Vec<Line> = std::iter::once(Line::from(""))
        .chain(
            art(phase, facts.happiness_level)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, theme::sun()))),
        )
        .collect();
    frame.render_widget(
        Paragraph::new(art_lines).alignment(Alignment::Center),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(phase.display_name(), phase_style)))
            .alignment(Alignment::Center),
        chunks[1],
    );

    let happiness = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(if facts.happiness_level >= 80 {
            theme::green()
        } else {
            theme::orange()
        })
        .lines(vec![format!("{}%", facts.happiness_level).into()])
        .alignment(Alignment::Center)
        .build();
    frame.render_widget(happiness, chunks[2]);
}
